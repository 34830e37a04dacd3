// Domain layer: resource records and the ports the client is built against.

pub mod model;
pub mod ports;
