pub mod cache;
pub mod client;
pub mod codec;
pub mod payload;
mod resources;
pub mod s3_url;

pub use crate::domain::model::*;
pub use crate::domain::ports::{ConfigProvider, Fetchable, Resource};
pub use crate::utils::error::Result;
