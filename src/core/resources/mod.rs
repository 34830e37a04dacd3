// Per-resource operations on BitcodinClient.

mod encoding_profile;
mod input;
mod job;
mod output;
mod transfer_job;
