pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::Cli;
pub use crate::config::{toml_config::TomlConfig, ClientConfig};

pub use crate::core::cache::ListCache;
pub use crate::core::client::BitcodinClient;
pub use crate::core::codec::{camelize, to_domain, to_wire, underscore, CaseStyle};
pub use crate::core::s3_url::{extract_bucket, extract_object_key, parse_s3_url, S3Location};
pub use crate::domain::model::*;
pub use crate::domain::ports::{ConfigProvider, Fetchable, Resource};
pub use crate::utils::error::{BitcodinError, Result};
