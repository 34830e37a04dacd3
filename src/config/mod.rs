#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://portal.bitcodin.com/api";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Connection settings handed to `BitcodinClient::new`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_url: String,
    pub api_key: String,
    pub api_version: String,
    pub timeout_seconds: u64,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Reads `BITCODIN_API_KEY` (required), `BITCODIN_API_URL`,
    /// `BITCODIN_API_VERSION` and `BITCODIN_TIMEOUT_SECONDS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("BITCODIN_API_KEY");
        let mut config = Self::new(validate_required_field("BITCODIN_API_KEY", &api_key)?.clone());

        if let Some(url) = lookup("BITCODIN_API_URL") {
            config.api_url = url;
        }
        if let Some(version) = lookup("BITCODIN_API_VERSION") {
            config.api_version = version;
        }
        if let Some(timeout) = lookup("BITCODIN_TIMEOUT_SECONDS") {
            config.timeout_seconds = timeout.parse().map_err(|_| {
                crate::utils::error::BitcodinError::InvalidConfigValueError {
                    field: "BITCODIN_TIMEOUT_SECONDS".to_string(),
                    value: timeout.clone(),
                    reason: "Expected a whole number of seconds".to_string(),
                }
            })?;
        }
        Ok(config)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl ConfigProvider for ClientConfig {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn api_version(&self) -> &str {
        &self.api_version
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.api_url)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_non_empty_string("api_version", &self.api_version)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 600)?;

        tracing::debug!("Client configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BitcodinError;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("somefuncyapikey");

        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.api_version(), "v1");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("BITCODIN_API_KEY", "key"),
            ("BITCODIN_API_URL", "http://localhost:3000/api"),
            ("BITCODIN_TIMEOUT_SECONDS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "key");
        assert_eq!(config.api_url, "http://localhost:3000/api");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_from_lookup_requires_key() {
        let result = ClientConfig::from_lookup(lookup_from(&[]));

        assert!(matches!(result, Err(BitcodinError::MissingConfigError { .. })));
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        let result = ClientConfig::from_lookup(lookup_from(&[
            ("BITCODIN_API_KEY", "key"),
            ("BITCODIN_TIMEOUT_SECONDS", "soon"),
        ]));

        assert!(matches!(result, Err(BitcodinError::InvalidConfigValueError { .. })));
    }

    #[test]
    fn test_validation_failures() {
        assert!(ClientConfig::new("").validate().is_err());
        assert!(ClientConfig::new("key").with_api_url("ftp://x").validate().is_err());

        let mut config = ClientConfig::new("key");
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", ClientConfig::new("topsecret"));

        assert!(!rendered.contains("topsecret"));
    }
}
