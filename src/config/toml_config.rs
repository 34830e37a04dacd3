use crate::config::{ClientConfig, DEFAULT_API_URL, DEFAULT_API_VERSION, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::{BitcodinError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

/// On-disk client configuration.
///
/// ```toml
/// [api]
/// key = "${BITCODIN_API_KEY}"
/// url = "https://portal.bitcodin.com/api"
/// timeout_seconds = 30
///
/// [logging]
/// level = "debug"
/// json = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub key: String,
    pub url: Option<String>,
    pub version: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BitcodinError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BitcodinError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api.url.clone().unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_key: self.api.key.clone(),
            api_version: self
                .api
                .version
                .clone()
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            timeout_seconds: self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if ENV_VAR.is_match(&self.api.key) {
            return Err(BitcodinError::MissingConfigError {
                field: format!("api.key (unresolved {})", self.api.key),
            });
        }
        self.client_config().validate()
    }
}
