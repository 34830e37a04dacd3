use thiserror::Error;

#[derive(Error, Debug)]
pub enum BitcodinError {
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Missing required field `{field}` for {resource}")]
    MissingRequiredField {
        resource: &'static str,
        field: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl BitcodinError {
    /// Transport failures and 5xx/429 responses may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            BitcodinError::Transport(e) => e.is_timeout() || e.is_connect(),
            BitcodinError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            BitcodinError::ConfigError { .. }
            | BitcodinError::MissingConfigError { .. }
            | BitcodinError::InvalidConfigValueError { .. }
            | BitcodinError::MissingRequiredField { .. } => 1,
            _ if self.is_retryable() => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, BitcodinError>;
