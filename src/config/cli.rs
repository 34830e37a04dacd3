use crate::config::toml_config::TomlConfig;
use crate::config::ClientConfig;
use crate::domain::model::JobListStatus;
use crate::utils::error::{BitcodinError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bitcodin")]
#[command(about = "Command-line client for the bitcodin encoding API")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, env = "BITCODIN_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "BITCODIN_API_URL", global = true)]
    pub api_url: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(subcommand)]
    Input(InputCommand),
    #[command(subcommand)]
    Output(OutputCommand),
    #[command(subcommand)]
    Profile(ProfileCommand),
    #[command(subcommand)]
    Job(JobCommand),
    #[command(subcommand)]
    Transfer(TransferCommand),
    /// Key-case conversions, no API access
    #[command(subcommand)]
    Codec(CodecCommand),
    /// Print the bucket and object key of an S3 URL
    S3Url { url: String },
}

/// `--params` takes snake_case JSON, or `@file.json`.
#[derive(Debug, Subcommand)]
pub enum InputCommand {
    Create {
        #[arg(long)]
        url: Option<String>,
        #[arg(long, default_value = "{}")]
        params: String,
    },
    Get {
        id: i64,
    },
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        reload: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum OutputCommand {
    Create {
        #[arg(long)]
        params: String,
    },
    Get {
        id: i64,
    },
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        reload: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    Create {
        #[arg(long)]
        params: String,
    },
    Get {
        id: i64,
    },
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[derive(Debug, Subcommand)]
pub enum JobCommand {
    Create {
        #[arg(long)]
        params: String,
    },
    Get {
        id: i64,
    },
    Status {
        id: i64,
    },
    Manifest {
        id: i64,
    },
    List {
        #[arg(long, default_value = "all")]
        status: JobListStatus,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        reload: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TransferCommand {
    Create {
        #[arg(long)]
        job_id: i64,
        #[arg(long)]
        output_id: i64,
    },
    List {
        #[arg(long)]
        job_id: i64,
        #[arg(long)]
        reload: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum CodecCommand {
    Camelize {
        key: String,
        #[arg(long)]
        capitalize_first: bool,
    },
    Underscore {
        key: String,
    },
    /// Convert a snake_case JSON document to camelCase keys
    ToWire {
        json: String,
        #[arg(long)]
        capitalize_first: bool,
    },
    /// Convert a camelCase JSON document to snake_case keys
    ToDomain {
        json: String,
    },
}

impl Cli {
    pub fn load_toml(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    /// File settings first, then flags and environment on top.
    pub fn client_config(&self, file: Option<&TomlConfig>) -> Result<ClientConfig> {
        let mut config = match (file, &self.api_key) {
            (Some(file), _) => file.client_config(),
            (None, Some(key)) => ClientConfig::new(key.clone()),
            (None, None) => {
                return Err(BitcodinError::MissingConfigError {
                    field: "api key (--api-key, BITCODIN_API_KEY or [api] key)".to_string(),
                })
            }
        };

        if let Some(key) = &self.api_key {
            config.api_key = key.clone();
        }
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        Ok(config)
    }
}
