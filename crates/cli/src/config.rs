//! Client configuration from environment and CLI arguments.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Settings shared by every command.
#[derive(Debug, Args)]
pub(crate) struct Settings {
    /// Storefront API base URL
    #[arg(
        long,
        env = "TIENDITA_API_URL",
        default_value = "http://localhost:3000/api"
    )]
    pub api_url: String,

    /// Persisted client state file
    #[arg(long, env = "TIENDITA_STATE_FILE", default_value = ".tiendita/state.json")]
    pub state_file: PathBuf,

    /// Log level filter
    #[arg(long, env = "TIENDITA_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "TIENDITA_LOG_FORMAT", value_enum, default_value = "compact")]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormat {
    Compact,
    Json,
}
