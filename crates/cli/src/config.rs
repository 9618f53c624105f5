//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VB_GATEWAY_TABLE` - Path to a JSON/YAML list of alpha-3 codes, used when
//!   no `--table` flag is given
//! - `VB_OUTPUT` - Report format, `json` or `yaml` (default: json)
//! - `VB_LOG_FORMAT` - Log format, `text` or `json` (default: text)
//! - `RUST_LOG` - Log filter (default: `vaulted_billing_cli=info,vaulted_billing_core=warn`)

use std::path::PathBuf;

use clap::ValueEnum;
use thiserror::Error;

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "vaulted_billing_cli=info,vaulted_billing_core=warn";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Format used to print reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Format used for log lines on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Default gateway country table
    pub gateway_table: Option<PathBuf>,
    /// Report format
    pub output: OutputFormat,
    /// Log format
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unsupported value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unsupported value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let gateway_table = lookup("VB_GATEWAY_TABLE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let output = match lookup("VB_OUTPUT") {
            Some(value) => OutputFormat::from_str(value.trim(), true)
                .map_err(|e| ConfigError::InvalidEnvVar("VB_OUTPUT".to_string(), e))?,
            None => OutputFormat::default(),
        };

        let log_format = match lookup("VB_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "VB_LOG_FORMAT".to_string(),
                    format!("expected `text` or `json`, got `{other}`"),
                ));
            }
        };

        Ok(Self {
            gateway_table,
            output,
            log_format,
        })
    }
}
