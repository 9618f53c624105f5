//! Vaulted Billing CLI - Inspect card payloads and country translations.
//!
//! # Usage
//!
//! ```bash
//! # Normalize a card payload (JSON or YAML)
//! vb-cli inspect card.json
//!
//! # Include the gateway country index
//! vb-cli inspect card.yaml --table gateway-countries.yaml
//!
//! # Resolve a country
//! vb-cli country CA --output yaml
//! ```
//!
//! # Commands
//!
//! - `inspect` - Print the normalized attributes and derived codes of a card payload
//! - `country` - Print how a raw country string resolves

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::{CliConfig, DEFAULT_LOG_FILTER, LogFormat, OutputFormat};

#[derive(Parser)]
#[command(name = "vb-cli")]
#[command(author, version, about = "Vaulted Billing CLI tools")]
struct Cli {
    /// Report format (overrides `VB_OUTPUT`)
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a card payload and print its derived codes
    Inspect {
        /// JSON or YAML file holding one card object
        file: PathBuf,

        /// Gateway country table (overrides `VB_GATEWAY_TABLE`)
        #[arg(short, long)]
        table: Option<PathBuf>,
    },
    /// Resolve a raw country string
    Country {
        /// Alpha-2, alpha-3, numeric code, or English name
        raw: String,

        /// Gateway country table (overrides `VB_GATEWAY_TABLE`)
        #[arg(short, long)]
        table: Option<PathBuf>,
    },
}

fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let json_layer = (format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (format == LogFormat::Text)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let mut config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };
    init_tracing(config.log_format);

    if let Some(output) = cli.output {
        config.output = output;
    }

    if let Err(e) = run(cli.command, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Inspect { file, table } => {
            commands::inspect::run(&file, table.as_deref(), config)?;
        }
        Commands::Country { raw, table } => {
            commands::country::run(&raw, table.as_deref(), config)?;
        }
    }
    Ok(())
}
