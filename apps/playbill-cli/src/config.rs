//! # Configuration
//!
//! Resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (applied in `lib.rs`)
//! 2. Environment variables (`PLAYBILL_*`)
//! 3. Defaults (this file)

use std::path::PathBuf;

use clap::ValueEnum;
use directories::ProjectDirs;
use playbill_core::CurrencyFormat;

use crate::error::CliError;

const DEFAULT_LOG_FILTER: &str = "info,playbill=debug";

/// Statement output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding `plays.json` and `invoices.json`
    pub data_dir: PathBuf,

    /// Output format when `--format` is not given
    pub format: OutputFormat,

    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,

    /// Amount display policy handed to the renderers
    pub currency: CurrencyFormat,
}

impl Default for CliConfig {
    /// ## Default Values
    /// - Data dir: platform data dir (`~/.local/share/playbill` on Linux),
    ///   or `./data` when none can be determined
    /// - Format: text
    /// - Currency: USD, en-US
    fn default() -> Self {
        CliConfig {
            data_dir: default_data_dir(),
            format: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            currency: CurrencyFormat::usd(),
        }
    }
}

impl CliConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PLAYBILL_DATA_DIR`: fixture directory
    /// - `PLAYBILL_FORMAT`: `text`, `html` or `json`
    /// - `PLAYBILL_LOG`: log filter (falls back to `RUST_LOG`)
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`] with an injectable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(dir) = lookup("PLAYBILL_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(format) = lookup("PLAYBILL_FORMAT") {
            config.format = OutputFormat::from_str(&format, true).map_err(|_| {
                CliError::Config(format!("PLAYBILL_FORMAT must be text, html or json, got '{}'", format))
            })?;
        }

        if let Some(filter) = lookup("PLAYBILL_LOG").or_else(|| lookup("RUST_LOG")) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    pub fn plays_path(&self) -> PathBuf {
        self.data_dir.join("plays.json")
    }

    pub fn invoices_path(&self) -> PathBuf {
        self.data_dir.join("invoices.json")
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "playbill", "theater")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("data"))
}
