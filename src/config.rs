//! Runtime configuration loaded from environment variables.
//!
//! Configuration only governs diagnostics. The scenarios themselves are
//! fixed call sequences and read nothing from the environment.
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Tracing filter directive (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! Variables may also be supplied through a `.env` file, loaded by
//! `dotenvy` in `main.rs` before [`load_from_env`] is called.

use crate::error::ConfigError;
use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Output format for diagnostic logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Process configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Filter directive passed to `EnvFilter`.
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LOG_FORMAT` is set to an unknown format.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);

        let log_format = match env::var("LOG_FORMAT") {
            Ok(value) => value.parse::<LogFormat>().context("Failed to parse LOG_FORMAT")?,
            Err(_) => defaults.log_format,
        };

        Ok(Self {
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogFilter`] if `log_level` is not a
    /// valid tracing filter directive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.env_filter().map(|_| ())
    }

    /// Builds the tracing filter for this configuration.
    ///
    /// # Errors
    ///
    /// Same conditions as [`validate`](Self::validate).
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| ConfigError::InvalidLogFilter(e.to_string()))
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
