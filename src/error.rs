//! Error types for configuration and startup.
//!
//! The demonstrations themselves have no failure path: mail sends report a
//! `bool` and notifications are infallible. Errors only arise from the
//! ambient configuration.

/// Errors raised while validating [`crate::config::Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("LOG_FORMAT must be 'text' or 'json', got '{0}'")]
    InvalidLogFormat(String),

    #[error("RUST_LOG is not a valid filter directive: {0}")]
    InvalidLogFilter(String),
}
