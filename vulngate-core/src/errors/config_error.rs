//! Configuration errors.

use super::error_code::{self, VulngateErrorCode};

/// Errors raised while loading gate configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid TOML in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid report pattern {pattern}: {message}")]
    Pattern { pattern: String, message: String },
}

impl VulngateErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
