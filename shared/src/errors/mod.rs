//! Shared error types

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Insecure configuration: {message}")]
    Insecure { message: String },

    #[error("Logging initialization failed: {message}")]
    Logging { message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
