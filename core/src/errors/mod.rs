//! Domain-specific error types and error handling.

mod types;


pub use types::TokenError;

use thiserror::Error;

/// Errors raised while building or configuring the token subsystem
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl From<tg_shared::ConfigError> for DomainError {
    fn from(error: tg_shared::ConfigError) -> Self {
        DomainError::Config {
            message: error.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
