//! Token-related error types
//!
//! Every way a token can fail to authenticate is a distinct variant so callers
//! and tests can tell "blank", "malformed" and "forged" apart without relying
//! on string matching.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Blank token")]
    BlankToken,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token algorithm does not match the configured algorithm")]
    AlgorithmMismatch,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Unsupported signing algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },
}

impl TokenError {
    /// Short machine-readable name, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::BlankToken => "blank",
            TokenError::MalformedToken => "malformed",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::AlgorithmMismatch => "algorithm_mismatch",
            TokenError::InvalidClaims => "invalid_claims",
            TokenError::TokenGenerationFailed => "generation_failed",
            TokenError::UnsupportedAlgorithm { .. } => "unsupported_algorithm",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match error.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                TokenError::AlgorithmMismatch
            }
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => TokenError::MalformedToken,
            _ => TokenError::InvalidClaims,
        }
    }
}
