//! Outcome of validating a token.

use crate::domain::entities::Payload;
use crate::errors::TokenError;

/// Result of a single decode-and-check pass over a token.
///
/// "Structurally valid but expired" is kept apart from "invalid": an expired
/// token still decodes to its payload, it just no longer authenticates.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenStatus {
    /// Signature verified and `exp` is in the future
    Valid(Payload),
    /// Signature verified but `exp` has passed (or is missing)
    Expired(Payload),
    /// Blank, malformed or forged
    Invalid(TokenError),
}

impl TokenStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, TokenStatus::Valid(_))
    }

    /// Anything that is not provably valid counts as expired
    pub fn is_expired(&self) -> bool {
        !self.is_valid()
    }

    /// Decoded payload, present for both valid and expired tokens
    pub fn payload(&self) -> Option<&Payload> {
        match self {
            TokenStatus::Valid(payload) | TokenStatus::Expired(payload) => Some(payload),
            TokenStatus::Invalid(_) => None,
        }
    }
}
