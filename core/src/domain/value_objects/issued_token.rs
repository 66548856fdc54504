//! Issued token value object handed back to login flows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A freshly minted token together with its expiry metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IssuedToken {
    /// Signed token string
    pub token: String,

    /// Unique identifier (`jti` claim) of the token
    pub token_id: String,

    /// Absolute expiry instant
    pub expires_at: DateTime<Utc>,

    /// Seconds until expiry at the moment of issue
    pub expires_in: i64,
}

impl IssuedToken {
    pub fn new(
        token: String,
        token_id: String,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token,
            token_id,
            expires_at,
            expires_in: (expires_at - issued_at).num_seconds(),
        }
    }
}
