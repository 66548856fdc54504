//! Token payload entity.
//!
//! A payload is an open claim map supplied by the caller. The codec merges the
//! reserved temporal claims (`exp`, `iat`, `jti`) into a copy of it before
//! signing.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Token validity window (24 hours)
pub const TOKEN_EXPIRY_HOURS: i64 = 24;

/// Expiration timestamp claim
pub const CLAIM_EXP: &str = "exp";

/// Issued-at timestamp claim
pub const CLAIM_IAT: &str = "iat";

/// Unique token identifier claim
pub const CLAIM_JTI: &str = "jti";

/// Claim carrying the authenticated user
pub const CLAIM_USER_ID: &str = "user_id";

/// Claim carrying the user's tenant
pub const CLAIM_TENANT_ID: &str = "tenant_id";

/// Claim map carried inside a token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Creates an empty payload
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Creates the payload issued to a user on login
    pub fn for_user(user_id: i64, tenant_id: i64) -> Self {
        Self::new()
            .with_claim(CLAIM_USER_ID, user_id)
            .with_claim(CLAIM_TENANT_ID, tenant_id)
    }

    /// Adds a claim, replacing any previous value under the same name
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every claim in `other` is present here with an equal value
    pub fn contains_all(&self, other: &Payload) -> bool {
        other
            .0
            .iter()
            .all(|(name, value)| self.0.get(name) == Some(value))
    }

    pub fn user_id(&self) -> Option<i64> {
        self.get(CLAIM_USER_ID).and_then(Value::as_i64)
    }

    pub fn tenant_id(&self) -> Option<i64> {
        self.get(CLAIM_TENANT_ID).and_then(Value::as_i64)
    }

    /// Expiration as seconds since the Unix epoch.
    ///
    /// Fractional values are truncated toward zero.
    pub fn exp(&self) -> Option<i64> {
        self.get(CLAIM_EXP).and_then(as_timestamp)
    }

    /// Issued-at as seconds since the Unix epoch
    pub fn iat(&self) -> Option<i64> {
        self.get(CLAIM_IAT).and_then(as_timestamp)
    }

    pub fn jti(&self) -> Option<&str> {
        self.get(CLAIM_JTI).and_then(Value::as_str)
    }

    /// Absolute expiry instant, if the payload carries a usable `exp` claim
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp()
            .and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }

    /// Checks expiry against `now`.
    ///
    /// A payload without an `exp` claim counts as expired: there is nothing
    /// proving it is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.exp() {
            Some(exp) => exp <= now.timestamp(),
            None => true,
        }
    }
}

fn as_timestamp(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|secs| secs.is_finite()).map(|secs| secs as i64))
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Payload> for Value {
    fn from(payload: Payload) -> Self {
        Value::Object(payload.0)
    }
}
