//! Token signing configuration

use serde::{Deserialize, Serialize};

/// Secret used when nothing is configured. Never acceptable in production.
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Default validity window of an issued token (24 hours)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 86_400;

/// Longest validity window accepted (10 years)
pub const MAX_TOKEN_EXPIRY_SECONDS: i64 = 10 * 365 * 86_400;

/// JWT signing configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret used to sign and verify tokens
    pub secret: String,

    /// Token validity window in seconds
    #[serde(default = "default_expiry_seconds")]
    pub expiry_seconds: i64,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            expiry_seconds: default_expiry_seconds(),
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let expiry_seconds = std::env::var("JWT_EXPIRY_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_expiry_seconds);
        let algorithm = std::env::var("JWT_ALGORITHM").unwrap_or_else(|_| default_algorithm());

        Self {
            secret,
            expiry_seconds,
            algorithm,
        }
    }

    /// Set token expiry in hours
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.expiry_seconds = hours.saturating_mul(3600);
        self
    }

    /// Set the signing algorithm name
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_expiry_seconds() -> i64 {
    DEFAULT_TOKEN_EXPIRY_SECONDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_expiry_hours_saturates() {
        assert_eq!(JwtConfig::default().with_expiry_hours(2).expiry_seconds, 7200);
        assert_eq!(
            JwtConfig::default().with_expiry_hours(i64::MAX).expiry_seconds,
            i64::MAX
        );
    }

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.expiry_seconds, 86_400);
        assert_eq!(config.algorithm, "HS256");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret")
            .with_expiry_hours(2)
            .with_algorithm("HS512");

        assert_eq!(config.expiry_seconds, 7200);
        assert_eq!(config.algorithm, "HS512");
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_deserialize_defaults() {
        let config: JwtConfig = serde_json::from_str(r#"{"secret":"s3cret"}"#).unwrap();
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.expiry_seconds, DEFAULT_TOKEN_EXPIRY_SECONDS);
        assert_eq!(config.algorithm, "HS256");
    }
}
