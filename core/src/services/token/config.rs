//! Configuration for the token service

use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;
use tg_shared::config::auth::DEFAULT_JWT_SECRET;
use tg_shared::{JwtConfig, TokenCacheConfig};

use crate::domain::entities::token::TOKEN_EXPIRY_HOURS;
use crate::errors::{DomainResult, TokenError};

/// Configuration for the token codec and cache
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm, one of the HMAC family
    pub algorithm: Algorithm,
    /// Token validity window in seconds
    pub token_expiry_seconds: i64,
    /// Whether decoded tokens are cached
    pub cache_enabled: bool,
    /// Minimum seconds between lazy sweeps
    pub sweep_interval_seconds: u64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            token_expiry_seconds: TOKEN_EXPIRY_HOURS * 3600,
            cache_enabled: true,
            sweep_interval_seconds: 3600,
        }
    }
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Builds the service configuration from the shared application config
    pub fn from_shared(jwt: &JwtConfig, cache: &TokenCacheConfig) -> DomainResult<Self> {
        let algorithm = Algorithm::from_str(&jwt.algorithm).map_err(|_| {
            TokenError::UnsupportedAlgorithm {
                algorithm: jwt.algorithm.clone(),
            }
        })?;

        Ok(Self {
            jwt_secret: jwt.secret.clone(),
            algorithm,
            token_expiry_seconds: jwt.expiry_seconds,
            cache_enabled: cache.enabled,
            sweep_interval_seconds: cache.sweep_interval_seconds,
        })
    }

    /// Forces every decode through signature verification
    pub fn without_cache(mut self) -> Self {
        self.cache_enabled = false;
        self
    }

    pub fn token_expiry(&self) -> Duration {
        let bound = i64::MAX / 1_000;
        Duration::seconds(self.token_expiry_seconds.clamp(-bound, bound))
    }

    pub fn sweep_interval(&self) -> Duration {
        let seconds = i64::try_from(self.sweep_interval_seconds).unwrap_or(i64::MAX);
        Duration::seconds(seconds.min(i64::MAX / 1_000))
    }
}
