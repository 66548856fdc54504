//! Configuration module
//!
//! - `auth` - token signing secret, algorithm and validity window
//! - `cache` - in-memory token cache and sweep cadence
//! - `environment` - environment detection and logging configuration

pub mod auth;
pub mod cache;
pub mod environment;

use serde::{Deserialize, Serialize};

use std::path::Path;

use crate::errors::{ConfigError, ConfigResult};
use auth::MAX_TOKEN_EXPIRY_SECONDS;

pub use auth::JwtConfig;
pub use cache::TokenCacheConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete configuration consumed by the token subsystem
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,

    pub jwt: JwtConfig,

    #[serde(default)]
    pub cache: TokenCacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            jwt: JwtConfig::default(),
            cache: TokenCacheConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    ///
    /// The secret still has to come from the environment; see [`AppConfig::validate`].
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            jwt: JwtConfig::default(),
            cache: TokenCacheConfig::default().with_background_sweep(300),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let base = match environment {
            Environment::Production => Self::production(),
            _ => Self::development(),
        };

        Self {
            environment,
            jwt: JwtConfig::from_env(),
            cache: TokenCacheConfig {
                background_sweep: base.cache.background_sweep,
                ..TokenCacheConfig::from_env()
            },
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load dotenv files (environment specific first) and then read the environment
    pub fn load() -> Self {
        let environment = Environment::from_env();
        dotenvy::from_filename(environment.env_file()).ok();
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load a specific dotenv file and then read the environment.
    ///
    /// Variables already set in the process win over the file.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path).map_err(|e| ConfigError::InvalidValue {
            field: "dotenv".to_string(),
            message: format!("{}: {}", path.display(), e),
        })?;
        Ok(Self::from_env())
    }

    /// Reject configurations that must never reach a running process
    pub fn validate(&self) -> ConfigResult<()> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "jwt.secret".to_string(),
                message: "secret must not be empty".to_string(),
            });
        }
        if !(1..=MAX_TOKEN_EXPIRY_SECONDS).contains(&self.jwt.expiry_seconds) {
            return Err(ConfigError::InvalidValue {
                field: "jwt.expiry_seconds".to_string(),
                message: format!(
                    "expected 1..={} seconds, got {}",
                    MAX_TOKEN_EXPIRY_SECONDS, self.jwt.expiry_seconds
                ),
            });
        }
        if self.environment.is_production() && self.jwt.is_using_default_secret() {
            return Err(ConfigError::Insecure {
                message: "production is configured with the development JWT secret".to_string(),
            });
        }
        Ok(())
    }
}
