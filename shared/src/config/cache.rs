//! Token cache configuration

use serde::{Deserialize, Serialize};

/// In-memory token cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenCacheConfig {
    /// Enable caching. When disabled every decode verifies the signature.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Minimum seconds between lazy sweeps triggered by insertions
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,

    /// Run an additional periodic sweep on a background task
    #[serde(default)]
    pub background_sweep: bool,

    /// Background sweep period in seconds
    #[serde(default = "default_background_interval")]
    pub background_interval_seconds: u64,
}

impl Default for TokenCacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            sweep_interval_seconds: default_sweep_interval(),
            background_sweep: false,
            background_interval_seconds: default_background_interval(),
        }
    }
}

impl TokenCacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let enabled = std::env::var("TOKEN_CACHE_ENABLED")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_enabled);
        let sweep_interval_seconds = std::env::var("TOKEN_CACHE_SWEEP_INTERVAL")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_sweep_interval);

        Self {
            enabled,
            sweep_interval_seconds,
            ..Default::default()
        }
    }

    /// Configuration with the cache switched off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Turn on the background sweeper with the given period
    pub fn with_background_sweep(mut self, interval_seconds: u64) -> Self {
        self.background_sweep = true;
        self.background_interval_seconds = interval_seconds;
        self
    }
}

fn default_enabled() -> bool {
    true
}

fn default_sweep_interval() -> u64 {
    3600  // 1 hour
}

fn default_background_interval() -> u64 {
    300  // 5 minutes
}
