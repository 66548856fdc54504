//! Periodic sweeping of the token cache
//!
//! The cache already evicts lazily and on failed decodes; this task adds a
//! fixed-cadence sweep for processes that see long quiet periods.

use std::sync::Arc;
use std::time::Duration;

use tg_shared::TokenCacheConfig;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::service::TokenCacheService;

/// Configuration for the background sweeper
#[derive(Debug, Clone)]
pub struct TokenCacheSweeperConfig {
    /// How often to sweep
    pub interval: Duration,
    /// Whether to run the background task at all
    pub enabled: bool,
}

impl Default for TokenCacheSweeperConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(300),
            enabled: false,
        }
    }
}

impl From<&TokenCacheConfig> for TokenCacheSweeperConfig {
    fn from(config: &TokenCacheConfig) -> Self {
        Self {
            interval: Duration::from_secs(config.background_interval_seconds.max(1)),
            enabled: config.enabled && config.background_sweep,
        }
    }
}

/// Sweeps expired entries out of a shared [`TokenCacheService`]
pub struct TokenCacheSweeper {
    service: Arc<TokenCacheService>,
    config: TokenCacheSweeperConfig,
}

impl TokenCacheSweeper {
    pub fn new(service: Arc<TokenCacheService>, config: TokenCacheSweeperConfig) -> Self {
        Self { service, config }
    }

    /// Run a single sweep
    pub fn run_once(&self) -> SweepResult {
        let removed = self.service.sweep();
        let result = SweepResult {
            removed,
            remaining: self.service.len(),
        };

        debug!(
            removed = result.removed,
            remaining = result.remaining,
            "Background token cache sweep completed"
        );
        result
    }

    /// Start the sweeper as a background task.
    ///
    /// Must be called from within a Tokio runtime. Returns `None` when the
    /// sweeper is disabled. The task runs until the handle is aborted or the
    /// runtime shuts down.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("Token cache sweeper is disabled");
            return None;
        }

        let handle = tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval.as_secs(),
                "Token cache sweeper started"
            );

            let mut interval_timer = tokio::time::interval(self.config.interval);

            loop {
                interval_timer.tick().await;
                self.run_once();
            }
        });

        Some(handle)
    }
}

/// Result of a sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepResult {
    /// Expired entries removed
    pub removed: usize,
    /// Entries left in the cache afterwards
    pub remaining: usize,
}
