//! Token service module
//!
//! This module handles all token-related operations:
//! - Signing payloads into tokens and verifying them (`TokenCodec`)
//! - Caching decoded payloads keyed by token string (`TokenCacheService`)
//! - Lazy, reactive and optional background eviction of expired entries

mod cleanup;
mod clock;
mod codec;
mod config;
mod service;
mod stats;

#[cfg(test)]
mod tests;

pub use cleanup::{SweepResult, TokenCacheSweeper, TokenCacheSweeperConfig};
pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use service::TokenCacheService;
pub use stats::CacheStats;
