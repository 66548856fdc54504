//! Business services containing domain logic and use cases.

pub mod token;

// Re-export commonly used types
pub use token::{
    CacheStats, Clock, ManualClock, SweepResult, SystemClock, TokenCacheService,
    TokenCacheSweeper, TokenCacheSweeperConfig, TokenCodec, TokenServiceConfig,
};
