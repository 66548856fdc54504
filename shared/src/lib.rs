//! Shared configuration and bootstrap utilities for TokenGate
//!
//! This crate provides functionality used by any process embedding the
//! token subsystem:
//! - Configuration types (JWT signing, token cache, environment)
//! - Configuration error types
//! - Logging bootstrap on top of `tracing-subscriber`

pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, JwtConfig, LogFormat, LoggingConfig, TokenCacheConfig,
};
pub use errors::{ConfigError, ConfigResult};
