//! # TokenGate Core
//!
//! Signed, time-bounded authentication tokens for a multi-tenant service.
//! This crate contains the token payload entity, the token codec, the
//! concurrent token cache service, and the error types they share.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
