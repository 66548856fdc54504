//! Value objects representing immutable domain concepts.

pub mod issued_token;
pub mod token_status;

// Re-export commonly used types
pub use issued_token::IssuedToken;
pub use token_status::TokenStatus;
