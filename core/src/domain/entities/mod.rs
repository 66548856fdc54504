//! Domain entities representing core business objects.

pub mod token;


// Re-export commonly used types
pub use token::{
    Payload,
    CLAIM_EXP, CLAIM_IAT, CLAIM_JTI, CLAIM_TENANT_ID, CLAIM_USER_ID,
    TOKEN_EXPIRY_HOURS,
};
