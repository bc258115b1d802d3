//! Domain entities representing core business objects.

pub mod token;

// Re-export commonly used types
pub use token::{
    Claims, TokenKind, TokenPair,
    ACCESS_TOKEN_EXPIRY_MS, REFRESH_TOKEN_EXPIRY_MS,
    NICKNAME_CLAIM, SUBJECT_CLAIM, USER_ID_CLAIM,
};
