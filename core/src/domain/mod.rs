//! Domain layer containing the token entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::{
    Claims, TokenKind, TokenPair,
    ACCESS_TOKEN_EXPIRY_MS, REFRESH_TOKEN_EXPIRY_MS,
    NICKNAME_CLAIM, SUBJECT_CLAIM, USER_ID_CLAIM,
};
