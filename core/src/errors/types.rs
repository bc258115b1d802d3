//! Error types for signing-key configuration and token handling
//!
//! Configuration errors are fatal: no token can be issued or verified without
//! a key. Token errors describe a presented token that is not currently valid
//! and are routine at the caller's boundary.

use thiserror::Error;

/// Signing key configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("JWT_SECRET is missing. Set it via environment variable")]
    MissingSecret,

    #[error("JWT_SECRET is not valid base64: {message}")]
    InvalidSecretEncoding { message: String },

    #[error("JWT_SECRET is too weak: {bits} bits, HS256 requires at least 256 bits")]
    WeakSecret { bits: usize },
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
