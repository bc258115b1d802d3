//! # Certif Core
//!
//! Token lifecycle for the Certif backend: derivation of the HS256 signing
//! key from the configured secret, issuance of access and refresh tokens,
//! and verification of presented tokens.
//!
//! HTTP handlers, persistence, and configuration loading live outside this
//! crate and call in with plain values.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
