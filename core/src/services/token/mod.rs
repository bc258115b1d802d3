//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - HS256 signing key derivation from the configured secret
//! - Access and refresh token issuance
//! - Token verification and claim extraction

mod clock;
mod issuer;
mod key_provider;
mod service;
mod traits;
mod verifier;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use key_provider::{KeyProvider, SigningKey, MIN_SECRET_BYTES};
pub use service::TokenService;
pub use traits::{TokenIssuer, TokenVerifier};
pub use verifier::VerificationOutcome;
