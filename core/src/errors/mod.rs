//! Domain-specific error types and error handling.

mod types;

pub use types::{ConfigurationError, TokenError};

use certif_shared::error_codes;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Token(#[from] TokenError),

    /// The token verified but does not carry a claim the caller asked for,
    /// e.g. reading `userId` from a refresh token.
    #[error("Missing required claim: {claim}")]
    ClaimMissing { claim: String },
}

impl DomainError {
    pub(crate) fn claim_missing(claim: &str) -> Self {
        DomainError::ClaimMissing {
            claim: claim.to_string(),
        }
    }

    /// Stable code for programmatic handling by callers
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Configuration(_) => error_codes::CONFIGURATION_ERROR,
            DomainError::Token(TokenError::TokenExpired) => error_codes::TOKEN_EXPIRED,
            DomainError::Token(TokenError::InvalidSignature) => {
                error_codes::TOKEN_SIGNATURE_INVALID
            }
            DomainError::Token(TokenError::InvalidTokenFormat) => error_codes::TOKEN_INVALID,
            DomainError::Token(TokenError::TokenGenerationFailed) => {
                error_codes::TOKEN_GENERATION_FAILED
            }
            DomainError::ClaimMissing { .. } => error_codes::CLAIM_MISSING,
        }
    }

    /// Whether the error means the service itself is misconfigured
    pub fn is_fatal(&self) -> bool {
        matches!(self, DomainError::Configuration(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
