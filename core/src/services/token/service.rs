//! Main token service implementation

use certif_shared::JwtConfig;
use jsonwebtoken::{encode, Algorithm, Header, Validation};

use crate::domain::entities::token::{Claims, SUBJECT_CLAIM};
use crate::errors::{ConfigurationError, DomainResult, TokenError};

use super::clock::{Clock, SystemClock};
use super::key_provider::KeyProvider;

/// Service issuing and verifying HS256 tokens
///
/// Issuance lives in `issuer.rs`, verification in `verifier.rs`. A service can
/// only be built from a valid signing key, so every operation on it runs
/// with a usable key.
#[derive(Debug)]
pub struct TokenService<C: Clock = SystemClock> {
    keys: KeyProvider,
    header: Header,
    validation: Validation,
    clock: C,
}

impl TokenService<SystemClock> {
    /// Creates a new token service reading the wall clock
    ///
    /// # Arguments
    ///
    /// * `config` - JWT configuration holding the base64 secret
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance or the reason the secret was rejected
    pub fn new(config: &JwtConfig) -> Result<Self, ConfigurationError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> TokenService<C> {
    /// Creates a new token service with an explicit clock
    pub fn with_clock(config: &JwtConfig, clock: C) -> Result<Self, ConfigurationError> {
        Ok(Self::from_key_provider(KeyProvider::from_config(config)?, clock))
    }

    /// Creates a new token service around an already derived key
    pub fn from_key_provider(keys: KeyProvider, clock: C) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the service clock with zero leeway.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", SUBJECT_CLAIM]);

        Self {
            keys,
            header: Header::new(Algorithm::HS256),
            validation,
            clock,
        }
    }

    /// Returns the key provider backing this service
    pub fn key_provider(&self) -> &KeyProvider {
        &self.keys
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub(crate) fn validation(&self) -> &Validation {
        &self.validation
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        encode(&self.header, claims, self.keys.signing_key().encoding_key()).map_err(|e| {
            tracing::error!(
                error = %e,
                event = "token_encoding_failed",
                "Failed to sign token claims"
            );
            TokenError::TokenGenerationFailed.into()
        })
    }
}
