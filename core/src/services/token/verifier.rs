//! Token verification
//!
//! Every call runs the same pipeline: algorithm check, structure check,
//! signature check, expiry check. The first failing stage rejects the token; nothing is
//! retried and no claims are readable from a rejected token.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use jsonwebtoken::{decode, errors::ErrorKind};
use serde::Deserialize;

use crate::domain::entities::token::{Claims, SUBJECT_CLAIM, USER_ID_CLAIM};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::clock::Clock;
use super::service::TokenService;

/// Result of verifying a presented token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Signature verified and token not yet expired
    Valid(Claims),
    /// Signature verified but the token is past its expiry
    Expired,
    /// Signature does not match, or the token was signed with another algorithm
    BadSignature,
    /// Not a well-formed token, or required claims are missing
    Malformed,
}

impl VerificationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationOutcome::Valid(_))
    }

    /// Claims of an accepted token
    pub fn claims(&self) -> Option<&Claims> {
        match self {
            VerificationOutcome::Valid(claims) => Some(claims),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<Claims, TokenError> {
        match self {
            VerificationOutcome::Valid(claims) => Ok(claims),
            VerificationOutcome::Expired => Err(TokenError::TokenExpired),
            VerificationOutcome::BadSignature => Err(TokenError::InvalidSignature),
            VerificationOutcome::Malformed => Err(TokenError::InvalidTokenFormat),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationOutcome::Valid(_) => "valid",
            VerificationOutcome::Expired => "expired",
            VerificationOutcome::BadSignature => "bad_signature",
            VerificationOutcome::Malformed => "malformed",
        }
    }
}

impl<C: Clock> TokenService<C> {
    /// Verifies a token and reports why it was rejected, if it was
    pub fn verify(&self, token: &str) -> VerificationOutcome {
        // Decoding alone cannot tell `none` or unknown algorithms apart from
        // garbage, so the declared algorithm is read first.
        if let Some(alg) = declared_algorithm(token) {
            if alg != ACCEPTED_ALGORITHM {
                return rejected(VerificationOutcome::BadSignature, &format!("algorithm {alg}"));
            }
        }

        let token_data = match decode::<Claims>(
            token,
            self.key_provider().signing_key().decoding_key(),
            self.validation(),
        ) {
            Ok(token_data) => token_data,
            Err(e) => return rejected(rejection_for(e.kind()), &e.to_string()),
        };

        let claims = token_data.claims;
        if claims.is_expired_at(self.clock().now()) {
            return rejected(
                VerificationOutcome::Expired,
                &format!("expired at {}", claims.exp),
            );
        }

        VerificationOutcome::Valid(claims)
    }

    /// Whether the token may be trusted right now
    ///
    /// Malformed, tampered, and expired tokens all yield `false`.
    pub fn is_valid(&self, token: &str) -> bool {
        self.verify(token).is_valid()
    }

    /// Verifies a token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError::Token)` - Token is expired, tampered, or malformed
    pub fn decode_claims(&self, token: &str) -> DomainResult<Claims> {
        Ok(self.verify(token).into_result()?)
    }

    /// Verifies a token and returns the `userId` claim
    ///
    /// # Returns
    ///
    /// * `Ok(i64)` - The user id of a valid access token
    /// * `Err(DomainError::Token)` - Token failed verification
    /// * `Err(DomainError::ClaimMissing)` - Token verified but has no `userId`,
    ///   e.g. a refresh token
    pub fn extract_user_id(&self, token: &str) -> DomainResult<i64> {
        self.decode_claims(token)?
            .user_id
            .ok_or_else(|| DomainError::claim_missing(USER_ID_CLAIM))
    }

    /// Verifies a token and returns the subject (the user's email)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The subject of a valid access or refresh token
    /// * `Err(DomainError::Token)` - Token failed verification
    pub fn extract_email(&self, token: &str) -> DomainResult<String> {
        let claims = self.decode_claims(token)?;

        // Issuance always sets a subject; an empty one means the payload was
        // produced elsewhere with a valid key.
        if claims.sub.is_empty() {
            tracing::warn!(
                event = "token_subject_empty",
                "Verified token carries an empty subject"
            );
            return Err(DomainError::claim_missing(SUBJECT_CLAIM));
        }

        Ok(claims.sub)
    }
}

const ACCEPTED_ALGORITHM: &str = "HS256";

/// Header fields read ahead of full decoding
#[derive(Deserialize)]
struct DeclaredHeader {
    alg: String,
}

/// Algorithm named in the token header, if the header is readable at all
fn declared_algorithm(token: &str) -> Option<String> {
    let (header, _) = token.split_once('.')?;
    let bytes = URL_SAFE_NO_PAD.decode(header).ok()?;
    serde_json::from_slice::<DeclaredHeader>(&bytes)
        .ok()
        .map(|header| header.alg)
}

fn rejected(outcome: VerificationOutcome, reason: &str) -> VerificationOutcome {
    tracing::debug!(
        outcome = outcome.as_str(),
        reason,
        event = "token_rejected",
        "Token failed verification"
    );
    outcome
}

fn rejection_for(kind: &ErrorKind) -> VerificationOutcome {
    match kind {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
            VerificationOutcome::BadSignature
        }
        ErrorKind::ExpiredSignature => VerificationOutcome::Expired,
        _ => VerificationOutcome::Malformed,
    }
}
