//! Seams for collaborators that mint or check tokens
//!
//! A login handler depends on [`TokenIssuer`], a request-authorization filter
//! on [`TokenVerifier`], and a refresh endpoint on both.

use crate::errors::DomainResult;

use super::clock::Clock;
use super::service::TokenService;
use super::verifier::VerificationOutcome;

/// Trait for issuing signed tokens
pub trait TokenIssuer: Send + Sync {
    /// Issue a one-hour access token carrying the full identity claims
    fn issue_access_token(&self, user_id: i64, email: &str, nickname: &str)
        -> DomainResult<String>;
    /// Issue a seven-day refresh token carrying only the subject
    fn issue_refresh_token(&self, email: &str) -> DomainResult<String>;
}

/// Trait for verifying presented tokens
pub trait TokenVerifier: Send + Sync {
    /// Verify a token and report the outcome
    fn verify(&self, token: &str) -> VerificationOutcome;
    /// Verify a token and return its `userId` claim
    fn extract_user_id(&self, token: &str) -> DomainResult<i64>;
    /// Verify a token and return its subject
    fn extract_email(&self, token: &str) -> DomainResult<String>;

    /// Whether the token may be trusted right now
    fn is_valid(&self, token: &str) -> bool {
        self.verify(token).is_valid()
    }
}

impl<C: Clock> TokenIssuer for TokenService<C> {
    fn issue_access_token(
        &self,
        user_id: i64,
        email: &str,
        nickname: &str,
    ) -> DomainResult<String> {
        TokenService::issue_access_token(self, user_id, email, nickname)
    }

    fn issue_refresh_token(&self, email: &str) -> DomainResult<String> {
        TokenService::issue_refresh_token(self, email)
    }
}

impl<C: Clock> TokenVerifier for TokenService<C> {
    fn verify(&self, token: &str) -> VerificationOutcome {
        TokenService::verify(self, token)
    }

    fn extract_user_id(&self, token: &str) -> DomainResult<i64> {
        TokenService::extract_user_id(self, token)
    }

    fn extract_email(&self, token: &str) -> DomainResult<String> {
        TokenService::extract_email(self, token)
    }
}
