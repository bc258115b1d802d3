//! Token issuance

use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::DomainResult;

use super::clock::Clock;
use super::service::TokenService;

impl<C: Clock> TokenService<C> {
    /// Issues an access token
    ///
    /// The caller must have authenticated the user already; this only encodes
    /// and signs.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's numeric id
    /// * `email` - The user's email, used as the subject
    /// * `nickname` - The user's display name
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Signed token valid for one hour
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue_access_token(
        &self,
        user_id: i64,
        email: &str,
        nickname: &str,
    ) -> DomainResult<String> {
        let claims = Claims::new_access_token(user_id, email, nickname, self.clock().now());
        self.sign(&claims)
    }

    /// Issues a refresh token carrying only the subject
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Signed token valid for seven days
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue_refresh_token(&self, email: &str) -> DomainResult<String> {
        let claims = Claims::new_refresh_token(email, self.clock().now());
        self.sign(&claims)
    }

    /// Issues an access and a refresh token from the same instant
    pub fn issue_token_pair(
        &self,
        user_id: i64,
        email: &str,
        nickname: &str,
    ) -> DomainResult<TokenPair> {
        let now = self.clock().now();

        let access_token = self.sign(&Claims::new_access_token(user_id, email, nickname, now))?;
        let refresh_token = self.sign(&Claims::new_refresh_token(email, now))?;

        Ok(TokenPair::new(access_token, refresh_token))
    }

    fn sign(&self, claims: &Claims) -> DomainResult<String> {
        let token = self.encode_jwt(claims)?;

        tracing::debug!(
            kind = %claims.kind(),
            subject = %claims.sub,
            expires_at = claims.exp,
            event = "token_issued",
            "Issued token"
        );

        Ok(token)
    }
}
