//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Access token lifetime (1 hour)
pub const ACCESS_TOKEN_EXPIRY_MS: i64 = 1000 * 60 * 60;

/// Refresh token lifetime (7 days)
pub const REFRESH_TOKEN_EXPIRY_MS: i64 = 1000 * 60 * 60 * 24 * 7;

/// Wire name of the subject claim (the user's email)
pub const SUBJECT_CLAIM: &str = "sub";

/// Wire name of the numeric user id claim
pub const USER_ID_CLAIM: &str = "userId";

/// Wire name of the display name claim
pub const NICKNAME_CLAIM: &str = "nickname";

/// Token class, which fixes the lifetime and the claims carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Short-lived token carrying full identity claims
    Access,
    /// Long-lived token carrying only the subject
    Refresh,
}

impl TokenKind {
    /// Lifetime of tokens of this kind
    pub fn lifetime(&self) -> Duration {
        Duration::milliseconds(self.lifetime_ms())
    }

    /// Lifetime of tokens of this kind in milliseconds
    pub fn lifetime_ms(&self) -> i64 {
        match self {
            TokenKind::Access => ACCESS_TOKEN_EXPIRY_MS,
            TokenKind::Refresh => REFRESH_TOKEN_EXPIRY_MS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims structure for JWT payload
///
/// Timestamps are seconds since the Unix epoch. `userId` and `nickname` are
/// only present on access tokens and are left out of the payload otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,

    /// Numeric user identifier
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's numeric id
    /// * `email` - The user's email, stored as the subject
    /// * `nickname` - The user's display name
    /// * `issued_at` - Issuance instant; expiry is one access lifetime later
    pub fn new_access_token(
        user_id: i64,
        email: &str,
        nickname: &str,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: Some(user_id),
            nickname: Some(nickname.to_string()),
            ..Self::for_subject(email, TokenKind::Access, issued_at)
        }
    }

    /// Creates new claims for a refresh token
    ///
    /// Only the subject is carried, to limit exposure if the token leaks.
    pub fn new_refresh_token(email: &str, issued_at: DateTime<Utc>) -> Self {
        Self::for_subject(email, TokenKind::Refresh, issued_at)
    }

    fn for_subject(email: &str, kind: TokenKind, issued_at: DateTime<Utc>) -> Self {
        let expiry = issued_at + kind.lifetime();

        Self {
            sub: email.to_string(),
            user_id: None,
            nickname: None,
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Token class inferred from the claims carried
    pub fn kind(&self) -> TokenKind {
        if self.user_id.is_some() {
            TokenKind::Access
        } else {
            TokenKind::Refresh
        }
    }

    /// Checks if the claims have expired at `now`
    ///
    /// A token is still valid during the second named by `exp`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

/// Token pair returned to the client after login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with the fixed policy expiry times
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in: TokenKind::Access.lifetime().num_seconds(),
            refresh_expires_in: TokenKind::Refresh.lifetime().num_seconds(),
        }
    }
}
