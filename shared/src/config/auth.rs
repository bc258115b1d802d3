//! Authentication configuration

use serde::Deserialize;

/// Environment variable holding the base64-encoded signing secret
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// JWT signing configuration
///
/// The secret is the standard-base64 encoding of at least 32 raw bytes.
/// An empty value is allowed here; the token service rejects it when it
/// derives the signing key.
#[derive(Clone, Default, Deserialize)]
pub struct JwtConfig {
    /// Base64-encoded HMAC-SHA-256 secret
    #[serde(default)]
    pub secret: String,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Create from the `JWT_SECRET` environment variable
    ///
    /// A missing variable yields an empty secret.
    pub fn from_env() -> Self {
        Self::new(std::env::var(JWT_SECRET_ENV).unwrap_or_default())
    }

    /// Whether a non-blank secret is configured
    pub fn has_secret(&self) -> bool {
        !self.secret.trim().is_empty()
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secret = if self.has_secret() { "[redacted]" } else { "[unset]" };
        f.debug_struct("JwtConfig").field("secret", &secret).finish()
    }
}
