//! HS256 signing key derivation from the configured secret

use base64::{engine::general_purpose::STANDARD, Engine};
use certif_shared::JwtConfig;
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::ConfigurationError;

/// Minimum key length accepted for HMAC-SHA-256 (256 bits)
pub const MIN_SECRET_BYTES: usize = 32;

/// Symmetric key used to sign and verify tokens
#[derive(Clone)]
pub struct SigningKey {
    /// Raw key length in bytes
    len: usize,
    /// Key for signing JWTs
    encoding_key: EncodingKey,
    /// Key for verifying JWTs
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("bits", &self.bits())
            .finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Builds an HMAC-SHA-256 key from raw bytes
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKey)` - Key of at least 256 bits
    /// * `Err(ConfigurationError::WeakSecret)` - Key shorter than 256 bits
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigurationError> {
        if bytes.len() < MIN_SECRET_BYTES {
            return Err(ConfigurationError::WeakSecret {
                bits: bytes.len() * 8,
            });
        }

        Ok(Self {
            len: bytes.len(),
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
        })
    }

    /// Key size in bits
    pub fn bits(&self) -> usize {
        self.len * 8
    }

    /// Returns the encoding key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying JWTs
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

/// Derives the signing key once from the configured secret and holds it
///
/// The key is immutable after construction, so a provider can be shared
/// freely between threads.
#[derive(Clone, Debug)]
pub struct KeyProvider {
    signing_key: SigningKey,
}

impl KeyProvider {
    /// Creates a key provider from the JWT configuration
    pub fn from_config(config: &JwtConfig) -> Result<Self, ConfigurationError> {
        Self::from_base64(&config.secret)
    }

    /// Creates a key provider from a standard-base64 secret
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Returns
    ///
    /// * `Ok(KeyProvider)` - Key derived successfully
    /// * `Err(ConfigurationError::MissingSecret)` - Secret empty or blank
    /// * `Err(ConfigurationError::InvalidSecretEncoding)` - Secret is not base64
    /// * `Err(ConfigurationError::WeakSecret)` - Decoded secret under 256 bits
    pub fn from_base64(secret: &str) -> Result<Self, ConfigurationError> {
        let result = Self::derive(secret);

        match &result {
            Ok(provider) => tracing::info!(
                key_bits = provider.signing_key.bits(),
                event = "signing_key_loaded",
                "Derived HS256 signing key"
            ),
            Err(e) => tracing::error!(
                error = %e,
                event = "signing_key_rejected",
                "Signing key configuration is invalid"
            ),
        }

        result
    }

    fn derive(secret: &str) -> Result<Self, ConfigurationError> {
        let secret = secret.trim();
        if secret.is_empty() {
            return Err(ConfigurationError::MissingSecret);
        }

        let key_bytes = STANDARD
            .decode(secret)
            .map_err(|e| ConfigurationError::InvalidSecretEncoding {
                message: e.to_string(),
            })?;

        Ok(Self {
            signing_key: SigningKey::from_bytes(&key_bytes)?,
        })
    }

    /// Returns the derived signing key
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}
