//! Unit tests for signing key derivation

use base64::{engine::general_purpose::STANDARD, Engine};
use certif_shared::JwtConfig;

use super::{config_of, secret_of};
use crate::errors::ConfigurationError;
use crate::services::token::{KeyProvider, SigningKey, SystemClock, TokenService};

#[test]
fn test_derives_256_bit_key() {
    let provider = KeyProvider::from_base64(&secret_of(0)).unwrap();
    assert_eq!(provider.signing_key().bits(), 256);
}

#[test]
fn test_accepts_longer_keys() {
    let secret = STANDARD.encode([9u8; 64]);
    let provider = KeyProvider::from_base64(&secret).unwrap();
    assert_eq!(provider.signing_key().bits(), 512);
}

#[test]
fn test_ignores_surrounding_whitespace() {
    let secret = format!("  {}\n", secret_of(1));
    assert!(KeyProvider::from_base64(&secret).is_ok());
}

#[test]
fn test_missing_secret() {
    for secret in ["", " ", "\t\n  "] {
        assert_eq!(
            KeyProvider::from_base64(secret).unwrap_err(),
            ConfigurationError::MissingSecret
        );
    }
    assert_eq!(
        KeyProvider::from_config(&JwtConfig::default()).unwrap_err(),
        ConfigurationError::MissingSecret
    );
}

#[test]
fn test_invalid_base64_secret() {
    let error = KeyProvider::from_base64("not base64 at all!").unwrap_err();
    assert!(matches!(error, ConfigurationError::InvalidSecretEncoding { .. }));
}

#[test]
fn test_weak_secret() {
    let secret = STANDARD.encode([5u8; 16]);
    assert_eq!(
        KeyProvider::from_base64(&secret).unwrap_err(),
        ConfigurationError::WeakSecret { bits: 128 }
    );

    let secret = STANDARD.encode([5u8; 31]);
    assert_eq!(
        KeyProvider::from_base64(&secret).unwrap_err(),
        ConfigurationError::WeakSecret { bits: 248 }
    );
}

#[test]
fn test_signing_key_from_bytes() {
    assert!(SigningKey::from_bytes(&[0u8; 32]).is_ok());
    assert_eq!(
        SigningKey::from_bytes(&[]).unwrap_err(),
        ConfigurationError::WeakSecret { bits: 0 }
    );
}

#[test]
fn test_debug_hides_key_material() {
    let provider = KeyProvider::from_config(&config_of(0xAB)).unwrap();
    let rendered = format!("{:?}", provider);

    assert!(rendered.contains("bits: 256"));
    assert!(!rendered.contains(&secret_of(0xAB)));
    assert!(!rendered.contains("171"));
}

#[test]
fn test_service_construction_fails_without_secret() {
    for config in [JwtConfig::default(), JwtConfig::new("   ")] {
        assert_eq!(
            TokenService::new(&config).unwrap_err(),
            ConfigurationError::MissingSecret
        );
        assert_eq!(
            TokenService::with_clock(&config, SystemClock).unwrap_err(),
            ConfigurationError::MissingSecret
        );
    }
}
