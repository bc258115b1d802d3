//! Integration tests for the token lifecycle through the public API

use std::sync::Arc;
use std::thread;

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{json, Value};

use certif_core::{
    ConfigurationError, DomainError, TokenIssuer, TokenService, TokenVerifier,
    VerificationOutcome,
};
use certif_shared::JwtConfig;

fn zero_key_config() -> JwtConfig {
    JwtConfig::new(STANDARD.encode([0u8; 32]))
}

#[test]
fn test_zero_key_example() {
    let service = TokenService::new(&zero_key_config()).unwrap();

    let token = service.issue_access_token(42, "a@b.com", "Ann").unwrap();

    assert!(service.is_valid(&token));
    assert_eq!(service.extract_user_id(&token).unwrap(), 42);
    assert_eq!(service.extract_email(&token).unwrap(), "a@b.com");
}

#[test]
fn test_login_then_refresh_flow() {
    let service = TokenService::new(&zero_key_config()).unwrap();

    // Login: mint both tokens.
    let pair = service.issue_token_pair(42, "a@b.com", "Ann").unwrap();

    // Refresh endpoint: verify the refresh token, recover the subject, and
    // mint a new access token after looking the user up by email.
    let email = service.extract_email(&pair.refresh_token).unwrap();
    assert!(matches!(
        service.extract_user_id(&pair.refresh_token),
        Err(DomainError::ClaimMissing { .. })
    ));
    let access_token = service.issue_access_token(42, &email, "Ann").unwrap();

    assert_eq!(service.extract_user_id(&access_token).unwrap(), 42);
}

#[test]
fn test_configuration_failure_blocks_both_entry_points() {
    for secret in ["", "   "] {
        let config = JwtConfig::new(secret);
        let error = TokenService::new(&config).unwrap_err();
        assert_eq!(error, ConfigurationError::MissingSecret);

        let error: DomainError = error.into();
        assert!(error.is_fatal());
    }
}

#[test]
fn test_tokens_decode_with_plain_jsonwebtoken() {
    let service = TokenService::new(&zero_key_config()).unwrap();
    let token = service.issue_access_token(42, "a@b.com", "Ann").unwrap();

    let data = decode::<Value>(
        &token,
        &DecodingKey::from_secret(&[0u8; 32]),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap();

    assert_eq!(data.header.alg, Algorithm::HS256);
    assert_eq!(data.header.typ.as_deref(), Some("JWT"));
    assert_eq!(data.claims["sub"], "a@b.com");
    assert_eq!(data.claims["userId"], 42);
    assert_eq!(data.claims["nickname"], "Ann");

    let iat = data.claims["iat"].as_i64().unwrap();
    let exp = data.claims["exp"].as_i64().unwrap();
    assert_eq!(exp - iat, 3600);
}

#[test]
fn test_externally_issued_tokens_verify() {
    let service = TokenService::new(&zero_key_config()).unwrap();
    let now = Utc::now().timestamp();

    let token = encode(
        &Header::default(),
        &json!({ "sub": "x@y.z", "userId": 7, "nickname": "Zed", "iat": now, "exp": now + 60 }),
        &EncodingKey::from_secret(&[0u8; 32]),
    )
    .unwrap();

    let claims = service.decode_claims(&token).unwrap();
    assert_eq!(claims.user_id, Some(7));
    assert_eq!(claims.nickname.as_deref(), Some("Zed"));
    assert_eq!(service.extract_email(&token).unwrap(), "x@y.z");

    let expired = encode(
        &Header::default(),
        &json!({ "sub": "x@y.z", "iat": now - 120, "exp": now - 60 }),
        &EncodingKey::from_secret(&[0u8; 32]),
    )
    .unwrap();
    assert_eq!(service.verify(&expired), VerificationOutcome::Expired);
}

#[test]
fn test_concurrent_issue_and_verify() {
    let service = Arc::new(TokenService::new(&zero_key_config()).unwrap());

    let handles: Vec<_> = (0..8i64)
        .map(|user_id| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let email = format!("user{}@b.com", user_id);
                for _ in 0..25 {
                    let token = service.issue_access_token(user_id, &email, "Ann").unwrap();
                    assert_eq!(service.extract_user_id(&token).unwrap(), user_id);
                    assert_eq!(service.extract_email(&token).unwrap(), email);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_collaborators_share_one_service_through_traits() {
    let service = Arc::new(TokenService::new(&zero_key_config()).unwrap());
    let issuer: Arc<dyn TokenIssuer> = service.clone();
    let verifier: Arc<dyn TokenVerifier> = service;

    let token = issuer.issue_access_token(42, "a@b.com", "Ann").unwrap();

    assert!(verifier.is_valid(&token));
    assert_eq!(verifier.extract_user_id(&token).unwrap(), 42);
}
