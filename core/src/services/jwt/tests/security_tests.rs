//! Attack-shaped tests: tampering, algorithm confusion, claim injection

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Map, Value};

use sigil_shared::config::JwtConfig;

use crate::domain::entities::user::AuthUser;
use crate::errors::{DomainError, TokenError};
use crate::services::jwt::JwtManager;

use super::{test_manager, TEST_SECRET};

fn test_user() -> AuthUser {
    AuthUser::new("user-42", "user@example.com")
}

/// Signs arbitrary claims with HS256 the same way the manager does
fn sign_claims(claims: &Value, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// Assembles a token from raw header/payload JSON and an arbitrary signature
fn forge_token(header: &Value, payload: &Value, signature: &str) -> String {
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(header.to_string()),
        URL_SAFE_NO_PAD.encode(payload.to_string()),
        signature
    )
}

fn base_payload() -> Value {
    let now = Utc::now().timestamp();
    json!({
        "sub": "user-42",
        "email": "user@example.com",
        "type": "access",
        "iat": now,
        "exp": now + 900,
        "jti": "0123456789abcdef0123456789abcdef",
    })
}

fn unwrap_token_error(result: Result<impl std::fmt::Debug, DomainError>) -> TokenError {
    match result {
        Err(DomainError::Token(err)) => err,
        other => panic!("expected a token error, got {other:?}"),
    }
}

#[test]
fn test_rejects_wrong_segment_counts() {
    let manager = test_manager();
    for bad in ["", "a", "a.b", "a.b.c.d", "..", ".b.c", "a..c"] {
        let err = unwrap_token_error(manager.verify_token(bad));
        assert_eq!(err, TokenError::InvalidFormat, "input {bad:?}");
    }
}

#[test]
fn test_rejects_undecodable_header() {
    let manager = test_manager();
    let err = unwrap_token_error(manager.verify_token("!!!.payload.sig"));
    assert_eq!(err, TokenError::InvalidFormat);
}

#[test]
fn test_rejects_wrong_header_typ() {
    let manager = test_manager();
    let token = forge_token(&json!({"alg": "HS256", "typ": "NOT-JWT"}), &base_payload(), "sig");
    assert_eq!(
        unwrap_token_error(manager.verify_token(&token)),
        TokenError::InvalidType
    );

    let token = forge_token(&json!({"alg": "HS256"}), &base_payload(), "sig");
    assert_eq!(
        unwrap_token_error(manager.verify_token(&token)),
        TokenError::InvalidType
    );
}

#[test]
fn test_rejects_none_algorithm_with_empty_signature() {
    let manager = test_manager();
    let token = forge_token(&json!({"alg": "none", "typ": "JWT"}), &base_payload(), "");

    let err = unwrap_token_error(manager.verify_token(&token));
    assert_eq!(
        err,
        TokenError::InvalidAlgorithm {
            alg: "none".to_string()
        }
    );
    assert_eq!(err.to_string(), "Invalid algorithm: none");
}

#[test]
fn test_rejects_foreign_algorithms_before_signature_check() {
    let manager = test_manager();
    for alg in ["RS256", "ES256", "HS384"] {
        let token = forge_token(
            &json!({"alg": alg, "typ": "JWT"}),
            &base_payload(),
            "completely-bogus-signature",
        );
        assert_eq!(
            unwrap_token_error(manager.verify_token(&token)),
            TokenError::InvalidAlgorithm {
                alg: alg.to_string()
            }
        );
    }
}

#[test]
fn test_rejects_tampered_signature() {
    let manager = test_manager();
    let pair = manager.create_token_pair(&test_user(), None).unwrap();

    let tampered = super::tamper_signature(&pair.access_token);

    assert_eq!(
        unwrap_token_error(manager.verify_token(&tampered)),
        TokenError::InvalidSignature
    );
}

#[test]
fn test_rejects_tampered_payload() {
    let manager = test_manager();
    let pair = manager.create_token_pair(&test_user(), None).unwrap();

    let mut payload = base_payload();
    payload["sub"] = json!("someone-else");
    let segments: Vec<&str> = pair.access_token.split('.').collect();
    let tampered = format!(
        "{}.{}.{}",
        segments[0],
        URL_SAFE_NO_PAD.encode(payload.to_string()),
        segments[2]
    );

    assert_eq!(
        unwrap_token_error(manager.verify_token(&tampered)),
        TokenError::InvalidSignature
    );
}

#[test]
fn test_rejects_token_signed_with_different_secret() {
    let manager = test_manager();
    let other_secret = "Wq7pL2nRf8sThx4eVz0yKgJmD6cA1uBvN3oE9iMr5wPjXdYbGtZaQkHlC-fSUv2T";
    let token = sign_claims(&base_payload(), other_secret);

    assert_eq!(
        unwrap_token_error(manager.verify_token(&token)),
        TokenError::InvalidSignature
    );
}

#[test]
fn test_rejects_expired_token() {
    let manager = test_manager();
    let now = Utc::now().timestamp();
    let mut payload = base_payload();
    payload["iat"] = json!(now - 1000);
    payload["exp"] = json!(now - 10);
    let token = sign_claims(&payload, TEST_SECRET);

    assert_eq!(
        unwrap_token_error(manager.verify_token(&token)),
        TokenError::Expired
    );
    // expiry is exclusive: a token whose exp equals now is already dead
    payload["exp"] = json!(Utc::now().timestamp());
    let token = sign_claims(&payload, TEST_SECRET);
    assert_eq!(
        unwrap_token_error(manager.verify_token(&token)),
        TokenError::Expired
    );
}

#[test]
fn test_rejects_future_not_before() {
    let manager = test_manager();
    let now = Utc::now().timestamp();
    let mut payload = base_payload();
    payload["nbf"] = json!(now + 300);
    let token = sign_claims(&payload, TEST_SECRET);

    assert_eq!(
        unwrap_token_error(manager.verify_token(&token)),
        TokenError::NotYetValid
    );
}

#[test]
fn test_accepts_past_not_before() {
    let manager = test_manager();
    let now = Utc::now().timestamp();
    let mut payload = base_payload();
    payload["nbf"] = json!(now - 60);
    let token = sign_claims(&payload, TEST_SECRET);

    assert!(manager.verify_token(&token).is_ok());
}

#[test]
fn test_reserved_claim_injection_fails_per_key() {
    let manager = test_manager();
    for key in ["sub", "email", "type", "iat", "exp", "jti", "iss", "aud", "nbf"] {
        let mut extra = Map::new();
        extra.insert(key.to_string(), json!("injected"));

        let err = unwrap_token_error(manager.create_token_pair(&test_user(), Some(&extra)));
        assert_eq!(
            err,
            TokenError::ReservedClaim {
                claim: key.to_string()
            },
            "expected rejection for claim {key:?}"
        );
    }
}

#[test]
fn test_cross_issuer_verification_fails() {
    let issuer_a = JwtManager::new(JwtConfig::new(TEST_SECRET).with_issuer("service-a")).unwrap();
    let issuer_b = JwtManager::new(JwtConfig::new(TEST_SECRET).with_issuer("service-b")).unwrap();

    let pair = issuer_a.create_token_pair(&test_user(), None).unwrap();
    assert!(issuer_a.verify_token(&pair.access_token).is_ok());
    assert_eq!(
        unwrap_token_error(issuer_b.verify_token(&pair.access_token)),
        TokenError::InvalidIssuer
    );
}

#[test]
fn test_cross_audience_verification_fails() {
    let aud_a = JwtManager::new(JwtConfig::new(TEST_SECRET).with_audience("app-a")).unwrap();
    let aud_b = JwtManager::new(JwtConfig::new(TEST_SECRET).with_audience("app-b")).unwrap();

    let pair = aud_a.create_token_pair(&test_user(), None).unwrap();
    assert_eq!(
        unwrap_token_error(aud_b.verify_token(&pair.access_token)),
        TokenError::InvalidAudience
    );
}

#[test]
fn test_missing_claims_are_rejected_as_expected_by_a_checking_manager() {
    // token minted without iss/aud fails against a manager that requires them
    let plain = test_manager();
    let checking =
        JwtManager::new(JwtConfig::new(TEST_SECRET).with_issuer("sigil")).unwrap();

    let pair = plain.create_token_pair(&test_user(), None).unwrap();
    assert_eq!(
        unwrap_token_error(checking.verify_token(&pair.access_token)),
        TokenError::InvalidIssuer
    );
}
