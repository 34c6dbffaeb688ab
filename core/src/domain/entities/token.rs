//! Token entities for JWT-based authentication.

use chrono::Utc;
use once_cell::sync::Lazy;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

use super::user::AuthUser;

/// Token type constant returned with every pair (RFC 6750 bearer scheme)
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Claim names managed by the core
///
/// Caller-supplied additional claims may never redefine any of these;
/// `JwtManager::create_token_pair` rejects the attempt before signing.
pub static RESERVED_CLAIMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["sub", "email", "type", "iat", "exp", "jti", "iss", "aud", "nbf"]
        .into_iter()
        .collect()
});

/// Distinguishes the two halves of a token pair via the `type` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// User email at issuance time
    pub email: String,

    /// Whether this is an access or refresh token
    #[serde(rename = "type")]
    pub token_type: TokenKind,

    /// Issued at timestamp (seconds)
    pub iat: i64,

    /// Expiration timestamp (seconds)
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Issuer, present when the manager is configured with one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Audience, present when the manager is configured with one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,

    /// Not-before timestamp (seconds); not set on issued tokens but
    /// honored during verification when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// Caller-supplied additional claims, flattened into the payload
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Creates claims for a new token
    ///
    /// # Arguments
    ///
    /// * `kind` - Access or refresh
    /// * `user` - Identity snapshot for `sub`/`email`
    /// * `expires_in` - Lifetime in seconds from now
    /// * `issuer` / `audience` - Included when the manager is configured with them
    /// * `extra` - Additional claims, already checked against [`RESERVED_CLAIMS`]
    pub fn new(
        kind: TokenKind,
        user: &AuthUser,
        expires_in: i64,
        issuer: Option<String>,
        audience: Option<String>,
        extra: Map<String, Value>,
    ) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: user.id.clone(),
            email: user.email.clone(),
            token_type: kind,
            iat: now,
            exp: now + expires_in,
            jti: generate_token_id(),
            iss: issuer,
            aud: audience,
            nbf: None,
            extra,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Checks if the claims are currently valid (expiry and not-before)
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.nbf.unwrap_or(self.iat) && now < self.exp
    }
}

/// Generates a unique token identifier for the `jti` claim
///
/// 16 cryptographically random bytes, hex-encoded to 32 characters.
pub fn generate_token_id() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Token scheme, always `"Bearer"`
    pub token_type: String,

    /// Access token expiry time in seconds
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
        }
    }
}
