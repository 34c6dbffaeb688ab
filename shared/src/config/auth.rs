//! JWT authentication configuration

use serde::{Deserialize, Serialize};

/// JWT manager configuration
///
/// Expiry fields are human-readable time spans ("15m", "1h", "7d"). The
/// grammar and the secret are validated when a `JwtManager` is constructed
/// from this config, never at first use.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry as a time span (e.g. "15m")
    #[serde(default = "default_access_expiry")]
    pub access_token_expiry: String,

    /// Refresh token expiry as a time span (e.g. "7d")
    #[serde(default = "default_refresh_expiry")]
    pub refresh_token_expiry: String,

    /// JWT issuer claim, included in and checked against tokens when set
    #[serde(default)]
    pub issuer: Option<String>,

    /// JWT audience claim, included in and checked against tokens when set
    #[serde(default)]
    pub audience: Option<String>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            access_token_expiry: default_access_expiry(),
            refresh_token_expiry: default_refresh_expiry(),
            issuer: None,
            audience: None,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with a secret and default expiries
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the access token expiry time span
    pub fn with_access_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.access_token_expiry = expiry.into();
        self
    }

    /// Set the refresh token expiry time span
    pub fn with_refresh_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.refresh_token_expiry = expiry.into();
        self
    }

    /// Set the issuer claim
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set the audience claim
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Create from environment variables
    ///
    /// Reads `JWT_SECRET`, `JWT_ACCESS_TOKEN_EXPIRY`, `JWT_REFRESH_TOKEN_EXPIRY`,
    /// `JWT_ISSUER` and `JWT_AUDIENCE`. Missing expiry variables fall back to
    /// the defaults; a missing secret is left empty and rejected downstream.
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or_default(),
            access_token_expiry: std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
                .unwrap_or_else(|_| default_access_expiry()),
            refresh_token_expiry: std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
                .unwrap_or_else(|_| default_refresh_expiry()),
            issuer: std::env::var("JWT_ISSUER").ok(),
            audience: std::env::var("JWT_AUDIENCE").ok(),
        }
    }
}

fn default_access_expiry() -> String {
    String::from("15m")
}

fn default_refresh_expiry() -> String {
    String::from("7d")
}
