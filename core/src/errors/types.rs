//! Error type definitions for token issuance, verification and configuration
//!
//! Every failure in the auth core is a distinct, named condition. Nothing is
//! retried and nothing degrades silently: configuration problems surface at
//! construction, token problems surface on the call that hit them.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The subject of a refresh token no longer resolves to a user
    #[error("User not found")]
    UserNotFound,
}

/// Configuration errors raised when constructing a `JwtManager`
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT secret must be at least {min} characters, got {actual}")]
    SecretTooShort { min: usize, actual: usize },

    #[error("JWT secret has insufficient entropy")]
    WeakSecret,

    #[error("invalid time format: '{value}'")]
    InvalidTimespan { value: String },

    #[error("invalid {field}: '{value}' (expected formats like \"15m\", \"1h\", \"7d\"; minimum \"1s\")")]
    InvalidExpiry { field: &'static str, value: String },
}

/// Token validation and issuance errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Invalid token type in header")]
    InvalidType,

    #[error("Invalid algorithm: {alg}")]
    InvalidAlgorithm { alg: String },

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token has expired")]
    Expired,

    #[error("Token not yet valid")]
    NotYetValid,

    #[error("Invalid token issuer")]
    InvalidIssuer,

    #[error("Invalid token audience")]
    InvalidAudience,

    #[error("Reserved claim cannot be overridden: {claim}")]
    ReservedClaim { claim: String },

    #[error("Invalid token type: expected refresh token")]
    WrongTokenType,

    #[error("Token generation failed")]
    GenerationFailed,
}
