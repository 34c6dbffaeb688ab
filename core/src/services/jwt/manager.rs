//! JWT manager implementation.

use std::collections::HashSet;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use sigil_shared::config::JwtConfig;

use crate::domain::entities::token::{Claims, TokenKind, TokenPair, RESERVED_CLAIMS};
use crate::domain::entities::user::AuthUser;
use crate::errors::{AuthError, ConfigError, DomainError, DomainResult, TokenError};
use crate::repositories::UserLoader;

use super::secret::validate_secret;
use super::timespan::{is_valid_timespan, parse_time_to_seconds};

/// The only accepted signing algorithm, as a header string
const ALGORITHM_NAME: &str = "HS256";

/// Header fields inspected before any cryptographic work
///
/// Decoded by hand rather than through `jsonwebtoken` so that an unsupported
/// `alg` value is rejected by an explicit string-equality gate and never
/// selects a verification method.
#[derive(Debug, Deserialize)]
struct RawHeader {
    alg: String,
    #[serde(default)]
    typ: Option<String>,
}

/// Service owning secret material and issuing, verifying and rotating tokens
///
/// Configuration is captured immutably at construction; every operation is
/// otherwise stateless, so a single instance is safe to share across tasks
/// with no locking.
pub struct JwtManager {
    issuer: Option<String>,
    audience: Option<String>,
    access_expiry_secs: i64,
    refresh_expiry_secs: i64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtManager")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("access_expiry_secs", &self.access_expiry_secs)
            .field("refresh_expiry_secs", &self.refresh_expiry_secs)
            .finish_non_exhaustive()
    }
}

impl JwtManager {
    /// Creates a new manager from configuration
    ///
    /// All validation happens here, never deferred to first use: secret
    /// length and entropy (see [`super::secret`]), and both expiry spans
    /// against the time-span grammar.
    ///
    /// # Returns
    ///
    /// * `Ok(JwtManager)` - Ready to issue and verify tokens
    /// * `Err(DomainError::Config)` - Weak secret or malformed expiry span
    pub fn new(config: JwtConfig) -> DomainResult<Self> {
        validate_secret(&config.secret)?;

        let access_expiry_secs =
            parse_expiry("access_token_expiry", &config.access_token_expiry)?;
        let refresh_expiry_secs =
            parse_expiry("refresh_token_expiry", &config.refresh_token_expiry)?;

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        // Signature-only validation: exp/nbf/iss/aud are checked by explicit
        // gates in verify_token so each failure keeps its own error.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();

        Ok(Self {
            issuer: config.issuer,
            audience: config.audience,
            access_expiry_secs,
            refresh_expiry_secs,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed access/refresh token pair for a user
    ///
    /// Additional claims are merged into both payloads after an explicit
    /// check against [`RESERVED_CLAIMS`]; an attempt to redefine a system
    /// claim fails before anything is signed.
    ///
    /// # Arguments
    ///
    /// * `user` - Identity snapshot for `sub`/`email`
    /// * `additional_claims` - Caller-supplied claims merged into the payload
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Freshly signed pair with distinct `jti`s
    /// * `Err(TokenError::ReservedClaim)` - A claim key collides with a system claim
    pub fn create_token_pair(
        &self,
        user: &AuthUser,
        additional_claims: Option<&Map<String, Value>>,
    ) -> DomainResult<TokenPair> {
        let extra = additional_claims.cloned().unwrap_or_default();
        if let Some(key) = extra.keys().find(|key| RESERVED_CLAIMS.contains(key.as_str())) {
            return Err(DomainError::Token(TokenError::ReservedClaim {
                claim: key.clone(),
            }));
        }

        let access_claims = Claims::new(
            TokenKind::Access,
            user,
            self.access_expiry_secs,
            self.issuer.clone(),
            self.audience.clone(),
            extra.clone(),
        );
        let refresh_claims = Claims::new(
            TokenKind::Refresh,
            user,
            self.refresh_expiry_secs,
            self.issuer.clone(),
            self.audience.clone(),
            extra,
        );

        let access_token = self.encode_jwt(&access_claims)?;
        let refresh_token = self.encode_jwt(&refresh_claims)?;

        debug!(user_id = %user.id, jti = %access_claims.jti, "issued token pair");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.access_expiry_secs,
        ))
    }

    /// Verifies a token and returns its claims
    ///
    /// Gates run in a fixed order, each with its own failure: segment format,
    /// header `typ`, header `alg` (strictly before any signature work, so a
    /// forged algorithm can never select the verification method), HS256
    /// signature, expiry, not-before, then configured issuer and audience.
    pub fn verify_token(&self, token: &str) -> DomainResult<Claims> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 || segments[0].is_empty() || segments[1].is_empty() {
            return Err(DomainError::Token(TokenError::InvalidFormat));
        }

        let header = decode_raw_header(segments[0])?;
        if header.typ.as_deref() != Some("JWT") {
            return Err(DomainError::Token(TokenError::InvalidType));
        }
        if header.alg != ALGORITHM_NAME {
            warn!(alg = %header.alg, "rejected token with unsupported algorithm");
            return Err(DomainError::Token(TokenError::InvalidAlgorithm {
                alg: header.alg,
            }));
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                _ => DomainError::Token(TokenError::InvalidFormat),
            })?;
        let claims = token_data.claims;

        let now = Utc::now().timestamp();
        if now >= claims.exp {
            return Err(DomainError::Token(TokenError::Expired));
        }
        if let Some(nbf) = claims.nbf {
            if now < nbf {
                return Err(DomainError::Token(TokenError::NotYetValid));
            }
        }

        if let Some(ref issuer) = self.issuer {
            if claims.iss.as_deref() != Some(issuer.as_str()) {
                return Err(DomainError::Token(TokenError::InvalidIssuer));
            }
        }
        if let Some(ref audience) = self.audience {
            if claims.aud.as_deref() != Some(audience.as_str()) {
                return Err(DomainError::Token(TokenError::InvalidAudience));
            }
        }

        Ok(claims)
    }

    /// Decodes a token payload without any validation
    ///
    /// No signature, expiry or claim checks are performed; the result is for
    /// diagnostics and display only and must never feed a trust decision.
    /// Malformed input yields `None`, never an error.
    pub fn decode_token(&self, token: &str) -> Option<Claims> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return None;
        }
        let payload = URL_SAFE_NO_PAD.decode(segments[1]).ok()?;
        serde_json::from_slice(&payload).ok()
    }

    /// Rotates a refresh token into a brand-new token pair
    ///
    /// The refresh token goes through the full `verify_token` path; an
    /// expired or tampered refresh token is rejected exactly like an access
    /// token. Passing an access token here fails the type gate, so a
    /// short-lived access token can never self-renew. The old refresh token
    /// is not revoked automatically; callers wire that through a
    /// [`super::RevocationStore`] keyed by `jti` when they want it.
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - The token presented by the client
    /// * `loader` - Optional lookup for a fresh user snapshot; `Ok(None)`
    ///   rejects the refresh, errors propagate untouched
    pub async fn refresh_tokens(
        &self,
        refresh_token: &str,
        loader: Option<&dyn UserLoader>,
    ) -> DomainResult<TokenPair> {
        let claims = self.verify_token(refresh_token)?;
        if claims.token_type != TokenKind::Refresh {
            return Err(DomainError::Token(TokenError::WrongTokenType));
        }

        let user = match loader {
            Some(loader) => match loader.load_user(&claims.sub).await? {
                Some(user) => user,
                None => {
                    warn!(user_id = %claims.sub, "refresh rejected: subject no longer resolves");
                    return Err(DomainError::Auth(AuthError::UserNotFound));
                }
            },
            None => AuthUser::new(claims.sub.clone(), claims.email.clone()),
        };

        let extra = (!claims.extra.is_empty()).then_some(&claims.extra);
        self.create_token_pair(&user, extra)
    }

    /// Encodes claims into a signed JWT
    fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }
}

/// Decodes the header segment into the fields the allow-list gate needs
fn decode_raw_header(segment: &str) -> Result<RawHeader, TokenError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| TokenError::InvalidFormat)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::InvalidFormat)
}

/// Validates an expiry span and converts it to seconds
///
/// The error names the offending field and echoes the rejected value so a
/// misconfigured deployment fails with an actionable message.
fn parse_expiry(field: &'static str, value: &str) -> Result<i64, ConfigError> {
    if !is_valid_timespan(value) {
        return Err(ConfigError::InvalidExpiry {
            field,
            value: value.to_string(),
        });
    }
    parse_time_to_seconds(value)
}
