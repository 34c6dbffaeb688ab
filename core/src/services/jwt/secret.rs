//! Signing secret strength validation.
//!
//! HS256 security degrades directly with secret strength, so weak material is
//! rejected at manager construction rather than warned about at runtime.

use once_cell::sync::Lazy;

use crate::errors::ConfigError;

/// Minimum accepted secret length in characters
pub const MIN_SECRET_LENGTH: usize = 64;

/// Secrets at or above this length must still show basic character diversity
const DIVERSITY_CHECK_LENGTH: usize = 32;

/// Minimum distinct characters required for long secrets
const MIN_DISTINCT_CHARS: usize = 4;

/// Common weak phrases rejected by case-insensitive substring match
static WEAK_PHRASES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "secret", "password", "changeme", "admin", "test", "qwerty", "123456",
    ]
});

/// Validates signing secret length and entropy
///
/// # Returns
///
/// * `Ok(())` - The secret is acceptable
/// * `Err(ConfigError::SecretTooShort)` - Shorter than [`MIN_SECRET_LENGTH`]
/// * `Err(ConfigError::WeakSecret)` - Repeated characters, a denylisted
///   phrase, or insufficient character diversity
pub fn validate_secret(secret: &str) -> Result<(), ConfigError> {
    let length = secret.chars().count();
    if length < MIN_SECRET_LENGTH {
        return Err(ConfigError::SecretTooShort {
            min: MIN_SECRET_LENGTH,
            actual: length,
        });
    }

    let mut distinct: Vec<char> = secret.chars().collect();
    distinct.sort_unstable();
    distinct.dedup();

    if distinct.len() == 1 {
        return Err(ConfigError::WeakSecret);
    }

    let lowered = secret.to_lowercase();
    if WEAK_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
        return Err(ConfigError::WeakSecret);
    }

    if length >= DIVERSITY_CHECK_LENGTH && distinct.len() < MIN_DISTINCT_CHARS {
        return Err(ConfigError::WeakSecret);
    }

    Ok(())
}
