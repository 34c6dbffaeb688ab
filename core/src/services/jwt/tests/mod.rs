//! Unit tests for the JWT service

mod security_tests;

use sigil_shared::config::JwtConfig;

use crate::services::jwt::JwtManager;

/// 64-character secret that passes the length and entropy checks
pub(crate) const TEST_SECRET: &str =
    "k9Qm2xVb7RwZp4HnT8cJdYf3GsLuE6iAoN1Mr5vKqXwB0yDhPjUzSaCg-kF2tLbW";

pub(crate) fn test_manager() -> JwtManager {
    JwtManager::new(JwtConfig::new(TEST_SECRET)).expect("failed to create manager")
}

/// Flips the first character of the signature segment
///
/// The first character is always safe to substitute: unlike the final one it
/// carries no trailing padding bits, so the segment still base64-decodes and
/// the failure is a genuine signature mismatch.
pub(crate) fn tamper_signature(token: &str) -> String {
    let idx = token.rfind('.').expect("token has no signature segment") + 1;
    let mut chars: Vec<char> = token.chars().collect();
    chars[idx] = if chars[idx] == 'A' { 'B' } else { 'A' };
    chars.into_iter().collect()
}
