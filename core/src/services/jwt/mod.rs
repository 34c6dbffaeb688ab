//! JWT service module
//!
//! This module handles all token-related operations:
//! - Access/refresh token pair issuance (HS256 only)
//! - Token verification with an explicit algorithm allow-list
//! - Refresh-token rotation with optional user reloading
//! - Bearer header extraction
//! - Revocation tracking for logout flows
//! - Human-readable expiry spans ("15m", "7d")

mod extract;
mod manager;
mod secret;
mod store;
mod timespan;

#[cfg(test)]
mod tests;

pub use extract::extract_bearer_token;
pub use manager::JwtManager;
pub use secret::MIN_SECRET_LENGTH;
pub use store::{InMemoryRevocationStore, RevocationStore};
pub use timespan::{is_valid_timespan, parse_time_to_seconds};
