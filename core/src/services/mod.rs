//! Business services containing domain logic.

pub mod jwt;

// Re-export commonly used types
pub use jwt::{
    extract_bearer_token, is_valid_timespan, parse_time_to_seconds, InMemoryRevocationStore,
    JwtManager, RevocationStore,
};
