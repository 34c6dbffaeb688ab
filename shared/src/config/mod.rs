//! Configuration module
//!
//! - `auth` - JWT signing and verification configuration

pub mod auth;

pub use auth::JwtConfig;
