//! Shared configuration types for Sigil auth services
//!
//! This crate provides the configuration surface consumed by the core
//! crate. The types here are plain data: all semantic validation (secret
//! strength, expiry grammar) happens when the core constructs a manager
//! from them, so that invalid configuration fails fast in one place.

pub mod config;

// Re-export commonly used items at crate root
pub use config::JwtConfig;
