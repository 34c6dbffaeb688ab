//! # Sigil Core
//!
//! Core JWT authentication logic for the Sigil backend: token issuance,
//! HS256 signing and verification, claim validation, refresh rotation and
//! revocation tracking. This crate contains domain entities, services,
//! collaborator traits and error types; HTTP dispatch and persistence live
//! in other crates.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
