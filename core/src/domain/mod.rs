//! Domain layer: entities shared across the auth core.

pub mod entities;

pub use entities::*;
