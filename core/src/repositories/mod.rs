//! Capability traits implemented by external collaborators.

pub mod user_loader;

pub use user_loader::UserLoader;
