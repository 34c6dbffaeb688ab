//! User identity snapshot used when minting tokens.

use serde::{Deserialize, Serialize};

/// The identity a token pair is minted for
///
/// This is a snapshot, not a persisted entity: the core never stores users,
/// it only copies `id` and `email` into token claims. During refresh a
/// [`crate::repositories::UserLoader`] may supply an updated snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Stable user identifier, carried as the `sub` claim
    pub id: String,

    /// Email address, carried as the `email` claim
    pub email: String,
}

impl AuthUser {
    /// Creates a new user snapshot
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}
