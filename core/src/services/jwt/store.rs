//! Token revocation tracking.

use std::collections::HashSet;
use std::sync::RwLock;

/// Revocation tracking contract
///
/// Keyed by token identifier, normally the `jti` claim. Verification does not
/// consult a store automatically; callers that want logout semantics check
/// `is_revoked` themselves after `verify_token` succeeds. Production
/// deployments back this with shared storage; the same contract applies.
pub trait RevocationStore: Send + Sync {
    /// Marks a token identifier as revoked
    fn revoke(&self, token_id: &str);

    /// Returns whether a token identifier has been revoked
    fn is_revoked(&self, token_id: &str) -> bool;

    /// Forgets all revocations
    fn clear(&self);
}

/// In-memory reference implementation with process lifetime
///
/// The revoked set is the only mutable shared state in the auth core, so it
/// is guarded for concurrent logout/verification traffic.
#[derive(Debug, Default)]
pub struct InMemoryRevocationStore {
    revoked: RwLock<HashSet<String>>,
}

impl InMemoryRevocationStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl RevocationStore for InMemoryRevocationStore {
    fn revoke(&self, token_id: &str) {
        self.revoked
            .write()
            .expect("revocation store lock poisoned")
            .insert(token_id.to_string());
    }

    fn is_revoked(&self, token_id: &str) -> bool {
        self.revoked
            .read()
            .expect("revocation store lock poisoned")
            .contains(token_id)
    }

    fn clear(&self) {
        self.revoked
            .write()
            .expect("revocation store lock poisoned")
            .clear();
    }
}
