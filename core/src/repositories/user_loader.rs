//! User lookup contract for refresh-token rotation.

use async_trait::async_trait;

use crate::domain::entities::user::AuthUser;
use crate::errors::DomainResult;

/// Loads a fresh user snapshot by id during token refresh
///
/// Implemented by the persistence layer. `Ok(None)` means the user no longer
/// exists (deleted or deactivated since the refresh token was issued) and the
/// refresh must be rejected; errors propagate to the `refresh_tokens` caller
/// untouched.
#[async_trait]
pub trait UserLoader: Send + Sync {
    /// Resolves a user id (the token's `sub` claim) to a current snapshot
    async fn load_user(&self, user_id: &str) -> DomainResult<Option<AuthUser>>;
}
