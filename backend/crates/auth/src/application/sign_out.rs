//! Sign Out Use Case
//!
//! Revokes a session token.

use std::sync::Arc;

use crate::domain::repository::UserSessionRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: UserSessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: UserSessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Delete the session; `Ok(false)` when no such session existed
    pub async fn execute(&self, token: &SessionToken) -> AuthResult<bool> {
        let deleted = self.session_repo.delete(token).await?;

        if deleted {
            tracing::info!(token = %token.redacted(), "Session revoked");
        } else {
            tracing::debug!(token = %token.redacted(), "No session to revoke");
        }

        Ok(deleted)
    }
}
