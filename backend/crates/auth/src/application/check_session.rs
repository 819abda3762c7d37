//! Check Session Use Case
//!
//! Resolves a presented token to its owner. Every call first sweeps
//! expired sessions store-wide.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::repository::UserSessionRepository;
use crate::domain::value_object::{session_token::SessionToken, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: UserSessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> CheckSessionUseCase<S>
where
    S: UserSessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Owner of a live session
    ///
    /// Never-issued, expired, swept, revoked and malformed tokens all yield
    /// [`AuthError::SessionInvalid`]; so does a store failure.
    pub async fn execute(&self, token: &SessionToken) -> AuthResult<UserId> {
        let now = Utc::now();

        match self.session_repo.cleanup_expired(now).await {
            Ok(0) => {}
            Ok(removed) => tracing::info!(removed, "Expired sessions swept"),
            Err(e) => {
                tracing::error!(operation = "resolve_session", error = %e, "Session sweep failed");
                return Err(AuthError::SessionInvalid);
            }
        }

        if !token.is_well_formed() {
            tracing::debug!(token = %token.redacted(), "Malformed session token");
            return Err(AuthError::SessionInvalid);
        }

        match self.session_repo.find_user_id(token, now).await {
            Ok(Some(user_id)) => {
                tracing::debug!(token = %token.redacted(), user_id = %user_id, "Session verified");
                Ok(user_id)
            }
            Ok(None) => {
                tracing::debug!(token = %token.redacted(), "Session invalid or expired");
                Err(AuthError::SessionInvalid)
            }
            Err(e) => {
                tracing::error!(operation = "resolve_session", error = %e, "Session lookup failed");
                Err(AuthError::SessionInvalid)
            }
        }
    }

    /// Just check if session is valid (returns bool)
    pub async fn is_valid(&self, token: &SessionToken) -> bool {
        self.execute(token).await.is_ok()
    }
}
