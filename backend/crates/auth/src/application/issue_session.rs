//! Issue Session Use Case
//!
//! Mints a session token for an authenticated user. Any session the user
//! already had is superseded in the same store transaction.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::application::config::AuthConfig;
use crate::domain::entity::user_session::UserSession;
use crate::domain::repository::UserSessionRepository;
use crate::domain::value_object::{session_token::SessionToken, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// A freshly issued session
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: SessionToken,
    pub expires_at: DateTime<Utc>,
}

pub struct IssueSessionUseCase<S>
where
    S: UserSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> IssueSessionUseCase<S>
where
    S: UserSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Issue with the configured TTL
    pub async fn execute(&self, user_id: UserId) -> AuthResult<IssuedSession> {
        let ttl = Duration::from_std(self.config.session_ttl).map_err(|e| {
            tracing::error!(error = %e, "Configured session TTL out of range");
            AuthError::IssueFailure
        })?;
        self.execute_with_ttl(user_id, ttl).await
    }

    pub async fn execute_with_ttl(&self, user_id: UserId, ttl: Duration) -> AuthResult<IssuedSession> {
        if ttl <= Duration::zero() {
            tracing::error!(user_id = %user_id, "Refusing to issue a session with non-positive TTL");
            return Err(AuthError::IssueFailure);
        }

        let session = UserSession::new(user_id, ttl);

        if let Err(e) = self.session_repo.replace_for_user(&session).await {
            tracing::error!(
                operation = "issue_session",
                user_id = %user_id,
                error = %e,
                "Failed to store session"
            );
            return Err(AuthError::IssueFailure);
        }

        tracing::info!(
            user_id = %user_id,
            token = %session.token.redacted(),
            expires_at = %session.expires_at,
            "Session issued"
        );

        Ok(IssuedSession {
            token: session.token,
            expires_at: session.expires_at,
        })
    }
}
