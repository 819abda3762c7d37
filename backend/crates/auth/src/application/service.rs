//! Auth Service
//!
//! Facade over the use cases exposing the operations a shell (HTTP handlers,
//! setup binaries) calls. Session context is always passed in explicitly.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use platform::password;

use crate::application::{
    check_session::CheckSessionUseCase,
    config::AuthConfig,
    issue_session::{IssueSessionUseCase, IssuedSession},
    provision::{ProvisionInput, ProvisionOutput, ProvisionUseCase},
    sign_in::{SignInInput, SignInOutput, SignInUseCase},
    sign_out::SignOutUseCase,
    user_lookup::UserLookupUseCase,
};
use crate::domain::repository::{RoleRepository, UserRepository, UserSessionRepository};
use crate::domain::value_object::{
    browser_session::BrowserSession, session_token::SessionToken, user_id::UserId,
    user_name::UserName,
};
use crate::error::{AuthError, AuthResult};

pub struct AuthService<R> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> Clone for AuthService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

/// A signed browser session; nothing was written to the store
#[derive(Debug, Clone)]
pub struct IssuedBrowserSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl<R> AuthService<R> {
    /// Also builds the dummy hash so the first unknown-user sign-in costs
    /// the same as any other
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        password::warm_up_dummy_hash();
        Self { repo, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// Sign a browser session for a sign-in without "remember me"
    pub fn issue_browser_session(&self, user_id: UserId) -> AuthResult<IssuedBrowserSession> {
        let ttl = Duration::from_std(self.config.browser_session_ttl)
            .map_err(|_| AuthError::IssueFailure)?;
        let session = BrowserSession::new(user_id, ttl);
        let token = session
            .sign(&self.config.session_secret)
            .ok_or(AuthError::IssueFailure)?;

        tracing::info!(user_id = %user_id, expires_at = %session.expires_at, "Browser session issued");

        Ok(IssuedBrowserSession {
            token,
            expires_at: session.expires_at,
        })
    }

    /// `resolve_browser_session(token) -> user_id | SessionInvalid`
    pub fn resolve_browser_session(&self, token: &str) -> AuthResult<UserId> {
        BrowserSession::verify(token, &self.config.session_secret, Utc::now())
            .map(|session| session.user_id)
            .ok_or(AuthError::SessionInvalid)
    }
}

impl<R> AuthService<R>
where
    R: UserRepository,
{
    /// `authenticate(user_name, password) -> user | InvalidCredentials`
    pub async fn authenticate(
        &self,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<SignInOutput> {
        SignInUseCase::new(Arc::clone(&self.repo), Arc::clone(&self.config))
            .execute(SignInInput {
                user_name: user_name.into(),
                password: password.into(),
            })
            .await
    }

    /// `username_for(user_id) -> name | UserNotFound`
    pub async fn username_for(&self, user_id: UserId) -> AuthResult<UserName> {
        UserLookupUseCase::new(Arc::clone(&self.repo))
            .username_for(user_id)
            .await
    }
}

impl<R> AuthService<R>
where
    R: UserSessionRepository,
{
    /// `issue_session(user_id) -> token | IssueFailure`
    pub async fn issue_session(&self, user_id: UserId) -> AuthResult<IssuedSession> {
        IssueSessionUseCase::new(Arc::clone(&self.repo), Arc::clone(&self.config))
            .execute(user_id)
            .await
    }

    pub async fn issue_session_with_ttl(
        &self,
        user_id: UserId,
        ttl: Duration,
    ) -> AuthResult<IssuedSession> {
        IssueSessionUseCase::new(Arc::clone(&self.repo), Arc::clone(&self.config))
            .execute_with_ttl(user_id, ttl)
            .await
    }

    /// `resolve_session(token) -> user_id | SessionInvalid`
    pub async fn resolve_session(&self, token: &SessionToken) -> AuthResult<UserId> {
        CheckSessionUseCase::new(Arc::clone(&self.repo))
            .execute(token)
            .await
    }

    /// `revoke(token) -> whether a row was deleted`
    pub async fn revoke_session(&self, token: &SessionToken) -> AuthResult<bool> {
        SignOutUseCase::new(Arc::clone(&self.repo)).execute(token).await
    }

    /// Resolve whichever kind of credential the client presented
    pub async fn resolve_presented(&self, raw: String) -> AuthResult<UserId> {
        if BrowserSession::is_browser_token(&raw) {
            self.resolve_browser_session(&raw)
        } else {
            self.resolve_session(&SessionToken::from_raw(raw)).await
        }
    }

    /// Sign out whichever kind of credential the client presented
    ///
    /// Browser sessions are stateless; clearing the cookie ends them.
    pub async fn end_presented(&self, raw: String) {
        if !BrowserSession::is_browser_token(&raw) {
            self.end_session(&SessionToken::from_raw(raw)).await;
        }
    }

    /// Best-effort revoke; failures are logged, never returned
    pub async fn end_session(&self, token: &SessionToken) {
        if let Err(e) = self.revoke_session(token).await {
            tracing::warn!(
                operation = "end_session",
                token = %token.redacted(),
                error = %e,
                "Failed to delete session"
            );
        }
    }
}

impl<R> AuthService<R>
where
    R: UserRepository + RoleRepository,
{
    pub async fn ensure_default_admin(
        &self,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<ProvisionOutput> {
        ProvisionUseCase::new(
            Arc::clone(&self.repo),
            Arc::clone(&self.repo),
            Arc::clone(&self.config),
        )
        .execute(ProvisionInput {
            user_name: user_name.into(),
            password: password.into(),
        })
        .await
    }
}
