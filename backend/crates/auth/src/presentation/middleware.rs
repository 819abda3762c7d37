//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::repository::{UserRepository, UserSessionRepository};
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Resolved session owner, stored in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub user_name: UserName,
}

/// Middleware that requires a valid session (cookie or bearer token)
pub async fn require_auth_session<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + UserSessionRepository + Clone + Send + Sync + 'static,
{
    let token = state
        .presented_token(req.headers())
        .ok_or(AuthError::SessionInvalid)?;

    let user_id = state.service.resolve_presented(token).await?;
    let user_name = state
        .service
        .username_for(user_id)
        .await
        .map_err(|_| AuthError::SessionInvalid)?;

    req.extensions_mut()
        .insert(AuthenticatedUser { user_id, user_name });

    Ok(next.run(req).await)
}
