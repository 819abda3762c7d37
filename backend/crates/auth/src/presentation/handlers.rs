//! HTTP Handlers

use axum::extract::{Extension, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use platform::cookie::{CookieConfig, extract_session_token};

use crate::application::service::AuthService;
use crate::domain::repository::{UserRepository, UserSessionRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    CurrentUserResponse, SessionStatusResponse, SignInRequest, SignInResponse,
};
use crate::presentation::middleware::AuthenticatedUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + UserSessionRepository + Clone + Send + Sync + 'static,
{
    pub service: AuthService<R>,
    pub cookie: CookieConfig,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + UserSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(service: AuthService<R>) -> Self {
        let cookie = service.config().session_cookie();
        Self { service, cookie }
    }

    /// Raw credential from the cookie or bearer header; either kind
    pub(crate) fn presented_token(&self, headers: &HeaderMap) -> Option<String> {
        extract_session_token(headers, &self.cookie.name)
    }

    fn clear_cookie(&self) -> Option<HeaderValue> {
        self.cookie.clear_cookie_header()
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<Response>
where
    R: UserRepository + UserSessionRepository + Clone + Send + Sync + 'static,
{
    let user = state.service.authenticate(req.user_name, req.password).await?;

    // Only "remember me" touches the store; a plain sign-in must not
    // supersede a session remembered on another device
    let (token, expires_at, max_age) = if req.remember_me {
        let issued = state.service.issue_session(user.user_id).await?;
        (
            issued.token.into_inner(),
            issued.expires_at,
            Some(state.service.config().session_ttl_secs()),
        )
    } else {
        let issued = state.service.issue_browser_session(user.user_id)?;
        (issued.token, issued.expires_at, None)
    };

    let cookie = state
        .cookie
        .set_cookie_header(&token, max_age)
        .ok_or_else(|| AuthError::Internal("Session cookie is not a valid header".to_string()))?;

    let body = SignInResponse {
        user_id: user.user_id.value(),
        user_name: user.user_name.into_inner(),
        expires_at_ms: expires_at.timestamp_millis(),
        session_token: token,
        persistent: req.remember_me,
    };

    Ok((StatusCode::OK, [(header::SET_COOKIE, cookie)], Json(body)).into_response())
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/signout
///
/// Always succeeds; the cookie is cleared even if the store is unreachable.
pub async fn sign_out<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: UserRepository + UserSessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = state.presented_token(&headers) {
        state.service.end_presented(token).await;
    }

    let mut response = StatusCode::NO_CONTENT.into_response();
    if let Some(cookie) = state.clear_cookie() {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
///
/// Restores a session from a presented token. A token that no longer
/// resolves clears the cookie so the client falls back to signed-out.
pub async fn session_status<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: UserRepository + UserSessionRepository + Clone + Send + Sync + 'static,
{
    let Some(token) = state.presented_token(&headers) else {
        return Json(SessionStatusResponse::anonymous()).into_response();
    };

    let resolved = match state.service.resolve_presented(token).await {
        Ok(user_id) => state
            .service
            .username_for(user_id)
            .await
            .map(|user_name| (user_id, user_name)),
        Err(e) => Err(e),
    };

    match resolved {
        Ok((user_id, user_name)) => {
            tracing::debug!(user_id = %user_id, "Session restored");
            Json(SessionStatusResponse {
                authenticated: true,
                user_id: Some(user_id.value()),
                user_name: Some(user_name.into_inner()),
            })
            .into_response()
        }
        Err(_) => {
            let mut response = Json(SessionStatusResponse::anonymous()).into_response();
            if let Some(cookie) = state.clear_cookie() {
                response.headers_mut().insert(header::SET_COOKIE, cookie);
            }
            response
        }
    }
}

// ============================================================================
// Current User (requires authentication)
// ============================================================================

/// GET /api/auth/me
pub async fn current_user(Extension(user): Extension<AuthenticatedUser>) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        user_id: user.user_id.value(),
        user_name: user.user_name.into_inner(),
    })
}
