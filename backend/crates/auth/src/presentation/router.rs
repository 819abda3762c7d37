//! Auth Router

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::{config::AuthConfig, service::AuthService};
use crate::domain::repository::{UserRepository, UserSessionRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_auth_session;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + UserSessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState::new(AuthService::new(Arc::new(repo), Arc::new(config)));

    let protected = Router::new()
        .route("/me", get(handlers::current_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth_session::<R>,
        ));

    Router::new()
        .route("/signin", post(handlers::sign_in::<R>))
        .route("/signout", post(handlers::sign_out::<R>))
        .route("/status", get(handlers::session_status::<R>))
        .merge(protected)
        .with_state(state)
}
