//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::domain::repository::UserSessionRepository;
use auth::{AuthConfig, PgAuthRepository, PgConnectionProvider, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use platform::config::DatabaseConfig;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection (lazy; first query opens it)
    let db_config = DatabaseConfig::from_env()?;
    tracing::info!(
        host = %db_config.host,
        database = %db_config.database,
        port = db_config.port,
        ssl_mode = %db_config.ssl_mode,
        "Database configured"
    );
    let repo = PgAuthRepository::new(PgConnectionProvider::new(&db_config));

    // Startup cleanup: errors here should not prevent server startup
    match repo.cleanup_expired(chrono::Utc::now()).await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Auth session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Auth session cleanup failed, continuing anyway");
        }
    }

    // Debug builds only relax the Secure flag; pepper and TTLs always come from env
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development_from_env()?
    } else {
        AuthConfig::from_env()?
    };
    tracing::debug!(config = ?auth_config, "Auth configuration loaded");
    if auth_config.session_secret_generated {
        tracing::warn!(
            "AUTH_SESSION_SECRET not set; browser sessions end when this process restarts"
        );
    }

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    let app = Router::new()
        .nest("/api/auth", auth_router(repo, auth_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = env::var("API_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
