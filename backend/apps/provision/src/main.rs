//! Default administrator provisioning
//!
//! Ensures the administrator role and one administrator account exist.
//! Safe to run on every deploy: existing rows are left untouched.

use std::env;
use std::sync::Arc;

use anyhow::Context;
use auth::{AuthConfig, AuthService, PgAuthRepository, PgConnectionProvider};
use platform::config::DatabaseConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "provision=info,auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let user_name = env::var("ADMIN_USER_NAME").context("ADMIN_USER_NAME must be set")?;
    let password = env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;

    let db_config = DatabaseConfig::from_env()?;
    let auth_config = AuthConfig::from_env()?;

    let provider = PgConnectionProvider::new(&db_config);
    let service = AuthService::new(
        Arc::new(PgAuthRepository::new(provider.clone())),
        Arc::new(auth_config),
    );

    let result = service.ensure_default_admin(user_name.as_str(), password).await;
    provider.close().await;

    let output = result.context("Default administrator provisioning failed")?;
    tracing::info!(
        user_name = %user_name,
        role_id = %output.role_id,
        role_created = output.role_created,
        user_created = output.user_created,
        "Provisioning finished"
    );

    Ok(())
}
