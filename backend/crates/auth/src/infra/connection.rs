//! Store Connection Provider
//!
//! Builds a lazily-connecting pool from [`DatabaseConfig`]. Each operation
//! acquires its own connection (or transaction) and returns it to the pool
//! when the guard drops, on every exit path.

use std::time::Duration;

use platform::config::{DatabaseConfig, SslMode};
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use sqlx::{Postgres, Transaction};

use crate::error::{AuthError, AuthResult};

/// Time to wait for a free connection before failing the operation
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct PgConnectionProvider {
    pool: PgPool,
}

impl PgConnectionProvider {
    /// Create the provider; no connection is opened until first use
    pub fn new(config: &DatabaseConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy_with(connect_options(config));

        tracing::debug!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            ssl_mode = %config.ssl_mode,
            "Database provider configured"
        );

        Self { pool }
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Scoped connection, released to the pool on drop
    ///
    /// Every failure here (unreachable host, rejected credentials, TLS,
    /// exhausted pool) is a connection failure.
    pub async fn acquire(&self) -> AuthResult<PoolConnection<Postgres>> {
        self.pool.acquire().await.map_err(AuthError::Connection)
    }

    /// Transaction that rolls back on drop unless committed
    pub async fn begin(&self) -> AuthResult<Transaction<'static, Postgres>> {
        self.pool.begin().await.map_err(AuthError::Connection)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.user)
        .password(&config.password)
        .ssl_mode(pg_ssl_mode(config.ssl_mode))
}

fn pg_ssl_mode(mode: SslMode) -> PgSslMode {
    match mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Allow => PgSslMode::Allow,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
        SslMode::VerifyCa => PgSslMode::VerifyCa,
        SslMode::VerifyFull => PgSslMode::VerifyFull,
    }
}
