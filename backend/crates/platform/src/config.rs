//! Environment Configuration
//!
//! Connection settings for the relational store. Values come from the process
//! environment (usually populated from `.env` by the binaries), never from
//! ambient state inside request handling.
//!
//! | Variable             | Required | Default   |
//! |----------------------|----------|-----------|
//! | `DB_HOST`            | yes      |           |
//! | `DB_NAME`            | yes      |           |
//! | `DB_USER`            | yes      |           |
//! | `DB_PASSWORD`        | yes      |           |
//! | `DB_PORT`            | no       | `5432`    |
//! | `DB_SSLMODE`         | no       | `require` |
//! | `DB_MAX_CONNECTIONS` | no       | `5`       |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_DB_SSLMODE: &str = "DB_SSLMODE";
pub const ENV_DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";

pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is absent or empty
    #[error("Missing required configuration value: {0}")]
    Missing(&'static str),

    /// A variable is present but cannot be parsed
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

// ============================================================================
// SSL mode
// ============================================================================

/// libpq-compatible SSL negotiation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SslMode {
    Disable,
    Allow,
    Prefer,
    #[default]
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Allow => "allow",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl FromStr for SslMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disable" => Ok(SslMode::Disable),
            "allow" => Ok(SslMode::Allow),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" => Ok(SslMode::VerifyCa),
            "verify-full" => Ok(SslMode::VerifyFull),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Database configuration
// ============================================================================

/// Database connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    pub ssl_mode: SslMode,
    /// Upper bound for pooled connections beneath the provider
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    ///
    /// Empty values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            non_empty(&lookup, key).ok_or(ConfigError::Missing(key))
        };

        let ssl_mode = match non_empty(&lookup, ENV_DB_SSLMODE) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: ENV_DB_SSLMODE,
                value: raw,
            })?,
            None => SslMode::default(),
        };

        Ok(Self {
            host: required(ENV_DB_HOST)?,
            database: required(ENV_DB_NAME)?,
            user: required(ENV_DB_USER)?,
            password: required(ENV_DB_PASSWORD)?,
            port: parse_optional(&lookup, ENV_DB_PORT)?.unwrap_or(DEFAULT_DB_PORT),
            ssl_mode,
            max_connections: parse_optional(&lookup, ENV_DB_MAX_CONNECTIONS)?
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        })
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("port", &self.port)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Parse an optional variable; absent or empty yields `Ok(None)`
pub fn parse_optional<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match non_empty(lookup, key) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(None),
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
