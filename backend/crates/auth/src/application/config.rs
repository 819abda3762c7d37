//! Application Configuration
//!
//! Configuration for the Auth application layer.
//!
//! | Variable                     | Default               |
//! |------------------------------|-----------------------|
//! | `AUTH_SESSION_TTL_DAYS`      | `30`                  |
//! | `AUTH_BROWSER_SESSION_HOURS` | `12`                  |
//! | `AUTH_COOKIE_SECURE`         | `true` (`false` in dev) |
//! | `AUTH_PASSWORD_PEPPER`       | unset                 |
//! | `AUTH_SESSION_SECRET`        | random per process    |

use std::time::Duration;

use platform::config::{ConfigError, parse_optional};
use platform::cookie::CookieConfig;
use platform::crypto::random_bytes;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use crate::domain::value_object::role_name::ADMIN_ROLE_NAME;

pub const ENV_SESSION_TTL_DAYS: &str = "AUTH_SESSION_TTL_DAYS";
pub const ENV_BROWSER_SESSION_HOURS: &str = "AUTH_BROWSER_SESSION_HOURS";
pub const ENV_COOKIE_SECURE: &str = "AUTH_COOKIE_SECURE";
pub const ENV_PASSWORD_PEPPER: &str = "AUTH_PASSWORD_PEPPER";
pub const ENV_SESSION_SECRET: &str = "AUTH_SESSION_SECRET";

pub const DEFAULT_SESSION_TTL_DAYS: u32 = 30;
pub const DEFAULT_BROWSER_SESSION_HOURS: u32 = 12;

/// Minimum length of a configured signing secret, in bytes
pub const MIN_SESSION_SECRET_LEN: usize = 32;

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Lifetime of a remembered (database) session
    pub session_ttl: Duration,
    /// Lifetime of a signed browser session (sign-in without "remember me")
    pub browser_session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// HMAC key for browser session tokens
    pub session_secret: Vec<u8>,
    /// True when `session_secret` was generated rather than configured
    pub session_secret_generated: bool,
    /// Role given to the provisioned administrator
    pub default_role_name: String,
    pub default_role_description: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session_token".to_string(),
            session_ttl: Duration::from_secs(u64::from(DEFAULT_SESSION_TTL_DAYS) * SECS_PER_DAY),
            browser_session_ttl: Duration::from_secs(
                u64::from(DEFAULT_BROWSER_SESSION_HOURS) * SECS_PER_HOUR,
            ),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
            session_secret: random_bytes(MIN_SESSION_SECRET_LEN),
            session_secret_generated: true,
            default_role_name: ADMIN_ROLE_NAME.to_string(),
            default_role_description: "Acceso completo al sistema ERP".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`AuthConfig::from_env`], but cookies are not `Secure` unless
    /// `AUTH_COOKIE_SECURE` says so
    pub fn development_from_env() -> Result<Self, ConfigError> {
        Self::development_from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::read_over(Self::default(), lookup)
    }

    pub fn development_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::read_over(Self::development(), lookup)
    }

    /// Apply every variable that is set on top of `base`
    fn read_over<F>(base: Self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let session_ttl = match positive(&lookup, ENV_SESSION_TTL_DAYS)? {
            Some(days) => Duration::from_secs(u64::from(days) * SECS_PER_DAY),
            None => base.session_ttl,
        };

        let browser_session_ttl = match positive(&lookup, ENV_BROWSER_SESSION_HOURS)? {
            Some(hours) => Duration::from_secs(u64::from(hours) * SECS_PER_HOUR),
            None => base.browser_session_ttl,
        };

        let cookie_secure =
            parse_optional::<_, bool>(&lookup, ENV_COOKIE_SECURE)?.unwrap_or(base.cookie_secure);

        let password_pepper = lookup(ENV_PASSWORD_PEPPER)
            .filter(|p| !p.is_empty())
            .map(String::into_bytes)
            .or(base.password_pepper);

        let (session_secret, session_secret_generated) =
            match lookup(ENV_SESSION_SECRET).filter(|s| !s.is_empty()) {
                Some(secret) if secret.len() < MIN_SESSION_SECRET_LEN => {
                    return Err(ConfigError::Invalid {
                        key: ENV_SESSION_SECRET,
                        value: format!("{} bytes", secret.len()),
                    });
                }
                Some(secret) => (secret.into_bytes(), false),
                None => (base.session_secret, base.session_secret_generated),
            };

        Ok(Self {
            session_ttl,
            browser_session_ttl,
            cookie_secure,
            password_pepper,
            session_secret,
            session_secret_generated,
            ..base
        })
    }

    /// Get session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        i64::try_from(self.session_ttl.as_millis()).unwrap_or(i64::MAX)
    }

    /// Session TTL in whole seconds, for cookie `Max-Age`
    pub fn session_ttl_secs(&self) -> i64 {
        i64::try_from(self.session_ttl.as_secs()).unwrap_or(i64::MAX)
    }

    pub fn browser_session_ttl_secs(&self) -> i64 {
        i64::try_from(self.browser_session_ttl.as_secs()).unwrap_or(i64::MAX)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Cookie attributes for the session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
        }
    }
}

/// A strictly positive whole number, if set
fn positive<F>(lookup: &F, key: &'static str) -> Result<Option<u32>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_optional::<_, u32>(lookup, key)? {
        Some(0) => Err(ConfigError::Invalid {
            key,
            value: "0".to_string(),
        }),
        other => Ok(other),
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("session_cookie_name", &self.session_cookie_name)
            .field("session_ttl", &self.session_ttl)
            .field("browser_session_ttl", &self.browser_session_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .field("session_secret", &"[REDACTED]")
            .field("session_secret_generated", &self.session_secret_generated)
            .field("default_role_name", &self.default_role_name)
            .finish()
    }
}
