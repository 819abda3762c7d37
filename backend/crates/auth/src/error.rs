//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Store errors are classified here and
//! never leave the crate as driver types in a response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::config::ConfigError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Required configuration missing or unparsable
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Store unreachable, rejected the connection, or the pool is exhausted
    #[error("Database connection failed")]
    Connection(#[source] sqlx::Error),

    /// Statement failed after a connection was obtained
    #[error("Database query failed")]
    Query(#[source] sqlx::Error),

    /// Unknown user, inactive user or wrong password (deliberately uniform)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Unknown, expired, swept or malformed session token
    #[error("Session not found or expired")]
    SessionInvalid,

    /// No session was issued
    #[error("Session could not be issued")]
    IssueFailure,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid user name: {0}")]
    InvalidUserName(String),

    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidUserName(_) | AuthError::PasswordValidation(_) => {
                StatusCode::BAD_REQUEST
            }
            AuthError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Config(_)
            | AuthError::Query(_)
            | AuthError::IssueFailure
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidUserName(_) | AuthError::PasswordValidation(_) => {
                ErrorKind::BadRequest
            }
            AuthError::Connection(_) => ErrorKind::ServiceUnavailable,
            AuthError::Config(_)
            | AuthError::Query(_)
            | AuthError::IssueFailure
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a fixed message so configuration values and
    /// driver text stay out of response bodies.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::InvalidCredentials => AppError::unauthorized(self.to_string())
                .with_action("Check your user name and password"),
            AuthError::SessionInvalid => {
                AppError::unauthorized(self.to_string()).with_action("Sign in again")
            }
            AuthError::Connection(_) => AppError::service_unavailable("Service unavailable"),
            AuthError::Config(_) | AuthError::Query(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Whether the failure came from the store rather than from the caller
    pub fn is_store_error(&self) -> bool {
        matches!(self, AuthError::Connection(_) | AuthError::Query(_))
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Connection(e) => {
                tracing::error!(error = %e, "Auth database connection error");
            }
            AuthError::Query(e) => {
                tracing::error!(error = %e, "Auth database query error");
            }
            AuthError::Config(e) => {
                tracing::error!(error = %e, "Auth configuration error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::IssueFailure => {
                tracing::error!("Session issue failed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => AuthError::Connection(err),
            _ => AuthError::Query(err),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlx_classification() {
        assert!(matches!(
            AuthError::from(sqlx::Error::PoolTimedOut),
            AuthError::Connection(_)
        ));
        assert!(matches!(
            AuthError::from(sqlx::Error::PoolClosed),
            AuthError::Connection(_)
        ));
        assert!(matches!(
            AuthError::from(sqlx::Error::RowNotFound),
            AuthError::Query(_)
        ));
        assert!(matches!(
            AuthError::from(sqlx::Error::Protocol("unexpected".into())),
            AuthError::Query(_)
        ));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::SessionInvalid.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::from(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AuthError::IssueFailure.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_kind_matches_status() {
        let errors = [
            AuthError::InvalidCredentials,
            AuthError::SessionInvalid,
            AuthError::IssueFailure,
            AuthError::UserNotFound,
            AuthError::PasswordValidation("too short".into()),
            AuthError::Config(ConfigError::Missing("DB_HOST")),
            AuthError::from(sqlx::Error::PoolClosed),
        ];
        for err in errors {
            assert_eq!(err.kind().status_code(), err.status_code().as_u16());
        }
    }

    #[test]
    fn test_app_error_hides_internals() {
        let err = AuthError::Config(ConfigError::Missing("DB_PASSWORD"));
        let app = err.to_app_error();
        assert!(!app.message().contains("DB_PASSWORD"));

        let err = AuthError::from(sqlx::Error::Protocol("secret detail".into()));
        assert!(!err.to_app_error().message().contains("secret detail"));
    }

    #[test]
    fn test_store_error_detection() {
        assert!(AuthError::from(sqlx::Error::PoolTimedOut).is_store_error());
        assert!(!AuthError::InvalidCredentials.is_store_error());
    }
}
