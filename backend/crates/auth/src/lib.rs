//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and the `AuthService` facade
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Sign-in with user name + password (Argon2id hashes)
//! - Database-backed session tokens with expiry, one live session per user
//! - Expired sessions swept on every validation
//! - Idempotent provisioning of the default administrator
//!
//! ## Security Model
//! - Unknown user, inactive user and wrong password fail identically
//! - Session tokens carry 512 bits of entropy and are logged by prefix only
//! - Store failures are logged and mapped to the operation's own failure

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::service::AuthService;
pub use error::{AuthError, AuthResult};
pub use infra::{MemoryAuthRepository, PgAuthRepository, PgConnectionProvider};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
