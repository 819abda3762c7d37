//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod issue_session;
pub mod provision;
pub mod service;
pub mod sign_in;
pub mod sign_out;
pub mod user_lookup;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use issue_session::{IssueSessionUseCase, IssuedSession};
pub use provision::{ProvisionInput, ProvisionOutput, ProvisionUseCase};
pub use service::{AuthService, IssuedBrowserSession};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use user_lookup::UserLookupUseCase;
