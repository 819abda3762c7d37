//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    role::{NewRole, Role},
    user::{NewUser, RoleAssignment, User},
    user_session::UserSession,
};
pub use repository::{RoleRepository, UserRepository, UserSessionRepository};
