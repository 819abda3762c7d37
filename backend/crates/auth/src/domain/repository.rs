//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer; each call is one round trip to the store.

use chrono::{DateTime, Utc};

use crate::domain::entity::{
    role::{NewRole, Role},
    user::{NewUser, User},
    user_session::UserSession,
};
use crate::domain::value_object::{
    role_name::RoleName, session_token::SessionToken, user_id::UserId, user_name::UserName,
    user_password::UserPassword,
};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return it with its assigned id
    ///
    /// With [`RoleAssignment::Create`](crate::domain::entity::user::RoleAssignment)
    /// the role is inserted in the same transaction.
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Replace a user's stored hash; returns whether the user exists
    async fn update_password(
        &self,
        user_id: UserId,
        password: &UserPassword,
    ) -> AuthResult<bool>;

    /// Find an *active* user by exact (case-sensitive) name
    ///
    /// Absent and inactive users both yield `None`.
    async fn find_active_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Name of the user with this id, active or not
    async fn find_user_name_by_id(&self, user_id: UserId) -> AuthResult<Option<UserName>>;

    /// Whether any user (active or not) has this name
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;
}

/// Role repository trait
#[trait_variant::make(RoleRepository: Send)]
pub trait LocalRoleRepository {
    async fn find_by_name(&self, role_name: &RoleName) -> AuthResult<Option<Role>>;

    async fn create(&self, role: &NewRole) -> AuthResult<Role>;
}

/// Session repository trait
#[trait_variant::make(UserSessionRepository: Send)]
pub trait LocalUserSessionRepository {
    /// Atomically delete every session of `session.user_id` and insert `session`
    async fn replace_for_user(&self, session: &UserSession) -> AuthResult<()>;

    /// Owner of `token` if the row exists and expires after `now`
    async fn find_user_id(
        &self,
        token: &SessionToken,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<UserId>>;

    /// Delete a session; returns whether a row was deleted
    async fn delete(&self, token: &SessionToken) -> AuthResult<bool>;

    /// Delete every session expiring at or before `now`; returns rows removed
    async fn cleanup_expired(&self, now: DateTime<Utc>) -> AuthResult<u64>;
}
