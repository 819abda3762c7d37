//! User Entity

use crate::domain::entity::role::NewRole;
use crate::domain::value_object::{
    role_id::RoleId, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// Stored user
///
/// Only active users are ever loaded for sign-in; `active` is carried so
/// other readers can tell the states apart.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub user_name: UserName,
    pub password: UserPassword,
    pub role_id: RoleId,
    pub active: bool,
}

impl User {
    pub fn can_sign_in(&self) -> bool {
        self.active
    }
}

/// Role a new user is given
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleAssignment {
    Existing(RoleId),
    /// Inserted together with the user; neither row is kept if either fails
    Create(NewRole),
}

impl RoleAssignment {
    pub fn creates_role(&self) -> bool {
        matches!(self, RoleAssignment::Create(_))
    }
}

/// User about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub password: UserPassword,
    pub role: RoleAssignment,
    pub active: bool,
}

impl NewUser {
    pub fn active(user_name: UserName, password: UserPassword, role: RoleAssignment) -> Self {
        Self {
            user_name,
            password,
            role,
            active: true,
        }
    }
}
