//! Role Entity

use crate::domain::value_object::{role_id::RoleId, role_name::RoleName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub role_id: RoleId,
    pub role_name: RoleName,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub role_name: RoleName,
    pub description: Option<String>,
}
