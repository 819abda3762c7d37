//! Role Name Value Object

use derive_more::Display;

/// Name of the role every provisioned administrator belongs to
pub const ADMIN_ROLE_NAME: &str = "administrador";

pub const ROLE_NAME_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RoleNameError {
    #[display("Role name cannot be empty")]
    Empty,
    #[display("Role name is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },
}

impl std::error::Error for RoleNameError {}

/// Unique role name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, RoleNameError> {
        let value = input.as_ref().trim();
        if value.is_empty() {
            return Err(RoleNameError::Empty);
        }
        let length = value.chars().count();
        if length > ROLE_NAME_MAX_LENGTH {
            return Err(RoleNameError::TooLong {
                length,
                max: ROLE_NAME_MAX_LENGTH,
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn administrator() -> Self {
        Self(ADMIN_ROLE_NAME.to_string())
    }

    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
