//! Provision Use Case
//!
//! Idempotently ensures the default administrator role and user exist.
//! Re-running never duplicates either and never overwrites an existing
//! user's password.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{
    role::NewRole,
    user::{NewUser, RoleAssignment},
};
use crate::domain::repository::{RoleRepository, UserRepository};
use crate::domain::value_object::{
    role_id::RoleId,
    role_name::RoleName,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

pub struct ProvisionInput {
    pub user_name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionOutput {
    pub role_id: RoleId,
    pub role_created: bool,
    pub user_created: bool,
}

pub struct ProvisionUseCase<U, R>
where
    U: UserRepository,
    R: RoleRepository,
{
    user_repo: Arc<U>,
    role_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<U, R> ProvisionUseCase<U, R>
where
    U: UserRepository,
    R: RoleRepository,
{
    pub fn new(user_repo: Arc<U>, role_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            role_repo,
            config,
        }
    }

    /// Errors propagate unchanged; callers are expected to abort on failure.
    ///
    /// Input is validated and the password hashed before the first write. A
    /// missing role is inserted together with the user, so a failed run
    /// leaves the store as it found it.
    pub async fn execute(&self, input: ProvisionInput) -> AuthResult<ProvisionOutput> {
        let role_name = RoleName::new(&self.config.default_role_name)
            .map_err(|e| AuthError::Internal(format!("Invalid default role name: {e}")))?;
        let user_name =
            UserName::new(input.user_name).map_err(|e| AuthError::InvalidUserName(e.to_string()))?;

        let existing_role = self.role_repo.find_by_name(&role_name).await?;
        if let Some(role) = &existing_role {
            tracing::info!(role_name = %role_name, role_id = %role.role_id, "Role already exists");
        }

        if self.user_repo.exists_by_user_name(&user_name).await? {
            tracing::info!(user_name = %user_name, "User already exists");
            let (role_id, role_created) = match existing_role {
                Some(role) => (role.role_id, false),
                None => {
                    let role = self.role_repo.create(&self.new_role(role_name)).await?;
                    (role.role_id, true)
                }
            };
            return Ok(ProvisionOutput {
                role_id,
                role_created,
                user_created: false,
            });
        }

        let raw_password = RawPassword::new(input.password)?;
        let password = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let role = match existing_role {
            Some(role) => RoleAssignment::Existing(role.role_id),
            None => RoleAssignment::Create(self.new_role(role_name.clone())),
        };
        let role_created = role.creates_role();

        let user = self
            .user_repo
            .create(&NewUser::active(user_name, password, role))
            .await?;

        if role_created {
            tracing::info!(role_name = %role_name, role_id = %user.role_id, "Role created");
        }
        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            role_name = %role_name,
            "User created"
        );

        Ok(ProvisionOutput {
            role_id: user.role_id,
            role_created,
            user_created: true,
        })
    }

    fn new_role(&self, role_name: RoleName) -> NewRole {
        NewRole {
            role_name,
            description: Some(self.config.default_role_description.clone()),
        }
    }
}
