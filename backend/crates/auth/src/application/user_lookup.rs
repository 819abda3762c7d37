//! User Lookup Use Case

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

pub struct UserLookupUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserLookupUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Display name for a user id
    pub async fn username_for(&self, user_id: UserId) -> AuthResult<UserName> {
        match self.user_repo.find_user_name_by_id(user_id).await {
            Ok(Some(user_name)) => Ok(user_name),
            Ok(None) => Err(AuthError::UserNotFound),
            Err(e) => {
                tracing::error!(
                    operation = "username_for",
                    user_id = %user_id,
                    error = %e,
                    "User name lookup failed"
                );
                Err(AuthError::UserNotFound)
            }
        }
    }
}
