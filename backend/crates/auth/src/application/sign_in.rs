//! Sign In Use Case
//!
//! Authenticates a user name/password pair against the stored hash.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug, Clone)]
pub struct SignInOutput {
    pub user_id: UserId,
    pub user_name: UserName,
}

/// Sign in use case
///
/// Every failure, including store errors, surfaces as
/// [`AuthError::InvalidCredentials`]. Unknown and inactive users still pay
/// for one Argon2 verification so timing does not reveal which names exist.
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let raw_password = RawPassword::for_verification(input.password);

        let Ok(user_name) = UserName::new(input.user_name) else {
            tracing::debug!("Sign-in rejected: malformed user name");
            raw_password.verify_against_dummy();
            return Err(AuthError::InvalidCredentials);
        };

        let user = match self.user_repo.find_active_by_user_name(&user_name).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::debug!(user_name = %user_name, "Sign-in rejected: user not found or inactive");
                raw_password.verify_against_dummy();
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(
                    operation = "authenticate",
                    user_name = %user_name,
                    error = %e,
                    "User lookup failed"
                );
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !user.can_sign_in() || !user.password.verify(&raw_password, self.config.pepper()) {
            tracing::debug!(user_id = %user.user_id, "Sign-in rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        if user.password.needs_rehash() {
            self.upgrade_hash(user.user_id, &raw_password).await;
        }

        tracing::info!(user_id = %user.user_id, "User authenticated");

        Ok(SignInOutput {
            user_id: user.user_id,
            user_name: user.user_name,
        })
    }

    /// Re-hash a verified password with Argon2id; failures only log
    async fn upgrade_hash(&self, user_id: UserId, raw_password: &RawPassword) {
        let password = match UserPassword::from_raw(raw_password, self.config.pepper()) {
            Ok(password) => password,
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "Password re-hash failed");
                return;
            }
        };

        match self.user_repo.update_password(user_id, &password).await {
            Ok(_) => tracing::info!(user_id = %user_id, "Password hash upgraded to Argon2id"),
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "Storing upgraded password hash failed");
            }
        }
    }
}
