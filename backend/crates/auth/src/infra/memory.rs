//! In-Memory Repository
//!
//! Same contract as the PostgreSQL store, kept in process behind one
//! `RwLock`. Used by the test suites and for running the API without a
//! database. Inspection helpers expose state the traits deliberately hide.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::entity::{
    role::{NewRole, Role},
    user::{NewUser, RoleAssignment, User},
    user_session::UserSession,
};
use crate::domain::repository::{RoleRepository, UserRepository, UserSessionRepository};
use crate::domain::value_object::{
    role_id::RoleId, role_name::RoleName, session_token::SessionToken, user_id::UserId,
    user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct MemoryState {
    roles: BTreeMap<i32, Role>,
    users: BTreeMap<i32, User>,
    sessions: HashMap<String, StoredSession>,
    last_role_id: i32,
    last_user_id: i32,
}

impl MemoryState {
    fn insert_role(&mut self, role: &NewRole) -> Role {
        self.last_role_id += 1;
        let role_id = self.last_role_id;
        let created = Role {
            role_id: RoleId::from_raw(role_id),
            role_name: role.role_name.clone(),
            description: role.description.clone(),
        };
        self.roles.insert(role_id, created.clone());
        created
    }
}

#[derive(Clone, Copy)]
struct StoredSession {
    user_id: UserId,
    expires_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session row exists for `token`, expired or not
    pub async fn contains_token(&self, token: &str) -> bool {
        self.state.read().await.sessions.contains_key(token)
    }

    /// Number of session rows, expired ones included
    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }

    /// Overwrite a session's expiry; returns false if the token is unknown
    pub async fn set_expiry(&self, token: &SessionToken, expires_at: DateTime<Utc>) -> bool {
        match self.state.write().await.sessions.get_mut(token.as_str()) {
            Some(session) => {
                session.expires_at = expires_at;
                true
            }
            None => false,
        }
    }

    /// Flip a user's active flag; returns false if the user is unknown
    pub async fn set_active(&self, user_id: UserId, active: bool) -> bool {
        match self.state.write().await.users.get_mut(&user_id.value()) {
            Some(user) => {
                user.active = active;
                true
            }
            None => false,
        }
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        // Every check runs before the first insert, so a failure writes nothing
        if state.users.values().any(|u| u.user_name == user.user_name) {
            return Err(AuthError::Internal(format!(
                "duplicate user name: {}",
                user.user_name
            )));
        }
        match &user.role {
            RoleAssignment::Existing(role_id) if !state.roles.contains_key(&role_id.value()) => {
                return Err(AuthError::Internal(format!("unknown role: {role_id}")));
            }
            RoleAssignment::Create(role)
                if state.roles.values().any(|r| r.role_name == role.role_name) =>
            {
                return Err(AuthError::Internal(format!(
                    "duplicate role name: {}",
                    role.role_name
                )));
            }
            _ => {}
        }

        let role_id = match &user.role {
            RoleAssignment::Existing(role_id) => *role_id,
            RoleAssignment::Create(role) => state.insert_role(role).role_id,
        };

        state.last_user_id += 1;
        let user_id = state.last_user_id;
        let created = User {
            user_id: UserId::from_raw(user_id),
            user_name: user.user_name.clone(),
            password: user.password.clone(),
            role_id,
            active: user.active,
        };
        state.users.insert(user_id, created.clone());

        Ok(created)
    }

    async fn update_password(
        &self,
        user_id: UserId,
        password: &UserPassword,
    ) -> AuthResult<bool> {
        let mut state = self.state.write().await;
        Ok(match state.users.get_mut(&user_id.value()) {
            Some(user) => {
                user.password = password.clone();
                true
            }
            None => false,
        })
    }

    async fn find_active_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .find(|u| u.active && &u.user_name == user_name)
            .cloned())
    }

    async fn find_user_name_by_id(&self, user_id: UserId) -> AuthResult<Option<UserName>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .get(&user_id.value())
            .map(|u| u.user_name.clone()))
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let state = self.state.read().await;
        Ok(state.users.values().any(|u| &u.user_name == user_name))
    }
}

impl RoleRepository for MemoryAuthRepository {
    async fn find_by_name(&self, role_name: &RoleName) -> AuthResult<Option<Role>> {
        let state = self.state.read().await;
        Ok(state
            .roles
            .values()
            .find(|r| &r.role_name == role_name)
            .cloned())
    }

    async fn create(&self, role: &NewRole) -> AuthResult<Role> {
        let mut state = self.state.write().await;

        if state.roles.values().any(|r| r.role_name == role.role_name) {
            return Err(AuthError::Internal(format!(
                "duplicate role name: {}",
                role.role_name
            )));
        }

        Ok(state.insert_role(role))
    }
}

impl UserSessionRepository for MemoryAuthRepository {
    async fn replace_for_user(&self, session: &UserSession) -> AuthResult<()> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&session.user_id.value()) {
            return Err(AuthError::UserNotFound);
        }
        if state.sessions.contains_key(session.token.as_str()) {
            return Err(AuthError::Internal("duplicate session token".to_string()));
        }

        state.sessions.retain(|_, s| s.user_id != session.user_id);
        state.sessions.insert(
            session.token.as_str().to_string(),
            StoredSession {
                user_id: session.user_id,
                expires_at: session.expires_at,
            },
        );

        Ok(())
    }

    async fn find_user_id(
        &self,
        token: &SessionToken,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<UserId>> {
        let state = self.state.read().await;
        Ok(state
            .sessions
            .get(token.as_str())
            .filter(|s| s.expires_at > now)
            .map(|s| s.user_id))
    }

    async fn delete(&self, token: &SessionToken) -> AuthResult<bool> {
        let mut state = self.state.write().await;
        Ok(state.sessions.remove(token.as_str()).is_some())
    }

    async fn cleanup_expired(&self, now: DateTime<Utc>) -> AuthResult<u64> {
        let mut state = self.state.write().await;
        let before = state.sessions.len();
        state.sessions.retain(|_, s| s.expires_at > now);
        Ok((before - state.sessions.len()) as u64)
    }
}
