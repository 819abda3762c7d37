//! PostgreSQL Repository Implementations
//!
//! Expected layout (see `database/schema.sql`):
//! - `roles(role_id, role_name, description)`
//! - `users(user_id, user_name, password_hash, role_id, active)`
//! - `user_sessions(token, user_id, expires_at)`

use chrono::{DateTime, Utc};
use sqlx::PgConnection;

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
use crate::infra::connection::PgConnectionProvider;

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    provider: PgConnectionProvider,
}

impl PgAuthRepository {
    pub fn new(provider: PgConnectionProvider) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &PgConnectionProvider {
        &self.provider
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let mut tx = self.provider.begin().await?;

        let role_id = match &user.role {
            RoleAssignment::Existing(role_id) => *role_id,
            RoleAssignment::Create(role) => insert_role(&mut *tx, role).await?,
        };

        let user_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (user_name, password_hash, role_id, active)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id
            "#,
        )
        .bind(user.user_name.as_str())
        .bind(user.password.as_phc_string())
        .bind(role_id.value())
        .bind(user.active)
        .fetch_one(&mut *tx)
        .await?;

        // Dropping `tx` on any error above rolls back the role insert too
        tx.commit().await?;

        Ok(User {
            user_id: UserId::from_raw(user_id),
            user_name: user.user_name.clone(),
            password: user.password.clone(),
            role_id,
            active: user.active,
        })
    }

    async fn update_password(
        &self,
        user_id: UserId,
        password: &UserPassword,
    ) -> AuthResult<bool> {
        let mut conn = self.provider.acquire().await?;

        let updated = sqlx::query("UPDATE users SET password_hash = $1 WHERE user_id = $2")
            .bind(password.as_phc_string())
            .bind(user_id.value())
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(updated > 0)
    }

    async fn find_active_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let mut conn = self.provider.acquire().await?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, user_name, password_hash, role_id, active
            FROM users
            WHERE user_name = $1 AND active = TRUE
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_user_name_by_id(&self, user_id: UserId) -> AuthResult<Option<UserName>> {
        let mut conn = self.provider.acquire().await?;

        let name = sqlx::query_scalar::<_, String>("SELECT user_name FROM users WHERE user_id = $1")
            .bind(user_id.value())
            .fetch_optional(&mut *conn)
            .await?;

        Ok(name.map(UserName::from_db))
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let mut conn = self.provider.acquire().await?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE user_name = $1)",
        )
        .bind(user_name.as_str())
        .fetch_one(&mut *conn)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Role Repository Implementation
// ============================================================================

impl RoleRepository for PgAuthRepository {
    async fn find_by_name(&self, role_name: &RoleName) -> AuthResult<Option<Role>> {
        let mut conn = self.provider.acquire().await?;

        let row = sqlx::query_as::<_, RoleRow>(
            "SELECT role_id, role_name, description FROM roles WHERE role_name = $1",
        )
        .bind(role_name.as_str())
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(RoleRow::into_role))
    }

    async fn create(&self, role: &NewRole) -> AuthResult<Role> {
        let mut conn = self.provider.acquire().await?;
        let role_id = insert_role(&mut *conn, role).await?;

        Ok(Role {
            role_id,
            role_name: role.role_name.clone(),
            description: role.description.clone(),
        })
    }
}

async fn insert_role(conn: &mut PgConnection, role: &NewRole) -> AuthResult<RoleId> {
    let role_id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO roles (role_name, description) VALUES ($1, $2) RETURNING role_id",
    )
    .bind(role.role_name.as_str())
    .bind(role.description.as_deref())
    .fetch_one(&mut *conn)
    .await?;

    Ok(RoleId::from_raw(role_id))
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl UserSessionRepository for PgAuthRepository {
    async fn replace_for_user(&self, session: &UserSession) -> AuthResult<()> {
        let mut tx = self.provider.begin().await?;

        // Serialises concurrent issues for the same user
        let owner = sqlx::query_scalar::<_, i32>(
            "SELECT user_id FROM users WHERE user_id = $1 FOR UPDATE",
        )
        .bind(session.user_id.value())
        .fetch_optional(&mut *tx)
        .await?;

        if owner.is_none() {
            return Err(AuthError::UserNotFound);
        }

        sqlx::query("DELETE FROM user_sessions WHERE user_id = $1")
            .bind(session.user_id.value())
            .execute(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO user_sessions (token, user_id, expires_at) VALUES ($1, $2, $3)")
            .bind(session.token.as_str())
            .bind(session.user_id.value())
            .bind(session.expires_at)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_user_id(
        &self,
        token: &SessionToken,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<UserId>> {
        let mut conn = self.provider.acquire().await?;

        let user_id = sqlx::query_scalar::<_, i32>(
            "SELECT user_id FROM user_sessions WHERE token = $1 AND expires_at > $2",
        )
        .bind(token.as_str())
        .bind(now)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user_id.map(UserId::from_raw))
    }

    async fn delete(&self, token: &SessionToken) -> AuthResult<bool> {
        let mut conn = self.provider.acquire().await?;

        let deleted = sqlx::query("DELETE FROM user_sessions WHERE token = $1")
            .bind(token.as_str())
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn cleanup_expired(&self, now: DateTime<Utc>) -> AuthResult<u64> {
        let mut conn = self.provider.acquire().await?;

        let deleted = sqlx::query("DELETE FROM user_sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Database Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i32,
    user_name: String,
    password_hash: String,
    role_id: i32,
    active: bool,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_raw(self.user_id),
            user_name: UserName::from_db(self.user_name),
            password: UserPassword::from_db(self.password_hash),
            role_id: RoleId::from_raw(self.role_id),
            active: self.active,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RoleRow {
    role_id: i32,
    role_name: String,
    description: Option<String>,
}

impl RoleRow {
    fn into_role(self) -> Role {
        Role {
            role_id: RoleId::from_raw(self.role_id),
            role_name: RoleName::from_db(self.role_name),
            description: self.description,
        }
    }
}
