//! Repository for the `users` table (role assignments).

use async_trait::async_trait;
use sqlx::PgPool;
use creative_hub_core::ports::{RoleResolver, StoreError};
use creative_hub_core::roles::Role;

use super::unavailable;
use crate::models::user::UserRole;

const COLUMNS: &str = "email, role, created_at, updated_at";

/// Postgres-backed [`RoleResolver`].
pub struct UserRepo {
    pool: PgPool,
}

impl UserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the role row for an email, if one was ever assigned.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, UserRole>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }
}

#[async_trait]
impl RoleResolver for UserRepo {
    async fn resolve_role(&self, identity: &str) -> Result<Role, StoreError> {
        let row = self.find_by_email(identity).await.map_err(unavailable)?;
        Ok(Role::from_label(row.as_ref().map(|r| r.role.as_str())))
    }

    async fn assign_role(&self, identity: &str, role: Role) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO users (email, role) VALUES ($1, $2)
             ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role, updated_at = NOW()",
        )
        .bind(identity)
        .bind(role.as_str())
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;
        Ok(())
    }
}
