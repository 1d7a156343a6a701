//! Role assignment rows.

use sqlx::FromRow;
use creative_hub_core::types::Timestamp;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRole {
    pub email: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
