//! Repository for the moderated content tables.
//!
//! One generic implementation serves all three collections; the table name
//! comes from the content kind.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use creative_hub_core::content::{ModeratedContent, Moderated};
use creative_hub_core::moderation::{ModerationStatus, StatusFilter};
use creative_hub_core::ports::{ModerationStore, StoreError};
use creative_hub_core::types::{EntityId, Timestamp};

use super::unavailable;
use crate::models::moderated::{decode_rows, ModeratedRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, status, featured, content, created_at, updated_at";

/// Postgres-backed [`ModerationStore`] for content kind `T`.
pub struct ModerationRepo<T> {
    pool: PgPool,
    _kind: PhantomData<fn() -> T>,
}

impl<T: ModeratedContent> ModerationRepo<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _kind: PhantomData,
        }
    }

    fn table() -> &'static str {
        T::KIND.collection()
    }
}

#[async_trait]
impl<T: ModeratedContent> ModerationStore<T> for ModerationRepo<T> {
    async fn list(&self, filter: StatusFilter) -> Result<Vec<Moderated<T>>, StoreError> {
        let table = Self::table();
        let rows = match filter {
            StatusFilter::All => {
                let query =
                    format!("SELECT {COLUMNS} FROM {table} ORDER BY created_at DESC, id DESC");
                sqlx::query_as::<_, ModeratedRow>(&query)
                    .fetch_all(&self.pool)
                    .await
            }
            StatusFilter::Only(status) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM {table} WHERE status = $1
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, ModeratedRow>(&query)
                    .bind(status.as_str())
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(unavailable)?;

        Ok(decode_rows(rows))
    }

    async fn insert(&self, record: &Moderated<T>) -> Result<(), StoreError> {
        let content = serde_json::to_value(&record.content).map_err(|e| StoreError::Corrupt {
            id: record.id,
            reason: e.to_string(),
        })?;
        let query = format!(
            "INSERT INTO {} ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6)",
            Self::table()
        );
        sqlx::query(&query)
            .bind(record.id)
            .bind(record.status.as_str())
            .bind(record.featured)
            .bind(Json(content))
            .bind(record.created_at)
            .bind(record.updated_at)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        Ok(())
    }

    async fn set_status(
        &self,
        id: EntityId,
        status: ModerationStatus,
        updated_at: Timestamp,
    ) -> Result<bool, StoreError> {
        let query = format!(
            "UPDATE {} SET status = $2, updated_at = $3 WHERE id = $1",
            Self::table()
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(updated_at)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: EntityId) -> Result<bool, StoreError> {
        let query = format!("DELETE FROM {} WHERE id = $1", Self::table());
        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        Ok(result.rows_affected() > 0)
    }
}
