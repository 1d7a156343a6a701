//! Storage ports implemented by the `db` crate.
//!
//! The service layer only talks to persistence through these traits, so the
//! same moderation logic runs against Postgres in production and the
//! in-memory backend in tests and local development.

use async_trait::async_trait;

use crate::content::{ModeratedContent, Moderated};
use crate::moderation::{ModerationStatus, StatusFilter};
use crate::roles::Role;
use crate::types::{EntityId, Timestamp};

/// Failure reported by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or the query failed.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A stored row could not be decoded into its domain type.
    #[error("corrupt record {id}: {reason}")]
    Corrupt { id: EntityId, reason: String },
}

/// Authoritative collection of one content kind.
#[async_trait]
pub trait ModerationStore<T: ModeratedContent>: Send + Sync {
    /// Records matching `filter`, newest first. Rows that cannot be decoded
    /// are logged and left out rather than failing the whole listing.
    async fn list(&self, filter: StatusFilter) -> Result<Vec<Moderated<T>>, StoreError>;

    /// Persist a new record.
    async fn insert(&self, record: &Moderated<T>) -> Result<(), StoreError>;

    /// Set the status of a record. Returns `false` if no record has `id`.
    async fn set_status(
        &self,
        id: EntityId,
        status: ModerationStatus,
        updated_at: Timestamp,
    ) -> Result<bool, StoreError>;

    /// Permanently remove a record. Returns `false` if no record has `id`.
    async fn delete(&self, id: EntityId) -> Result<bool, StoreError>;
}

/// Maps authenticated identities to roles.
#[async_trait]
pub trait RoleResolver: Send + Sync {
    /// Resolve the role of `identity`; unknown identities are plain users.
    async fn resolve_role(&self, identity: &str) -> Result<Role, StoreError>;

    /// Store `role` for `identity`, replacing any previous assignment.
    async fn assign_role(&self, identity: &str, role: Role) -> Result<(), StoreError>;
}
