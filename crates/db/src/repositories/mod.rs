//! Repository layer.
//!
//! Each repository wraps a `PgPool` and implements one of the storage ports
//! from `creative_hub_core::ports`.

pub mod moderation_repo;
pub mod user_repo;

pub use moderation_repo::ModerationRepo;
pub use user_repo::UserRepo;

use creative_hub_core::ports::StoreError;

/// Map a sqlx failure onto the port's error type.
pub(crate) fn unavailable(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "Database error");
    StoreError::Unavailable(err.to_string())
}
