//! The moderation workflow, written once and parameterized by content kind.
//!
//! [`ModerationService`] enforces the two invariants the stores cannot:
//! new records are always `pending` regardless of input, and every
//! operation is checked against the caller's capabilities first.

use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use uuid::Uuid;

use crate::caller::{authorize, Caller, Capability};
use crate::content::{ModeratedContent, Moderated, Submission};
use crate::error::CoreError;
use crate::moderation::{validate_transition_target, ModerationStatus, StatusFilter};
use crate::ports::{ModerationStore, StoreError};
use crate::types::{EntityId, Timestamp};

pub struct ModerationService<T: ModeratedContent> {
    store: Arc<dyn ModerationStore<T>>,
}

impl<T: ModeratedContent> Clone for ModerationService<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: ModeratedContent> ModerationService<T> {
    pub fn new(store: Arc<dyn ModerationStore<T>>) -> Self {
        Self { store }
    }

    /// List records matching `filter`, newest first.
    ///
    /// Anyone may list approved content; every other filter needs an admin.
    pub async fn list_by_status(
        &self,
        caller: &Caller,
        filter: StatusFilter,
    ) -> Result<Vec<Moderated<T>>, CoreError> {
        authorize(caller, Capability::List(filter))?;

        self.store.list(filter).await.map_err(|e| {
            tracing::warn!(kind = %T::KIND, filter = %filter, error = %e, "Listing failed");
            CoreError::Retrieval(e.to_string())
        })
    }

    /// Validate and persist a new record as `pending`.
    pub async fn create(
        &self,
        caller: &Caller,
        submission: Submission<T>,
    ) -> Result<Moderated<T>, CoreError> {
        authorize(caller, Capability::Submit)?;
        submission.content.check().map_err(CoreError::InvalidFields)?;

        let now = now();
        let record = Moderated {
            id: Uuid::now_v7(),
            status: ModerationStatus::Pending,
            featured: submission.featured,
            created_at: now,
            updated_at: now,
            content: submission.content,
        };

        self.store.insert(&record).await.map_err(internal)?;

        tracing::info!(
            kind = %T::KIND,
            id = %record.id,
            submitted_by = ?caller.identity,
            "Content submitted for review"
        );

        Ok(record)
    }

    /// Move a record to `approved` or `rejected`.
    ///
    /// The current status is not checked, so decisions can be revised and
    /// re-applying the same status succeeds.
    pub async fn transition(
        &self,
        caller: &Caller,
        id: EntityId,
        target: ModerationStatus,
    ) -> Result<bool, CoreError> {
        authorize(caller, Capability::Moderate)?;
        validate_transition_target(target)?;

        let updated = self
            .store
            .set_status(id, target, now())
            .await
            .map_err(internal)?;
        if !updated {
            return Err(self.not_found(id));
        }

        tracing::info!(
            kind = %T::KIND,
            id = %id,
            status = %target,
            operator = ?caller.identity,
            "Content status changed"
        );

        Ok(true)
    }

    /// Permanently delete a record.
    pub async fn delete(&self, caller: &Caller, id: EntityId) -> Result<bool, CoreError> {
        authorize(caller, Capability::Moderate)?;

        let deleted = self.store.delete(id).await.map_err(internal)?;
        if !deleted {
            return Err(self.not_found(id));
        }

        tracing::info!(kind = %T::KIND, id = %id, operator = ?caller.identity, "Content deleted");

        Ok(true)
    }

    fn not_found(&self, id: EntityId) -> CoreError {
        CoreError::NotFound {
            entity: T::KIND.entity_name(),
            id,
        }
    }
}

/// Current time at the microsecond precision Postgres stores, so a record
/// returned from `create` equals the same record read back later.
fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

fn internal(err: StoreError) -> CoreError {
    CoreError::Internal(err.to_string())
}
