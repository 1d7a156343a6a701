//! In-process storage backends.
//!
//! Used by the API integration tests and by `STORE_BACKEND=memory` for
//! local runs without Postgres. Data lives only as long as the process.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use creative_hub_core::content::{ModeratedContent, Moderated};
use creative_hub_core::moderation::{ModerationStatus, StatusFilter};
use creative_hub_core::ports::{ModerationStore, RoleResolver, StoreError};
use creative_hub_core::roles::Role;
use creative_hub_core::types::{EntityId, Timestamp};

/// [`ModerationStore`] holding records in insertion order.
pub struct MemoryModerationStore<T> {
    records: RwLock<Vec<Moderated<T>>>,
}

impl<T> Default for MemoryModerationStore<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T> MemoryModerationStore<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<T: ModeratedContent> ModerationStore<T> for MemoryModerationStore<T> {
    async fn list(&self, filter: StatusFilter) -> Result<Vec<Moderated<T>>, StoreError> {
        let records = self.records.read().await;
        let mut matching: Vec<Moderated<T>> = records
            .iter()
            .rev()
            .filter(|r| filter.matches(r.status))
            .cloned()
            .collect();
        // Stable sort keeps reverse insertion order for equal timestamps.
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn insert(&self, record: &Moderated<T>) -> Result<(), StoreError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn set_status(
        &self,
        id: EntityId,
        status: ModerationStatus,
        updated_at: Timestamp,
    ) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.status = status;
                record.updated_at = updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: EntityId) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }
}

/// [`RoleResolver`] backed by a map of email to role.
#[derive(Default)]
pub struct MemoryRoleResolver {
    roles: RwLock<HashMap<String, Role>>,
}

impl MemoryRoleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with every identity in `admins` holding the admin role.
    pub fn with_admins<I, S>(admins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = admins
            .into_iter()
            .map(|email| (email.into(), Role::Admin))
            .collect();
        Self {
            roles: RwLock::new(roles),
        }
    }
}

#[async_trait]
impl RoleResolver for MemoryRoleResolver {
    async fn resolve_role(&self, identity: &str) -> Result<Role, StoreError> {
        Ok(self
            .roles
            .read()
            .await
            .get(identity)
            .copied()
            .unwrap_or_default())
    }

    async fn assign_role(&self, identity: &str, role: Role) -> Result<(), StoreError> {
        self.roles.write().await.insert(identity.to_string(), role);
        Ok(())
    }
}
