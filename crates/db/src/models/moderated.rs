//! Row shape shared by the `projects`, `teams` and `testimonials` tables.

use serde::de::DeserializeOwned;
use sqlx::types::Json;
use sqlx::FromRow;
use creative_hub_core::content::Moderated;
use creative_hub_core::moderation::ModerationStatus;
use creative_hub_core::ports::StoreError;
use creative_hub_core::types::{EntityId, Timestamp};

/// A row from any moderated content table.
#[derive(Debug, Clone, FromRow)]
pub struct ModeratedRow {
    pub id: EntityId,
    pub status: String,
    pub featured: bool,
    pub content: Json<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ModeratedRow {
    /// Decode the row into a domain record of kind `T`.
    pub fn into_record<T: DeserializeOwned>(self) -> Result<Moderated<T>, StoreError> {
        let status: ModerationStatus = self.status.parse().map_err(|e| StoreError::Corrupt {
            id: self.id,
            reason: format!("{e}"),
        })?;
        let content: T = serde_json::from_value(self.content.0).map_err(|e| StoreError::Corrupt {
            id: self.id,
            reason: e.to_string(),
        })?;
        Ok(Moderated {
            id: self.id,
            status,
            featured: self.featured,
            created_at: self.created_at,
            updated_at: self.updated_at,
            content,
        })
    }
}

/// Decode listing rows, dropping any that no longer match `T` or carry an
/// unknown status. Each dropped row is logged with its id so it can be
/// repaired; the remaining records are still served.
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<ModeratedRow>) -> Vec<Moderated<T>> {
    rows.into_iter()
        .filter_map(|row| match row.into_record() {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping undecodable content row");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use creative_hub_core::content::TeamMember;

    use super::*;

    fn row(status: &str, content: serde_json::Value) -> ModeratedRow {
        let now = chrono::Utc::now();
        ModeratedRow {
            id: uuid::Uuid::now_v7(),
            status: status.to_string(),
            featured: true,
            content: Json(content),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn decodes_valid_row() {
        let record: Moderated<TeamMember> = row(
            "approved",
            serde_json::json!({"name": "Grace", "position": "Engineer", "role": "Backend"}),
        )
        .into_record()
        .unwrap();
        assert_eq!(record.status, ModerationStatus::Approved);
        assert!(record.featured);
        assert_eq!(record.content.name, "Grace");
    }

    #[test]
    fn unknown_status_is_corrupt() {
        let content = serde_json::json!({"name": "Grace", "position": "E", "role": "B"});
        let result = row("archived", content).into_record::<TeamMember>();
        assert_matches!(result, Err(StoreError::Corrupt { .. }));
    }

    #[test]
    fn mismatched_content_is_corrupt() {
        let result = row("pending", serde_json::json!({"name": ["not", "a", "string"]}))
            .into_record::<TeamMember>();
        assert_matches!(result, Err(StoreError::Corrupt { .. }));
    }

    #[test]
    fn decode_rows_skips_corrupt_entries() {
        let good = serde_json::json!({"name": "Grace", "position": "Engineer", "role": "Backend"});
        let rows = vec![
            row("approved", good.clone()),
            row("approved", serde_json::json!({"name": 42})),
            row("archived", good),
        ];
        let first_id = rows[0].id;

        let records = decode_rows::<TeamMember>(rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, first_id);
    }
}
