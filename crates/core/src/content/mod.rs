//! Moderatable content kinds and the record envelope they share.
//!
//! Each kind is a plain field schema ([`Project`], [`TeamMember`],
//! [`Testimonial`]) implementing [`ModeratedContent`]. The moderation
//! fields (`id`, `status`, `featured`, timestamps) live once in
//! [`Moderated`] and are never taken from caller input.

pub mod project;
pub mod team_member;
pub mod testimonial;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{EntityId, Timestamp};
use crate::moderation::ModerationStatus;
use crate::validation::FieldViolations;

pub use project::Project;
pub use team_member::{SocialLinks, TeamMember};
pub use testimonial::Testimonial;

/// The collections content can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Project,
    TeamMember,
    Testimonial,
}

impl ContentKind {
    /// Collection name used in URLs and as the table name.
    pub fn collection(self) -> &'static str {
        match self {
            ContentKind::Project => "projects",
            ContentKind::TeamMember => "teams",
            ContentKind::Testimonial => "testimonials",
        }
    }

    /// Human-readable entity name used in error messages.
    pub fn entity_name(self) -> &'static str {
        match self {
            ContentKind::Project => "Project",
            ContentKind::TeamMember => "TeamMember",
            ContentKind::Testimonial => "Testimonial",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// A field schema subject to the moderation workflow.
pub trait ModeratedContent:
    Validate + Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static
{
    const KIND: ContentKind;

    /// Run every schema check, collecting all violations.
    fn check(&self) -> Result<(), FieldViolations> {
        self.validate().map_err(FieldViolations::from)
    }
}

/// A stored content record: moderation envelope plus kind-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moderated<T> {
    pub id: EntityId,
    pub status: ModerationStatus,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(flatten)]
    pub content: T,
}

/// Caller input for a new record.
///
/// Only `featured` is taken from the envelope; `status`, `id` and the
/// timestamps in the payload are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission<T> {
    #[serde(default)]
    pub featured: bool,
    #[serde(flatten)]
    pub content: T,
}

impl<T> Submission<T> {
    pub fn new(content: T) -> Self {
        Self {
            featured: false,
            content,
        }
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_match_route_names() {
        let names: Vec<_> = [
            ContentKind::Project,
            ContentKind::TeamMember,
            ContentKind::Testimonial,
        ]
        .iter()
        .map(|k| k.collection())
        .collect();
        assert_eq!(names, vec!["projects", "teams", "testimonials"]);
    }

    #[test]
    fn submission_ignores_envelope_fields() {
        let raw = serde_json::json!({
            "name": "Ada",
            "position": "CTO",
            "company": "Acme",
            "country": "UK",
            "text": "Great service and fast delivery",
            "status": "approved",
            "id": "not-a-uuid",
            "featured": true
        });
        let submission: Submission<Testimonial> = serde_json::from_value(raw).unwrap();
        assert!(submission.featured);
        assert_eq!(submission.content.name, "Ada");
    }

    #[test]
    fn record_serializes_flat_camel_case() {
        let now = chrono::Utc::now();
        let record = Moderated {
            id: uuid::Uuid::now_v7(),
            status: ModerationStatus::Pending,
            featured: false,
            created_at: now,
            updated_at: now,
            content: Testimonial {
                name: "Ada".into(),
                position: "CTO".into(),
                company: "Acme".into(),
                country: "UK".into(),
                image: None,
                rating: 4,
                text: "Great service and fast delivery".into(),
            },
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["rating"], 4);
        assert!(json["createdAt"].is_string());
        assert!(json.get("content").is_none());

        let back: Moderated<Testimonial> = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
