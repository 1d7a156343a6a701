//! Portfolio project submissions.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{ContentKind, ModeratedContent};
use crate::validation::{no_blank_entries, not_blank};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub category: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub short_description: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[serde(default)]
    #[validate(url(message = "must be a valid URL"))]
    pub live_url: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub client_location: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub completion_date: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "at least one technology is required"),
        custom(function = "no_blank_entries")
    )]
    pub technologies: Vec<String>,
}

impl ModeratedContent for Project {
    const KIND: ContentKind = ContentKind::Project;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_app() -> Project {
        Project {
            title: "Shop App".into(),
            category: "E-commerce".into(),
            short_description: "A store".into(),
            description: "Full store build".into(),
            live_url: "https://x.test".into(),
            client_location: "USA".into(),
            completion_date: "2024-01-01".into(),
            image: None,
            technologies: vec!["React".into()],
        }
    }

    #[test]
    fn complete_project_passes() {
        assert!(shop_app().check().is_ok());
    }

    #[test]
    fn empty_technologies_named_in_violation() {
        let project = Project {
            technologies: vec![],
            ..shop_app()
        };
        let violations = project.check().unwrap_err();
        assert!(violations.mentions("technologies"));
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn blank_fields_reported_with_wire_names() {
        let project = Project {
            title: "  ".into(),
            short_description: String::new(),
            ..shop_app()
        };
        let violations = project.check().unwrap_err();
        assert!(violations.mentions("title"));
        assert!(violations.mentions("shortDescription"));
    }

    #[test]
    fn malformed_live_url_rejected() {
        let project = Project {
            live_url: "not a url".into(),
            ..shop_app()
        };
        assert!(project.check().unwrap_err().mentions("liveUrl"));
    }

    #[test]
    fn absent_fields_surface_as_violations() {
        let project: Project =
            serde_json::from_value(serde_json::json!({"title": "Shop App"})).unwrap();
        let violations = project.check().unwrap_err();
        assert!(violations.mentions("category"));
        assert!(violations.mentions("liveUrl"));
        assert!(violations.mentions("technologies"));
        assert!(!violations.mentions("title"));
    }
}
