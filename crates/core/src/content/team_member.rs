//! Team member profiles shown on the about page.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{ContentKind, ModeratedContent};
use crate::validation::not_blank;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub instagram: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub position: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub role: String,
    #[serde(default)]
    pub additional_role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Display order on the team page; lower first.
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub social_links: SocialLinks,
}

impl ModeratedContent for TeamMember {
    const KIND: ContentKind = ContentKind::TeamMember;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_member_deserializes_with_defaults() {
        let member: TeamMember = serde_json::from_value(serde_json::json!({
            "name": "Grace",
            "position": "Engineer",
            "role": "Backend"
        }))
        .unwrap();
        assert_eq!(member.order, 0);
        assert_eq!(member.social_links, SocialLinks::default());
        assert!(member.check().is_ok());
    }

    #[test]
    fn missing_role_reported() {
        let member: TeamMember = serde_json::from_value(serde_json::json!({
            "name": "Grace",
            "position": "Engineer",
            "role": "",
            "socialLinks": { "linkedin": "https://linkedin.test/grace" }
        }))
        .unwrap();
        assert_eq!(member.social_links.linkedin, "https://linkedin.test/grace");
        assert!(member.check().unwrap_err().mentions("role"));
    }
}
