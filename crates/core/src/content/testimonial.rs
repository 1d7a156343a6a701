//! Client testimonials.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{ContentKind, ModeratedContent};
use crate::validation::not_blank;

/// Rating assumed when the submitter leaves the stars untouched.
pub const DEFAULT_RATING: u8 = 5;

/// Shortest accepted testimonial text, in characters.
pub const MIN_TEXT_CHARS: usize = 10;

fn default_rating() -> u8 {
    DEFAULT_RATING
}

/// Non-blank, and at least [`MIN_TEXT_CHARS`] characters once trimmed.
fn testimonial_text(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if value.trim().chars().count() < MIN_TEXT_CHARS {
        let mut err = ValidationError::new("length");
        err.message = Some(Cow::Owned(format!(
            "must be at least {MIN_TEXT_CHARS} characters"
        )));
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub position: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub company: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub country: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: u8,
    #[serde(default)]
    #[validate(custom(function = "testimonial_text"))]
    pub text: String,
}

impl ModeratedContent for Testimonial {
    const KIND: ContentKind = ContentKind::Testimonial;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial(rating: u8, text: &str) -> Testimonial {
        Testimonial {
            name: "Ada".into(),
            position: "CTO".into(),
            company: "Acme".into(),
            country: "UK".into(),
            image: None,
            rating,
            text: text.into(),
        }
    }

    #[test]
    fn four_stars_with_long_text_passes() {
        assert!(testimonial(4, "Great service and fast delivery").check().is_ok());
    }

    #[test]
    fn short_text_names_text_field() {
        let violations = testimonial(4, "Good").check().unwrap_err();
        assert!(violations.mentions("text"));
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn rating_out_of_range_rejected() {
        assert!(testimonial(0, "Great service and fast delivery")
            .check()
            .unwrap_err()
            .mentions("rating"));
        assert!(testimonial(6, "Great service and fast delivery")
            .check()
            .unwrap_err()
            .mentions("rating"));
    }

    #[test]
    fn rating_defaults_to_five() {
        let t: Testimonial = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "position": "CTO",
            "company": "Acme",
            "country": "UK",
            "text": "Great service and fast delivery"
        }))
        .unwrap();
        assert_eq!(t.rating, DEFAULT_RATING);
    }

    #[test]
    fn min_text_constant_matches_rule() {
        let exactly = "a".repeat(MIN_TEXT_CHARS);
        assert!(testimonial(5, &exactly).check().is_ok());
        let short = "a".repeat(MIN_TEXT_CHARS - 1);
        assert!(testimonial(5, &short).check().is_err());
    }

    #[test]
    fn whitespace_text_is_blank() {
        let violations = testimonial(5, &" ".repeat(MIN_TEXT_CHARS)).check().unwrap_err();
        assert!(violations.mentions("text"));
        assert_eq!(violations.to_string(), "text: is required");
    }

    #[test]
    fn padding_does_not_count_towards_length() {
        let violations = testimonial(5, "   Good      ").check().unwrap_err();
        assert!(violations.mentions("text"));
    }
}
