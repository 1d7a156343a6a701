//! Contact page enquiries.
//!
//! Enquiries are validated and handed to operators; they are not part of
//! the moderation workflow and are not persisted.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::validation::{not_blank, FieldViolations};

/// Digits, `+`, `-` and whitespace only.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-\s]+$").expect("valid phone regex"));

fn phone_number(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if PHONE_RE.is_match(value) {
        return Ok(());
    }
    let mut err = ValidationError::new("phone");
    err.message = Some("must be a valid phone number".into());
    Err(err)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactEnquiry {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        email(message = "must be a valid email address")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "phone_number"))]
    pub phone: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

impl ContactEnquiry {
    pub fn check(&self) -> Result<(), FieldViolations> {
        self.validate().map_err(FieldViolations::from)
    }
}
