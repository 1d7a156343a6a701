//! Field-level validation results and shared custom validators.
//!
//! Content schemas derive [`validator::Validate`]; this module turns the
//! derive's error map into an ordered list of [`FieldViolation`]s keyed by
//! wire (camelCase) field names, so submitters can show each message next
//! to the offending input.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
    pub message: String,
}

/// All violations found in one submission, sorted by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldViolations(Vec<FieldViolation>);

impl FieldViolations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, rule: &str, message: impl Into<String>) {
        self.0.push(FieldViolation {
            field: field.to_string(),
            rule: rule.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether any violation names `field` (wire name).
    pub fn mentions(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

}

impl fmt::Display for FieldViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl From<ValidationErrors> for FieldViolations {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations = FieldViolations::new();
        for (field, errs) in errors.field_errors() {
            let wire_name = to_camel_case(&field);
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| default_message(&err.code));
                violations.push(&wire_name, &err.code, message);
            }
        }
        violations
            .0
            .sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.rule.cmp(&b.rule)));
        violations
    }
}

fn default_message(code: &str) -> String {
    match code {
        "length" => "has an invalid length".to_string(),
        "range" => "is out of range".to_string(),
        "url" => "must be a valid URL".to_string(),
        "email" => "must be a valid email address".to_string(),
        other => format!("failed the '{other}' check"),
    }
}

/// Convert a Rust field name (`short_description`) to its wire name
/// (`shortDescription`).
pub fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(violation("required", "is required"));
    }
    Ok(())
}

/// Rejects lists containing an empty or whitespace-only entry.
pub fn no_blank_entries(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(violation("blank_entry", "must not contain blank entries"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_conversion() {
        assert_eq!(to_camel_case("short_description"), "shortDescription");
        assert_eq!(to_camel_case("live_url"), "liveUrl");
        assert_eq!(to_camel_case("text"), "text");
    }

    #[test]
    fn not_blank_rejects_whitespace() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
        assert!(not_blank("Shop App").is_ok());
    }

    #[test]
    fn no_blank_entries_checks_every_item() {
        assert!(no_blank_entries(&["React".to_string()]).is_ok());
        assert!(no_blank_entries(&["React".to_string(), " ".to_string()]).is_err());
        assert!(no_blank_entries(&[]).is_ok());
    }

    #[test]
    fn display_joins_field_messages() {
        let mut v = FieldViolations::new();
        v.push("title", "required", "is required");
        v.push("text", "length", "must be at least 10 characters");
        assert_eq!(
            v.to_string(),
            "title: is required; text: must be at least 10 characters"
        );
        assert!(v.mentions("text"));
        assert!(!v.mentions("name"));
    }
}
