//! Shared query parameter types for API handlers.

use creative_hub_core::moderation::StatusFilter;
use serde::Deserialize;

use crate::error::AppError;

/// `?status=` on collection listings.
///
/// Accepts `pending`, `approved`, `rejected` or `all`; omitted means
/// `approved`, which is the only filter open to anonymous callers.
#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

impl StatusQuery {
    pub fn filter(&self) -> Result<StatusFilter, AppError> {
        match self.status.as_deref() {
            None | Some("") => Ok(StatusFilter::default()),
            Some(raw) => raw.parse().map_err(AppError::Core),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use creative_hub_core::moderation::ModerationStatus;

    use super::*;

    fn query(status: Option<&str>) -> StatusQuery {
        StatusQuery {
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn missing_status_defaults_to_approved() {
        assert_eq!(query(None).filter().unwrap(), StatusFilter::PUBLIC);
        assert_eq!(query(Some("")).filter().unwrap(), StatusFilter::PUBLIC);
    }

    #[test]
    fn explicit_status_is_parsed() {
        assert_eq!(
            query(Some("pending")).filter().unwrap(),
            StatusFilter::Only(ModerationStatus::Pending)
        );
        assert_eq!(query(Some("all")).filter().unwrap(), StatusFilter::All);
    }

    #[test]
    fn unknown_status_is_a_validation_error() {
        assert_matches!(query(Some("archived")).filter(), Err(AppError::Core(_)));
    }
}
