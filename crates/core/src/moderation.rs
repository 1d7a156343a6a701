//! Moderation status machine shared by every content kind.
//!
//! Records start as `pending` and move to `approved` or `rejected` through
//! an explicit transition. No state is terminal: an approved record can be
//! rejected later and vice versa, and re-applying the current status is a
//! no-op that still succeeds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status value stored on a record awaiting review.
pub const STATUS_PENDING: &str = "pending";

/// Status value for records visible on the public pages.
pub const STATUS_APPROVED: &str = "approved";

/// Status value for records an operator turned down.
pub const STATUS_REJECTED: &str = "rejected";

/// Filter value meaning "every status".
pub const FILTER_ALL: &str = "all";

/// All valid status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// The moderation status carried by every content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ModerationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ModerationStatus::Pending => STATUS_PENDING,
            ModerationStatus::Approved => STATUS_APPROVED,
            ModerationStatus::Rejected => STATUS_REJECTED,
        }
    }

    /// Whether an operator may move a record into this status.
    ///
    /// `pending` is only ever assigned at creation.
    pub fn is_decision(self) -> bool {
        matches!(self, ModerationStatus::Approved | ModerationStatus::Rejected)
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModerationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(ModerationStatus::Pending),
            STATUS_APPROVED => Ok(ModerationStatus::Approved),
            STATUS_REJECTED => Ok(ModerationStatus::Rejected),
            other => Err(CoreError::Validation(format!(
                "Invalid status '{other}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

/// Which records a listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Only(ModerationStatus),
    All,
}

impl StatusFilter {
    /// The filter used by the public pages.
    pub const PUBLIC: StatusFilter = StatusFilter::Only(ModerationStatus::Approved);

    pub fn matches(self, status: ModerationStatus) -> bool {
        match self {
            StatusFilter::Only(wanted) => wanted == status,
            StatusFilter::All => true,
        }
    }

    /// Whether anonymous visitors may run this listing.
    pub fn is_public(self) -> bool {
        self == Self::PUBLIC
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::Only(status) => status.as_str(),
            StatusFilter::All => FILTER_ALL,
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::PUBLIC
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == FILTER_ALL {
            return Ok(StatusFilter::All);
        }
        s.parse::<ModerationStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| {
                CoreError::Validation(format!(
                    "Invalid status filter '{s}'. Must be one of: {}, {FILTER_ALL}",
                    VALID_STATUSES.join(", ")
                ))
            })
    }
}

/// Validate that `target` is a status an operator may assign.
pub fn validate_transition_target(target: ModerationStatus) -> Result<(), CoreError> {
    if target.is_decision() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot transition to '{target}'. Must be one of: {STATUS_APPROVED}, {STATUS_REJECTED}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn statuses_round_trip_through_strings() {
        for raw in VALID_STATUSES {
            let status: ModerationStatus = raw.parse().unwrap();
            assert_eq!(status.as_str(), *raw);
        }
    }

    #[test]
    fn unknown_status_rejected() {
        let result = "archived".parse::<ModerationStatus>();
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("archived"));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ModerationStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
        let parsed: ModerationStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(parsed, ModerationStatus::Rejected);
    }

    #[test]
    fn filter_all_matches_everything() {
        let filter: StatusFilter = "all".parse().unwrap();
        assert_eq!(filter, StatusFilter::All);
        assert!(filter.matches(ModerationStatus::Pending));
        assert!(filter.matches(ModerationStatus::Approved));
        assert!(filter.matches(ModerationStatus::Rejected));
    }

    #[test]
    fn filter_only_matches_one_status() {
        let filter: StatusFilter = "pending".parse().unwrap();
        assert!(filter.matches(ModerationStatus::Pending));
        assert!(!filter.matches(ModerationStatus::Approved));
    }

    #[test]
    fn invalid_filter_rejected() {
        assert_matches!("everything".parse::<StatusFilter>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn default_filter_is_public() {
        assert!(StatusFilter::default().is_public());
        assert!(!StatusFilter::All.is_public());
        assert!(!StatusFilter::Only(ModerationStatus::Pending).is_public());
    }

    #[test]
    fn only_decisions_are_valid_targets() {
        assert!(validate_transition_target(ModerationStatus::Approved).is_ok());
        assert!(validate_transition_target(ModerationStatus::Rejected).is_ok());
        assert_matches!(
            validate_transition_target(ModerationStatus::Pending),
            Err(CoreError::Validation(_))
        );
    }
}
