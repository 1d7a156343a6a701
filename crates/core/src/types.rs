/// Content records are keyed by time-ordered UUIDs (v7) assigned at creation.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
