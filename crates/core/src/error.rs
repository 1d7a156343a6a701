use crate::types::EntityId;
use crate::validation::FieldViolations;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// One or more submitted fields failed their schema checks.
    #[error("Validation failed: {0}")]
    InvalidFields(FieldViolations),

    /// The backing store could not be read.
    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
