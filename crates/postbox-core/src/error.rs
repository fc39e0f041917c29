//! Domain-level error types.

use thiserror::Error;

/// Domain errors surfaced by the post service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// Not-found error for a post id.
    pub fn post_not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity_type: "Post",
            id: id.into(),
        }
    }
}
