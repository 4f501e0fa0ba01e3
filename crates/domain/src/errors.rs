//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required field of a create request is empty or absent
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A status value other than `PENDING` / `REACHED_OUT`
    #[error("Invalid status. Must be PENDING or REACHED_OUT")]
    InvalidStatus(String),

    /// A dashboard filter value that names no status
    #[error("Invalid status filter: {0}")]
    InvalidStatusFilter(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Check if the error is caused by bad client input
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}
