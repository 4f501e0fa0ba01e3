//! Application-level errors

use domain::{DomainError, FormErrors};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// The assessment form failed validation
    #[error("Invalid submission: {0}")]
    InvalidSubmission(FormErrors),

    /// Lead storage failed (I/O or corrupt data)
    #[error("Storage error: {0}")]
    Storage(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Shorthand for the lead-not-found case
    #[must_use]
    pub fn lead_not_found() -> Self {
        Self::NotFound("Lead not found".to_string())
    }

    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }

    /// Check if the error was caused by the caller's input
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_client_error(),
            Self::InvalidSubmission(_) => true,
            _ => false,
        }
    }
}
