//! API error handling
//!
//! Every failure leaves the server as `{error, code, details?}`. Internal
//! details are only attached while exposure is enabled (development), so a
//! production deployment never echoes file paths or storage messages.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use utoipa::ToSchema;

static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Configure whether internal error details are included in responses.
///
/// Set once at startup from `AppConfig::expose_internal_errors`.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    #[schema(example = "Missing required field: email")]
    pub error: String,
    /// Machine-readable error code
    #[schema(example = "bad_request")]
    pub code: String,
    /// Internal details, development only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the response body, hiding internals unless `expose` is set
    #[must_use]
    pub fn body(&self, expose: bool) -> ErrorResponse {
        let (code, error, details) = match self {
            Self::BadRequest(msg) => ("bad_request", msg.clone(), None),
            Self::NotFound(msg) => ("not_found", msg.clone(), None),
            Self::Unauthorized(msg) => (
                "unauthorized",
                if expose {
                    msg.clone()
                } else {
                    "Authentication required".to_string()
                },
                None,
            ),
            Self::ServiceUnavailable(msg) => (
                "service_unavailable",
                if expose {
                    msg.clone()
                } else {
                    "Service temporarily unavailable".to_string()
                },
                None,
            ),
            Self::Internal(msg) => (
                "internal_error",
                INTERNAL_MESSAGE.to_string(),
                expose.then(|| msg.clone()),
            ),
        };

        ErrorResponse {
            error,
            code: code.to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(msg) = &self {
            tracing::error!(error = %msg, "Request failed with internal error");
        }
        (self.status(), Json(self.body(should_expose_details()))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        if err.is_client_error() {
            return Self::BadRequest(err.to_string());
        }
        match err {
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::Domain(e) => Self::NotFound(e.to_string()),
            ApplicationError::ExternalService(msg) => Self::ServiceUnavailable(msg),
            ApplicationError::InvalidSubmission(errors) => Self::BadRequest(errors.to_string()),
            ApplicationError::Storage(msg)
            | ApplicationError::Configuration(msg)
            | ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}
