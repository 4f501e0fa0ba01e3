//! HTTP clients
//!
//! Outgoing requests carry an `X-Request-Id` header for correlation with
//! server-side logs.

mod lead_api_client;

pub use lead_api_client::{HttpLeadApiClient, RemoteHealth};

/// Header name for request correlation ID
pub const X_REQUEST_ID: &str = "x-request-id";
