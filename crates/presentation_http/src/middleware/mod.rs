//! HTTP middleware components

pub mod auth;
pub mod request_id;

pub use auth::{AdminAuth, AdminAuthLayer};
pub use request_id::{RequestId, RequestIdLayer, RequestIdService};
