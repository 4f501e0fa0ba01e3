//! Lead intake HTTP presentation layer
//!
//! Exposes the Lead API over axum, with admin key authentication, request
//! IDs, request tracing and OpenAPI documentation.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::{
    Router,
    http::{HeaderValue, Method},
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::warn;

pub use error::{ApiError, ErrorResponse, set_expose_internal_errors};
pub use middleware::{AdminAuthLayer, RequestId, RequestIdLayer};
pub use routes::create_router;
pub use state::AppState;

/// Build the complete application: routes plus every middleware layer
///
/// Layers, outermost first: request ID, tracing, CORS, body limit, admin auth.
pub fn create_app(state: AppState) -> Router {
    let server = state.config.server.clone();
    let auth = AdminAuthLayer::new(std::sync::Arc::clone(&state.admin_keys));

    create_router(state)
        .layer(auth)
        .layer(RequestBodyLimitLayer::new(server.max_body_size_json_bytes))
        .layer(cors_layer(&server))
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer)
}

/// CORS policy: permissive with no configured origins, otherwise restricted
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse()
                .inspect_err(|_| warn!(%origin, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
