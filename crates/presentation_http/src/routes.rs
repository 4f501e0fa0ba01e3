//! Route definitions

use axum::{
    Router,
    routing::{delete, get},
};

use crate::{handlers, openapi, state::AppState};

/// Create the router with every API route and the OpenAPI docs
///
/// Admin authentication and the other cross-cutting layers are applied by
/// [`crate::create_app`].
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route(
            "/leads",
            get(handlers::leads::list_leads).post(handlers::leads::create_lead),
        )
        // Static segment, matched ahead of `/leads/{id}`
        .route("/leads/clear", delete(handlers::leads::clear_leads))
        .route(
            "/leads/{id}",
            get(handlers::leads::get_lead).put(handlers::leads::update_lead_status),
        )
        .merge(openapi::create_openapi_routes())
        .with_state(state)
}
