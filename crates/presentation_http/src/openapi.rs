//! OpenAPI documentation
//!
//! Serves the generated document at `/api-docs/openapi.json` and Swagger UI
//! under `/swagger-ui`.

// utoipa derive output trips this lint
#![allow(clippy::needless_for_each)]

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, state::AppState};

/// Path of the generated OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI documentation for the lead intake API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lead Intake API",
        description = "Immigration-assessment lead submission and admin review"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "leads", description = "Lead submission and administration")
    ),
    paths(
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::leads::list_leads,
        handlers::leads::create_lead,
        handlers::leads::get_lead,
        handlers::leads::update_lead_status,
        handlers::leads::clear_leads,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::health::StorageStatus,
            handlers::leads::CreateLeadRequest,
            handlers::leads::VisasField,
            handlers::leads::UpdateStatusRequest,
            handlers::leads::LeadsResponse,
            handlers::leads::LeadResponse,
            handlers::leads::ClearLeadsResponse,
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon)
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Registers the admin bearer scheme referenced by protected paths
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

/// Routes serving the OpenAPI document and Swagger UI
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}
