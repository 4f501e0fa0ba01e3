//! Lead API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use domain::{Lead, LeadId, NewLead};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::{
    error::{ApiError, ErrorResponse},
    extract::ApiJson,
    state::AppState,
};

/// `visasInterested` as sent by clients: a list, or a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum VisasField {
    Many(Vec<String>),
    One(String),
}

impl Default for VisasField {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl From<VisasField> for Vec<String> {
    fn from(field: VisasField) -> Self {
        match field {
            VisasField::Many(visas) => visas,
            VisasField::One(visa) if visa.is_empty() => Vec::new(),
            VisasField::One(visa) => vec![visa],
        }
    }
}

/// Read `null` as the field's empty value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Create lead request
///
/// Every field defaults to empty, whether absent or `null`, so a missing
/// field is reported by name rather than as a JSON decoding failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateLeadRequest {
    #[schema(example = "John")]
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[schema(example = "Doe")]
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[schema(example = "john.doe@example.com")]
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[schema(example = "https://linkedin.com/in/johndoe")]
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub visas_interested: VisasField,
    pub resume_url: Option<String>,
    #[schema(example = "Looking for visa assistance")]
    #[serde(deserialize_with = "null_as_default")]
    pub additional_info: String,
    #[schema(example = "United States")]
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
}

impl From<CreateLeadRequest> for NewLead {
    fn from(request: CreateLeadRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            linkedin: request.linkedin,
            visas_interested: request.visas_interested.into(),
            resume_url: request.resume_url.filter(|url| !url.is_empty()),
            additional_info: request.additional_info,
            country: request.country,
        }
    }
}

/// Update status request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateStatusRequest {
    /// `PENDING` or `REACHED_OUT`
    #[schema(example = "REACHED_OUT")]
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

/// List response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeadsResponse {
    #[schema(value_type = Vec<Object>)]
    pub leads: Vec<Lead>,
}

/// Single lead response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeadResponse {
    #[schema(value_type = Object)]
    pub lead: Lead,
}

/// Clear-all response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClearLeadsResponse {
    #[schema(example = "All leads cleared successfully")]
    pub message: String,
    /// Number of leads removed
    pub count: usize,
}

/// List every lead in storage order
#[utoipa::path(
    get,
    path = "/leads",
    tag = "leads",
    responses(
        (status = 200, description = "All leads", body = LeadsResponse),
        (status = 401, description = "Missing or invalid admin key", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
#[instrument(skip(state))]
pub async fn list_leads(State(state): State<AppState>) -> Result<Json<LeadsResponse>, ApiError> {
    let leads = state.lead_service.list().await?;
    debug!(count = leads.len(), "Listed leads");
    Ok(Json(LeadsResponse { leads }))
}

/// Submit a new lead
#[utoipa::path(
    post,
    path = "/leads",
    tag = "leads",
    request_body = CreateLeadRequest,
    responses(
        (status = 201, description = "Lead created", body = LeadResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_lead(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateLeadRequest>,
) -> Result<(StatusCode, Json<LeadResponse>), ApiError> {
    let lead = state.lead_service.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(LeadResponse { lead })))
}

/// Get a lead by ID
#[utoipa::path(
    get,
    path = "/leads/{id}",
    tag = "leads",
    params(("id" = String, Path, description = "Lead ID")),
    responses(
        (status = 200, description = "Lead found", body = LeadResponse),
        (status = 401, description = "Missing or invalid admin key", body = ErrorResponse),
        (status = 404, description = "Lead not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
#[instrument(skip(state))]
pub async fn get_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LeadResponse>, ApiError> {
    let lead = state.lead_service.get(&LeadId::new(id)).await?;
    Ok(Json(LeadResponse { lead }))
}

/// Update a lead's status
#[utoipa::path(
    put,
    path = "/leads/{id}",
    tag = "leads",
    params(("id" = String, Path, description = "Lead ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = LeadResponse),
        (status = 400, description = "Invalid status", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin key", body = ErrorResponse),
        (status = 404, description = "Lead not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
#[instrument(skip(state, request))]
pub async fn update_lead_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateStatusRequest>,
) -> Result<Json<LeadResponse>, ApiError> {
    let lead = state
        .lead_service
        .update_status_literal(&LeadId::new(id), &request.status)
        .await?;
    Ok(Json(LeadResponse { lead }))
}

/// Delete every lead
#[utoipa::path(
    delete,
    path = "/leads/clear",
    tag = "leads",
    responses(
        (status = 200, description = "Leads cleared", body = ClearLeadsResponse),
        (status = 401, description = "Missing or invalid admin key", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
#[instrument(skip(state))]
pub async fn clear_leads(
    State(state): State<AppState>,
) -> Result<Json<ClearLeadsResponse>, ApiError> {
    let count = state.lead_service.clear().await?;
    Ok(Json(ClearLeadsResponse {
        message: "All leads cleared successfully".to_string(),
        count,
    }))
}
