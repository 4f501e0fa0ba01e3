//! HTTP adapter for the Lead API
//!
//! Talks to a running lead intake server. Every request carries a fresh
//! `X-Request-Id` so client and server logs can be correlated, and the admin
//! key (when configured) as a bearer token.

use std::time::Duration;

use application::{error::ApplicationError, ports::LeadApiPort};
use async_trait::async_trait;
use domain::{DomainError, Lead, LeadId, LeadStatus, NewLead};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::X_REQUEST_ID;
use crate::config::ClientConfig;

const MISSING_FIELD_PREFIX: &str = "Missing required field: ";

#[derive(Deserialize)]
struct LeadsBody {
    leads: Vec<Lead>,
}

#[derive(Deserialize)]
struct LeadBody {
    lead: Lead,
}

#[derive(Deserialize)]
struct ClearBody {
    count: usize,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Server health as reported by `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteHealth {
    pub status: String,
    pub version: String,
}

/// Lead API client over HTTP
pub struct HttpLeadApiClient {
    client: Client,
    base_url: Url,
    admin_key: Option<SecretString>,
}

impl std::fmt::Debug for HttpLeadApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpLeadApiClient")
            .field("base_url", &self.base_url())
            .field("authenticated", &self.admin_key.is_some())
            .finish_non_exhaustive()
    }
}

impl HttpLeadApiClient {
    /// Create a client for the server at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL or the
    /// underlying reqwest client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        admin_key: Option<SecretString>,
    ) -> Result<Self, ApplicationError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("leadintake/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApplicationError::Configuration(format!("HTTP client: {e}")))?;

        let base_url: String = base_url.into();
        let base_url = Url::parse(&base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                ApplicationError::Configuration(format!("Invalid Lead API URL: {base_url}"))
            })?;

        Ok(Self {
            client,
            base_url,
            admin_key,
        })
    }

    /// Create a client from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApplicationError> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
            config.admin_key.clone(),
        )
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Fetch the server's health report
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<RemoteHealth, ApplicationError> {
        let response = self.send(self.request(Method::GET, &["health"])).await?;
        parse(response).await
    }

    /// Endpoint URL with each segment percent-encoded onto the base path
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let request_id = Uuid::new_v4();
        let url = self.endpoint(segments);
        debug!(%request_id, %method, path = url.path(), "Lead API request");

        let builder = self
            .client
            .request(method, url)
            .header(X_REQUEST_ID, request_id.to_string());

        match &self.admin_key {
            Some(key) => builder.bearer_auth(key.expose_secret()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApplicationError> {
        builder.send().await.map_err(|e| {
            warn!(error = %e, "Lead API unreachable");
            ApplicationError::ExternalService(format!("Lead API request failed: {e}"))
        })
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApplicationError> {
    let status = response.status();
    if status.is_success() {
        return response.json().await.map_err(|e| {
            ApplicationError::ExternalService(format!("Malformed Lead API response: {e}"))
        });
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map_or_else(|_| status.to_string(), |body| body.error);
    Err(error_for_status(status, message))
}

fn error_for_status(status: StatusCode, message: String) -> ApplicationError {
    match status {
        StatusCode::NOT_FOUND => ApplicationError::NotFound(message),
        StatusCode::BAD_REQUEST => {
            if let Some(field) = message.strip_prefix(MISSING_FIELD_PREFIX) {
                DomainError::MissingField(field.to_string()).into()
            } else if message.starts_with("Invalid status") {
                DomainError::InvalidStatus(message).into()
            } else {
                DomainError::ValidationError(message).into()
            }
        },
        _ => ApplicationError::ExternalService(format!("{status}: {message}")),
    }
}

#[async_trait]
impl LeadApiPort for HttpLeadApiClient {
    #[instrument(skip(self))]
    async fn list_leads(&self) -> Result<Vec<Lead>, ApplicationError> {
        let response = self.send(self.request(Method::GET, &["leads"])).await?;
        let body: LeadsBody = parse(response).await?;
        Ok(body.leads)
    }

    #[instrument(skip(self), fields(lead_id = %id))]
    async fn get_lead(&self, id: &LeadId) -> Result<Lead, ApplicationError> {
        let response = self
            .send(self.request(Method::GET, &["leads", id.as_str()]))
            .await?;
        let body: LeadBody = parse(response).await?;
        Ok(body.lead)
    }

    #[instrument(skip(self, new_lead))]
    async fn create_lead(&self, new_lead: NewLead) -> Result<Lead, ApplicationError> {
        let response = self
            .send(self.request(Method::POST, &["leads"]).json(&new_lead))
            .await?;
        let body: LeadBody = parse(response).await?;
        Ok(body.lead)
    }

    #[instrument(skip(self), fields(lead_id = %id, status = %status))]
    async fn update_status(
        &self,
        id: &LeadId,
        status: LeadStatus,
    ) -> Result<Lead, ApplicationError> {
        let response = self
            .send(
                self.request(Method::PUT, &["leads", id.as_str()])
                    .json(&serde_json::json!({ "status": status })),
            )
            .await?;
        let body: LeadBody = parse(response).await?;
        Ok(body.lead)
    }

    #[instrument(skip(self))]
    async fn clear_all(&self) -> Result<usize, ApplicationError> {
        let response = self
            .send(self.request(Method::DELETE, &["leads", "clear"]))
            .await?;
        let body: ClearBody = parse(response).await?;
        Ok(body.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client =
            HttpLeadApiClient::new("http://localhost:3000/", Duration::from_secs(5), None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn ids_are_encoded_as_one_path_segment() {
        let client =
            HttpLeadApiClient::new("http://localhost:3000/api/", Duration::from_secs(5), None)
                .unwrap();
        let url = client.endpoint(&["leads", "a/b?c#d"]);
        assert_eq!(url.as_str(), "http://localhost:3000/api/leads/a%2Fb%3Fc%23d");
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let result = HttpLeadApiClient::new("localhost:3000", Duration::from_secs(5), None);
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));

        let result = HttpLeadApiClient::new("not a url", Duration::from_secs(5), None);
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn debug_hides_admin_key() {
        let client = HttpLeadApiClient::new(
            "http://localhost:3000",
            Duration::from_secs(5),
            Some(SecretString::from("s3cret")),
        )
        .unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("authenticated: true"));
    }

    #[test]
    fn bad_request_messages_map_to_domain_errors() {
        let err = error_for_status(
            StatusCode::BAD_REQUEST,
            "Missing required field: email".to_string(),
        );
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::MissingField(ref f)) if f == "email"
        ));

        let err = error_for_status(
            StatusCode::BAD_REQUEST,
            "Invalid status. Must be PENDING or REACHED_OUT".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Invalid status. Must be PENDING or REACHED_OUT"
        );
    }

    #[test]
    fn other_statuses_map_to_external_errors() {
        let err = error_for_status(StatusCode::NOT_FOUND, "Lead not found".to_string());
        assert!(matches!(err, ApplicationError::NotFound(_)));

        let err = error_for_status(StatusCode::UNAUTHORIZED, "Unauthorized".to_string());
        assert!(matches!(err, ApplicationError::ExternalService(_)));
        assert!(err.is_retryable());
    }
}
