//! Integration tests for the HTTP Lead API client
//!
//! Tests cover:
//! - Request shape (paths, methods, bodies, headers)
//! - Response envelopes
//! - Error status mapping
//! - Driving the leads store through the client

use std::{sync::Arc, time::Duration};

use application::{ApplicationError, LeadApiPort, LeadsStore};
use domain::{DomainError, LeadId, LeadStatus, NewLead};
use infrastructure::{ClientConfig, HttpLeadApiClient, X_REQUEST_ID};
use secrecy::SecretString;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, header_exists, method, path},
};

fn lead_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "firstName": "Jorge",
        "lastName": "Ruiz",
        "email": "jorge.ruiz@email.com",
        "linkedin": "https://linkedin.com/in/jorge-ruiz",
        "visasInterested": ["O-1"],
        "additionalInfo": "Looking for visa assistance for tech role",
        "status": status,
        "submittedAt": "02/02/2024, 2:45 PM",
        "country": "Mexico"
    })
}

fn client(server: &MockServer) -> HttpLeadApiClient {
    HttpLeadApiClient::new(server.uri(), Duration::from_secs(5), None).unwrap()
}

fn admin_client(server: &MockServer) -> HttpLeadApiClient {
    HttpLeadApiClient::new(
        server.uri(),
        Duration::from_secs(5),
        Some(SecretString::from("admin-key")),
    )
    .unwrap()
}

// ============================================================================
// Request Shape Tests
// ============================================================================

mod request_tests {
    use super::*;

    #[tokio::test]
    async fn list_unwraps_leads_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leads"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "leads": [lead_json("1", "PENDING"), lead_json("2", "REACHED_OUT")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let leads = client(&server).list_leads().await.unwrap();
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[1].status, LeadStatus::ReachedOut);
    }

    #[tokio::test]
    async fn every_request_carries_a_request_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leads"))
            .and(header_exists(X_REQUEST_ID))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "leads": [] })))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client(&server).list_leads().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn admin_key_is_sent_as_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leads/1"))
            .and(header("authorization", "Bearer admin-key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "lead": lead_json("1", "PENDING") })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let lead = admin_client(&server)
            .get_lead(&LeadId::new("1"))
            .await
            .unwrap();
        assert_eq!(lead.first_name, "Jorge");
    }

    #[tokio::test]
    async fn create_posts_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/leads"))
            .and(body_json(json!({
                "firstName": "John",
                "lastName": "Doe",
                "email": "john@example.com",
                "linkedin": "https://linkedin.com/in/johndoe",
                "visasInterested": ["O-1"],
                "additionalInfo": "help",
                "country": "US"
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({ "lead": lead_json("42", "PENDING") })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let new_lead = NewLead {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            linkedin: "https://linkedin.com/in/johndoe".to_string(),
            visas_interested: vec!["O-1".to_string()],
            resume_url: None,
            additional_info: "help".to_string(),
            country: "US".to_string(),
        };
        let lead = client(&server).create_lead(new_lead).await.unwrap();
        assert_eq!(lead.id.as_str(), "42");
    }

    #[tokio::test]
    async fn lead_id_is_percent_encoded_in_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leads/legacy%2F7%3Fx"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "lead": lead_json("legacy/7?x", "PENDING") })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let lead = client(&server)
            .get_lead(&LeadId::new("legacy/7?x"))
            .await
            .unwrap();
        assert_eq!(lead.id.as_str(), "legacy/7?x");
    }

    #[tokio::test]
    async fn update_status_puts_status_literal() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/leads/7"))
            .and(body_json(json!({ "status": "REACHED_OUT" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "lead": lead_json("7", "REACHED_OUT") })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let lead = client(&server)
            .update_status(&LeadId::new("7"), LeadStatus::ReachedOut)
            .await
            .unwrap();
        assert_eq!(lead.status, LeadStatus::ReachedOut);
    }

    #[tokio::test]
    async fn clear_returns_count() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/leads/clear"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "All leads cleared successfully",
                "count": 8
            })))
            .mount(&server)
            .await;

        assert_eq!(client(&server).clear_all().await.unwrap(), 8);
    }

    #[tokio::test]
    async fn health_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "status": "ok", "version": "1.0.0" })),
            )
            .mount(&server)
            .await;

        let health = client(&server).health().await.unwrap();
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn client_from_config_uses_base_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leads"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "leads": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig {
            base_url: format!("{}/", server.uri()),
            ..ClientConfig::default()
        };
        let client = HttpLeadApiClient::from_config(&config).unwrap();
        assert!(client.list_leads().await.unwrap().is_empty());
    }
}

// ============================================================================
// Error Mapping Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[tokio::test]
    async fn not_found_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leads/999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": "Lead not found",
                "code": "not_found"
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .get_lead(&LeadId::new("999"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(ref m) if m == "Lead not found"));
    }

    #[tokio::test]
    async fn missing_field_maps_to_domain_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/leads"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "Missing required field: email",
                "code": "bad_request"
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .create_lead(NewLead::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::MissingField(ref f)) if f == "email"
        ));
    }

    #[tokio::test]
    async fn unauthorized_is_an_external_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leads"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "Missing Authorization header",
                "code": "unauthorized"
            })))
            .mount(&server)
            .await;

        let err = client(&server).list_leads().await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(ref m) if m.contains("Missing Authorization header")));
    }

    #[tokio::test]
    async fn server_error_without_body_uses_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leads"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server).list_leads().await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn unreachable_server_is_external_error() {
        let client =
            HttpLeadApiClient::new("http://127.0.0.1:9", Duration::from_millis(500), None).unwrap();
        let err = client.list_leads().await.unwrap_err();
        assert!(err.is_retryable());
    }
}

// ============================================================================
// Store Over HTTP Tests
// ============================================================================

mod store_tests {
    use super::*;

    #[tokio::test]
    async fn store_fetch_through_http_client() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leads"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "leads": [lead_json("1", "PENDING")]
            })))
            .mount(&server)
            .await;

        let store = LeadsStore::new(Arc::new(client(&server)));
        store.fetch_leads().await;

        assert_eq!(store.filtered_leads().len(), 1);
        assert!(store.error().is_none());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn store_records_http_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leads"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let store = LeadsStore::new(Arc::new(client(&server)));
        store.fetch_leads().await;

        assert!(store.leads().is_empty());
        assert!(store.error().is_some());
        assert!(!store.is_loading());
    }
}
