//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: JSON file lead
//! storage, the HTTP Lead API client, admin key hashing and configuration.

pub mod adapters;
pub mod config;
pub mod http;
pub mod persistence;

pub use adapters::*;
pub use config::{
    AppConfig, ClientConfig, Environment, SecurityConfig, ServerConfig, StorageConfig,
};
pub use http::{HttpLeadApiClient, RemoteHealth, X_REQUEST_ID};
pub use persistence::{JsonFileLeadRepository, demo_leads};
