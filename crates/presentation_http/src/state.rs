//! Application state shared across handlers

use std::sync::Arc;

use application::LeadService;
use infrastructure::{AdminKeyStore, AppConfig};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Lead API use cases
    pub lead_service: Arc<LeadService>,
    /// Accepted admin bearer keys
    pub admin_keys: Arc<AdminKeyStore>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("admin_keys", &self.admin_keys.len())
            .field("environment", &self.config.environment)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Assemble state from a lead service and loaded configuration
    #[must_use]
    pub fn new(lead_service: Arc<LeadService>, config: AppConfig) -> Self {
        let admin_keys = AdminKeyStore::from_hashes(config.security.admin_keys.iter().cloned());
        Self {
            lead_service,
            admin_keys: Arc::new(admin_keys),
            config: Arc::new(config),
        }
    }
}
