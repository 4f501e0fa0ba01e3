//! Lead Service - Lead API use cases
//!
//! Validates requests, assigns identity and timestamps, and maps repository
//! outcomes onto application errors. The HTTP layer is a thin shell around it.

use std::sync::Arc;

use async_trait::async_trait;
use domain::{Lead, LeadId, LeadStatus, NewLead, submitted_now};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{LeadApiPort, LeadRepositoryPort},
};

/// Attempts at drawing a fresh ID before giving up
const MAX_ID_ATTEMPTS: usize = 3;

/// Service implementing the Lead API
pub struct LeadService {
    repository: Arc<dyn LeadRepositoryPort>,
}

impl std::fmt::Debug for LeadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadService").finish_non_exhaustive()
    }
}

impl LeadService {
    /// Create a new lead service
    pub fn new(repository: Arc<dyn LeadRepositoryPort>) -> Self {
        Self { repository }
    }

    /// List every lead in storage order
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Lead>, ApplicationError> {
        let leads = self.repository.list().await?;
        debug!(count = leads.len(), "Listed leads");
        Ok(leads)
    }

    /// Create a lead
    ///
    /// Required fields are checked in API order and the first empty one is
    /// reported. The new lead is always `PENDING`.
    #[instrument(skip(self, new_lead))]
    pub async fn create(&self, new_lead: NewLead) -> Result<Lead, ApplicationError> {
        if let Err(e) = new_lead.ensure_complete() {
            warn!(error = %e, "Rejected lead creation");
            return Err(e.into());
        }

        let submitted_at = submitted_now();
        for _ in 0..MAX_ID_ATTEMPTS {
            let lead = Lead::create(LeadId::generate(), new_lead.clone(), submitted_at.clone());
            if self.repository.insert(&lead).await? {
                info!(lead_id = %lead.id, "Lead created");
                return Ok(lead);
            }
            warn!(lead_id = %lead.id, "Generated lead ID already taken, retrying");
        }

        Err(ApplicationError::Internal(
            "Could not allocate a unique lead ID".to_string(),
        ))
    }

    /// Get a lead by ID
    #[instrument(skip(self), fields(lead_id = %id))]
    pub async fn get(&self, id: &LeadId) -> Result<Lead, ApplicationError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(ApplicationError::lead_not_found)
    }

    /// Update the status of a lead from its wire literal
    ///
    /// The status is validated before the lead is looked up, so an invalid
    /// status is reported even for an unknown ID.
    #[instrument(skip(self), fields(lead_id = %id))]
    pub async fn update_status_literal(
        &self,
        id: &LeadId,
        status: &str,
    ) -> Result<Lead, ApplicationError> {
        let status: LeadStatus = status.parse()?;
        self.set_status(id, status).await
    }

    /// Update the status of a lead
    #[instrument(skip(self), fields(lead_id = %id, status = %status))]
    pub async fn set_status(
        &self,
        id: &LeadId,
        status: LeadStatus,
    ) -> Result<Lead, ApplicationError> {
        let lead = self
            .repository
            .update_status(id, status)
            .await?
            .ok_or_else(ApplicationError::lead_not_found)?;

        info!(lead_id = %id, status = %status, "Lead status updated");
        Ok(lead)
    }

    /// Delete every lead, returning the number removed
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, ApplicationError> {
        let count = self.repository.clear().await?;
        info!(count, "Cleared all leads");
        Ok(count)
    }

    /// Check whether lead storage is reachable
    pub async fn storage_available(&self) -> bool {
        self.repository.is_available().await
    }
}

#[async_trait]
impl LeadApiPort for LeadService {
    async fn list_leads(&self) -> Result<Vec<Lead>, ApplicationError> {
        self.list().await
    }

    async fn get_lead(&self, id: &LeadId) -> Result<Lead, ApplicationError> {
        self.get(id).await
    }

    async fn create_lead(&self, new_lead: NewLead) -> Result<Lead, ApplicationError> {
        self.create(new_lead).await
    }

    async fn update_status(
        &self,
        id: &LeadId,
        status: LeadStatus,
    ) -> Result<Lead, ApplicationError> {
        self.set_status(id, status).await
    }

    async fn clear_all(&self) -> Result<usize, ApplicationError> {
        self.clear().await
    }
}
