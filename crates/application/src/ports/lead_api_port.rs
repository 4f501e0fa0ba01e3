//! Lead API port
//!
//! The client-side view of the Lead API. The leads store, the dashboard and
//! the assessment form talk to leads through this port, whether the API is
//! served in-process or over HTTP.

use async_trait::async_trait;
use domain::{Lead, LeadId, LeadStatus, NewLead};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the Lead API
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LeadApiPort: Send + Sync {
    /// List every lead
    async fn list_leads(&self) -> Result<Vec<Lead>, ApplicationError>;

    /// Fetch a single lead
    ///
    /// # Errors
    /// `ApplicationError::NotFound` if the ID is unknown
    async fn get_lead(&self, id: &LeadId) -> Result<Lead, ApplicationError>;

    /// Create a lead from a complete request
    async fn create_lead(&self, new_lead: NewLead) -> Result<Lead, ApplicationError>;

    /// Change the status of a lead and return the updated record
    async fn update_status(
        &self,
        id: &LeadId,
        status: LeadStatus,
    ) -> Result<Lead, ApplicationError>;

    /// Delete every lead, returning how many were removed
    async fn clear_all(&self) -> Result<usize, ApplicationError>;
}
