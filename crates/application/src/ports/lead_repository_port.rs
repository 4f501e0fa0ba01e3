//! Lead repository port
//!
//! Defines the interface for durable storage of lead records.

use async_trait::async_trait;
use domain::{Lead, LeadId, LeadStatus};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for lead persistence
///
/// Implementations keep records in insertion order and never enforce the
/// form rules; the service layer validates before calling in.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LeadRepositoryPort: Send + Sync {
    /// Every stored lead, in storage order
    async fn list(&self) -> Result<Vec<Lead>, ApplicationError>;

    /// Get a lead by ID
    async fn get(&self, id: &LeadId) -> Result<Option<Lead>, ApplicationError>;

    /// Store a new lead
    ///
    /// # Returns
    /// `false` without writing anything if a lead with the same ID exists
    async fn insert(&self, lead: &Lead) -> Result<bool, ApplicationError>;

    /// Change the status of a lead
    ///
    /// # Returns
    /// The updated lead, or `None` if no lead has this ID
    async fn update_status(
        &self,
        id: &LeadId,
        status: LeadStatus,
    ) -> Result<Option<Lead>, ApplicationError>;

    /// Delete every lead
    ///
    /// # Returns
    /// The number of leads removed
    async fn clear(&self) -> Result<usize, ApplicationError>;

    /// Check whether the backing storage can be read
    async fn is_available(&self) -> bool;
}
