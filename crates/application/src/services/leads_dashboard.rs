//! Leads Dashboard - Admin table interactions over the leads store
//!
//! Each method mirrors one user action on the admin table and drives the
//! store the same way the table does: new search or filter criteria go back
//! to page 1, a status edit keeps the current page.

use std::sync::Arc;

use domain::{Lead, LeadId, LeadStatus, StatusFilter};
use tracing::{info, instrument};

use crate::{
    error::ApplicationError,
    ports::LeadApiPort,
    store::{LeadsPage, LeadsStore},
};

/// Admin dashboard binding between the Lead API and a [`LeadsStore`]
pub struct LeadsDashboard {
    api: Arc<dyn LeadApiPort>,
    store: Arc<LeadsStore>,
}

impl std::fmt::Debug for LeadsDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadsDashboard")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl LeadsDashboard {
    /// Create a dashboard over a shared store
    pub fn new(api: Arc<dyn LeadApiPort>, store: Arc<LeadsStore>) -> Self {
        Self { api, store }
    }

    /// The underlying store
    #[must_use]
    pub fn store(&self) -> &Arc<LeadsStore> {
        &self.store
    }

    /// Initial load
    pub async fn load(&self) {
        self.store.fetch_leads().await;
    }

    /// Apply a new search term
    pub fn search(&self, term: impl Into<String>) {
        self.store.set_search_term(term);
        self.store.filter_leads(true);
    }

    /// Apply a new status filter
    pub fn filter_by_status(&self, filter: StatusFilter) {
        self.store.set_status_filter(filter);
        self.store.filter_leads(true);
    }

    /// Jump to a page, clamped to the existing pages
    pub fn go_to_page(&self, page: usize) {
        let last = self.store.total_pages();
        self.store.set_current_page(page.clamp(1, last));
    }

    /// Current page of the table
    #[must_use]
    pub fn current_page(&self) -> LeadsPage {
        self.store.page()
    }

    /// Change a lead's status through the API, then patch the cache
    ///
    /// The page is kept so the admin stays where they were. On failure the
    /// store is left untouched.
    #[instrument(skip(self), fields(lead_id = %id, status = %status))]
    pub async fn change_status(
        &self,
        id: &LeadId,
        status: LeadStatus,
    ) -> Result<Lead, ApplicationError> {
        let updated = self.api.update_status(id, status).await?;
        self.store.update_lead_status(id, updated.status);
        self.store.filter_leads(false);
        Ok(updated)
    }

    /// Delete every lead through the API and empty the cache
    #[instrument(skip(self))]
    pub async fn clear_all(&self) -> Result<usize, ApplicationError> {
        let count = self.api.clear_all().await?;
        self.store.set_leads(Vec::new());
        self.store.filter_leads(true);
        info!(count, "Dashboard cleared");
        Ok(count)
    }
}
