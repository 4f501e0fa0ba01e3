//! Leads store - client-side cache and view state for the admin dashboard
//!
//! Holds the full lead collection fetched from the Lead API together with
//! the derived view: search term, status filter, current page and the
//! filtered subset. Setters never refilter on their own; callers decide when
//! to run [`LeadsStore::filter_leads`] and whether the page resets.
//!
//! # Example
//!
//! ```rust,ignore
//! let store = LeadsStore::new(api);
//! store.fetch_leads().await;
//! store.set_search_term("john");
//! store.filter_leads(true);
//! let page = store.page();
//! ```

use std::sync::Arc;

use domain::{Lead, LeadId, LeadStatus, StatusFilter};
use parking_lot::RwLock;
use tracing::{debug, instrument, warn};

use crate::ports::LeadApiPort;

/// Rows per dashboard page
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Observable state of the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadsState {
    /// Full cached collection, in API order
    pub leads: Vec<Lead>,
    /// Leads passing the current search and filter, in API order
    pub filtered_leads: Vec<Lead>,
    pub search_term: String,
    pub status_filter: StatusFilter,
    /// 1-based page number
    pub current_page: usize,
    pub is_loading: bool,
    /// Message from the last failed fetch
    pub error: Option<String>,
}

impl Default for LeadsState {
    fn default() -> Self {
        Self {
            leads: Vec::new(),
            filtered_leads: Vec::new(),
            search_term: String::new(),
            status_filter: StatusFilter::All,
            current_page: 1,
            is_loading: false,
            error: None,
        }
    }
}

/// One page of the filtered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadsPage {
    pub leads: Vec<Lead>,
    pub page: usize,
    /// At least 1, even when nothing matches
    pub total_pages: usize,
    pub total_filtered: usize,
    pub page_size: usize,
}

/// Client-held lead cache with search, filter and pagination state
///
/// Shared as `Arc<LeadsStore>`; the internal lock is never held across an
/// await, so state stays observable while a fetch is in flight.
pub struct LeadsStore {
    api: Arc<dyn LeadApiPort>,
    state: RwLock<LeadsState>,
    page_size: usize,
}

impl std::fmt::Debug for LeadsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadsStore")
            .field("page_size", &self.page_size)
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}

/// Clears the loading flag when a fetch ends, including when it is cancelled
struct LoadingGuard<'a> {
    state: &'a RwLock<LeadsState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.write().is_loading = false;
    }
}

impl LeadsStore {
    /// Create an empty store backed by `api`
    pub fn new(api: Arc<dyn LeadApiPort>) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    /// Create an empty store with a custom page size (minimum 1)
    pub fn with_page_size(api: Arc<dyn LeadApiPort>, page_size: usize) -> Self {
        Self {
            api,
            state: RwLock::new(LeadsState::default()),
            page_size: page_size.max(1),
        }
    }

    /// Replace the cached collection without refiltering
    pub fn set_leads(&self, leads: Vec<Lead>) {
        self.state.write().leads = leads;
    }

    /// Append a lead to the cached collection
    pub fn add_lead(&self, lead: Lead) {
        self.state.write().leads.push(lead);
    }

    /// Patch the status of a cached lead; unknown IDs are ignored
    pub fn update_lead_status(&self, id: &LeadId, status: LeadStatus) {
        let mut state = self.state.write();
        if let Some(lead) = state.leads.iter_mut().find(|l| l.id == *id) {
            lead.status = status;
        }
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.state.write().search_term = term.into();
    }

    pub fn set_status_filter(&self, filter: StatusFilter) {
        self.state.write().status_filter = filter;
    }

    /// Set the current page; 0 is treated as 1
    pub fn set_current_page(&self, page: usize) {
        self.state.write().current_page = page.max(1);
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.write().is_loading = loading;
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.write().error = error;
    }

    /// Recompute the filtered view from the cached collection
    ///
    /// With `reset_page` the current page goes back to 1; otherwise it is
    /// left alone, even if it now points past the last page.
    pub fn filter_leads(&self, reset_page: bool) {
        let mut state = self.state.write();
        let needle = state.search_term.to_lowercase();
        let filter = state.status_filter;

        let filtered: Vec<Lead> = state
            .leads
            .iter()
            .filter(|lead| lead.matches_search(&needle) && filter.matches(lead.status))
            .cloned()
            .collect();

        state.filtered_leads = filtered;
        if reset_page {
            state.current_page = 1;
        }
    }

    /// Reload the collection from the Lead API
    ///
    /// On success the cache is replaced and refiltered from page 1. On
    /// failure `error` is set and the cache is left untouched. The loading
    /// flag is cleared however the call ends.
    #[instrument(skip(self))]
    pub async fn fetch_leads(&self) {
        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
        }
        let _loading = LoadingGuard { state: &self.state };

        match self.api.list_leads().await {
            Ok(leads) => {
                debug!(count = leads.len(), "Fetched leads");
                self.set_leads(leads);
                self.filter_leads(true);
            },
            Err(e) => {
                warn!(error = %e, "Failed to fetch leads");
                self.set_error(Some(format!("Failed to fetch leads: {e}")));
            },
        }
    }

    /// Clone of the whole state
    #[must_use]
    pub fn snapshot(&self) -> LeadsState {
        self.state.read().clone()
    }

    #[must_use]
    pub fn leads(&self) -> Vec<Lead> {
        self.state.read().leads.clone()
    }

    #[must_use]
    pub fn filtered_leads(&self) -> Vec<Lead> {
        self.state.read().filtered_leads.clone()
    }

    #[must_use]
    pub fn search_term(&self) -> String {
        self.state.read().search_term.clone()
    }

    #[must_use]
    pub fn status_filter(&self) -> StatusFilter {
        self.state.read().status_filter
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.state.read().current_page
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages in the filtered view, never less than 1
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.state.read().filtered_leads.len(), self.page_size)
    }

    /// The current page of the filtered view
    #[must_use]
    pub fn page(&self) -> LeadsPage {
        let state = self.state.read();
        let total_filtered = state.filtered_leads.len();
        let start = (state.current_page - 1).saturating_mul(self.page_size);

        LeadsPage {
            leads: state
                .filtered_leads
                .iter()
                .skip(start)
                .take(self.page_size)
                .cloned()
                .collect(),
            page: state.current_page,
            total_pages: total_pages(total_filtered, self.page_size),
            total_filtered,
            page_size: self.page_size,
        }
    }
}

fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size).max(1)
}
