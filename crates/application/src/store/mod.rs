//! Client-side state containers

mod leads_store;

pub use leads_store::{DEFAULT_PAGE_SIZE, LeadsPage, LeadsState, LeadsStore};
