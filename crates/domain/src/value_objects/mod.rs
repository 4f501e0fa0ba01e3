//! Value Objects - Immutable, identity-less domain primitives

mod lead_id;
mod lead_status;
mod visa_category;

pub use lead_id::LeadId;
pub use lead_status::{LeadStatus, StatusFilter};
pub use visa_category::VisaCategory;
