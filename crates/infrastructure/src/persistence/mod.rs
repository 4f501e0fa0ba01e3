//! Persistence module
//!
//! JSON file storage for leads.

mod json_lead_repository;
mod seed;

pub use json_lead_repository::JsonFileLeadRepository;
pub use seed::demo_leads;
