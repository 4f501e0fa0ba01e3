//! Application services - Use case implementations

mod assessment_service;
mod lead_service;
mod leads_dashboard;

pub use assessment_service::AssessmentService;
pub use lead_service::LeadService;
pub use leads_dashboard::LeadsDashboard;
