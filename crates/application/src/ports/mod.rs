//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod lead_api_port;
mod lead_repository_port;

pub use lead_api_port::LeadApiPort;
#[cfg(test)]
pub use lead_api_port::MockLeadApiPort;
pub use lead_repository_port::LeadRepositoryPort;
#[cfg(test)]
pub use lead_repository_port::MockLeadRepositoryPort;
