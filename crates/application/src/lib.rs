//! Application layer - Use cases and orchestration
//!
//! Contains the Lead API use cases, the admin-side leads store and its
//! dashboard binding, and the port definitions adapters implement.

pub mod error;
pub mod ports;
pub mod services;
pub mod store;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
pub use store::{LeadsPage, LeadsState, LeadsStore};
