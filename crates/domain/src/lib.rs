//! Domain layer for the lead intake service
//!
//! Contains the lead entity, its value objects, the assessment form rules
//! and domain errors. This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod validation;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use validation::{FormErrors, LeadSubmission};
pub use value_objects::*;
