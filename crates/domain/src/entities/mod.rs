//! Domain entities - Objects with identity and lifecycle

mod lead;

pub use lead::{Lead, NewLead, format_submitted_at, submitted_now};
