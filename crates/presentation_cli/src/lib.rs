//! Lead intake CLI
//!
//! Admin and submission commands against a running lead intake server.

pub mod cli;
pub mod commands;
pub mod output;

pub use cli::{Cli, Commands};
pub use commands::run;
