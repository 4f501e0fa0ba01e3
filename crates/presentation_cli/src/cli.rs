//! Command-line definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain::{LeadStatus, StatusFilter};

/// Lead intake CLI
#[derive(Debug, Parser)]
#[command(name = "leadintake-cli")]
#[command(author, version, about = "Lead intake admin and submission CLI", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Server URL, overrides `client.base_url`
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Admin key for protected routes, overrides `client.admin_key`
    #[arg(long, global = true, env = "LEADINTAKE_ADMIN_KEY", hide_env_values = true)]
    pub admin_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List leads as the admin dashboard shows them
    List {
        /// Case-insensitive search over first name, last name and email
        #[arg(short, long, default_value = "")]
        search: String,

        /// Status filter: all, pending or reached_out
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// Page to show (clamped to the available pages)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show every field of one lead
    Show {
        /// Lead ID
        id: String,
    },

    /// Change the status of a lead
    SetStatus {
        /// Lead ID
        id: String,

        /// New status: PENDING or REACHED_OUT
        #[arg(value_parser = parse_status)]
        status: LeadStatus,
    },

    /// Delete every lead
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Submit an assessment on behalf of a prospect
    Submit {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        /// LinkedIn profile or personal website
        #[arg(long)]
        linkedin: String,

        /// Visa category of interest (repeatable)
        #[arg(long = "visa")]
        visas: Vec<String>,

        /// URL of an uploaded resume
        #[arg(long, default_value = "")]
        resume_url: String,

        #[arg(long)]
        additional_info: String,

        /// Country of citizenship
        #[arg(long)]
        country: String,
    },

    /// Hash an admin key using Argon2 for `security.admin_keys`
    ///
    /// Example: leadintake-cli hash-admin-key my-secret-key
    HashAdminKey {
        /// The plaintext admin key to hash
        key: String,

        /// Verify the hash after generating it
        #[arg(long)]
        verify: bool,
    },

    /// Check server health (exits non-zero when unhealthy)
    Health,
}

/// Accept `REACHED_OUT`, `reached_out` and `reached-out`
fn parse_status(value: &str) -> Result<LeadStatus, String> {
    value
        .trim()
        .to_uppercase()
        .replace('-', "_")
        .parse()
        .map_err(|e: domain::DomainError| e.to_string())
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(9), "trace");
    }

    #[test]
    fn status_parser_is_lenient_about_case() {
        assert_eq!(parse_status("reached-out"), Ok(LeadStatus::ReachedOut));
        assert_eq!(parse_status("PENDING"), Ok(LeadStatus::Pending));
        assert!(parse_status("done").is_err());
    }

    #[test]
    fn search_help_names_searched_fields() {
        use clap::CommandFactory;
        let command = Cli::command();
        let search = command
            .find_subcommand("list")
            .and_then(|list| list.get_arguments().find(|arg| arg.get_id() == "search"))
            .and_then(|arg| arg.get_help())
            .map(ToString::to_string)
            .unwrap();
        assert!(search.contains("first name, last name and email"));
        assert!(!search.contains("country"));
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
