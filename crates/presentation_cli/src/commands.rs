//! Command execution
//!
//! Every command talks to a running server through `HttpLeadApiClient`.
//! Admin commands go through the same store and dashboard the web admin
//! table uses, so search, filtering and paging behave identically.

use std::{io::Write, path::Path, sync::Arc};

use anyhow::{Context, bail};
use application::{ApplicationError, AssessmentService, LeadApiPort, LeadsDashboard, LeadsStore};
use domain::{LeadId, LeadSubmission, VisaCategory};
use infrastructure::{AdminKeyHasher, AppConfig, ClientConfig, HttpLeadApiClient};
use secrecy::SecretString;
use tracing::{debug, warn};

use crate::{
    cli::{Cli, Commands},
    output,
};

/// Run a parsed command, writing human-readable output to `out`
///
/// `out` is flushed before returning; a failed flush is an error.
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let client_config = client_config(&cli)?;

    match cli.command {
        Commands::List {
            search,
            status,
            page,
        } => {
            let api = api(&client_config)?;
            let store = Arc::new(LeadsStore::new(Arc::clone(&api)));
            let dashboard = LeadsDashboard::new(api, store);

            dashboard.load().await;
            if let Some(error) = dashboard.store().error() {
                bail!(error);
            }
            dashboard.search(search);
            dashboard.filter_by_status(status);
            dashboard.go_to_page(page);

            output::write_leads_page(out, &dashboard.current_page())?;
        },

        Commands::Show { id } => {
            let lead = api(&client_config)?.get_lead(&LeadId::new(id)).await?;
            output::write_lead_detail(out, &lead)?;
        },

        Commands::SetStatus { id, status } => {
            let lead = api(&client_config)?
                .update_status(&LeadId::new(id), status)
                .await?;
            writeln!(
                out,
                "Lead {} ({}) is now {}",
                lead.id,
                lead.full_name(),
                lead.status.label()
            )?;
        },

        Commands::Clear { yes } => {
            if !yes {
                bail!("Refusing to delete every lead without --yes");
            }
            let count = api(&client_config)?.clear_all().await?;
            writeln!(out, "All leads cleared successfully ({count} removed)")?;
        },

        Commands::Submit {
            first_name,
            last_name,
            email,
            linkedin,
            visas,
            resume_url,
            additional_info,
            country,
        } => {
            let submission = LeadSubmission {
                first_name,
                last_name,
                email,
                linkedin,
                visas_interested: visas.iter().map(|v| normalize_visa(v)).collect(),
                resume_url,
                additional_info,
                country,
            };

            let service = AssessmentService::new(api(&client_config)?);
            match service.submit(submission).await {
                Ok(lead) => {
                    writeln!(out, "Assessment submitted, lead ID {}", lead.id)?;
                },
                Err(ApplicationError::InvalidSubmission(errors)) => {
                    output::write_form_errors(out, &errors)?;
                    bail!("Submission has {} invalid field(s)", errors.len());
                },
                Err(e) => return Err(e.into()),
            }
        },

        Commands::HashAdminKey { key, verify } => {
            let hasher = AdminKeyHasher::new();
            let hash = hasher.hash(&key).context("Failed to hash admin key")?;

            writeln!(out, "{hash}")?;
            writeln!(out)?;
            writeln!(out, "Add to config.toml:")?;
            writeln!(out, "  [security]")?;
            writeln!(out, "  admin_keys = [\"{hash}\"]")?;

            if verify {
                if hasher.verify(&key, &hash)? {
                    writeln!(out, "Verification: hash matches")?;
                } else {
                    bail!("Verification: hash does NOT match");
                }
            }
        },

        Commands::Health => {
            let client = HttpLeadApiClient::from_config(&client_config)?;
            let health = client
                .health()
                .await
                .with_context(|| format!("Server at {} is unhealthy", client.base_url()))?;
            writeln!(out, "{} (version {})", health.status, health.version)?;
        },
    }

    out.flush().context("Failed to write output")
}

/// Client settings from configuration, with command-line overrides applied
fn client_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = load_config(cli.config.as_deref())?.client;

    if let Some(url) = &cli.url {
        config.base_url.clone_from(url);
    }
    if let Some(key) = &cli.admin_key {
        config.admin_key = Some(SecretString::from(key.clone()));
    }

    debug!(base_url = %config.base_url, "Using Lead API");
    Ok(config)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(AppConfig::load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        })),
    }
}

fn api(config: &ClientConfig) -> anyhow::Result<Arc<dyn LeadApiPort>> {
    Ok(Arc::new(HttpLeadApiClient::from_config(config)?))
}

/// Map a visa label onto the form's spelling when it is a known category
fn normalize_visa(label: &str) -> String {
    VisaCategory::from_label(label)
        .map_or_else(|| label.trim().to_string(), |c| c.label().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_visas_use_form_spelling() {
        assert_eq!(normalize_visa("o-1"), "O-1");
        assert_eq!(normalize_visa(" eb-2 niw "), "EB-2 NIW");
        assert_eq!(normalize_visa("H-1B"), "H-1B");
    }

    #[test]
    fn explicit_missing_config_file_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/leadintake.toml"))).is_err());
    }
}
