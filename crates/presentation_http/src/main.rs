//! Lead intake HTTP server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::LeadService;
use infrastructure::{AppConfig, JsonFileLeadRepository};
use presentation_http::{AppState, create_app, set_expose_internal_errors};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "leadintake_server=debug,presentation_http=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config is loaded first so the log format can follow it
    let config_result = AppConfig::load();
    let config = config_result.as_ref().cloned().unwrap_or_default();
    init_tracing(config.server.json_logs());

    if let Err(e) = &config_result {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    info!("Lead intake server v{} starting", env!("CARGO_PKG_VERSION"));
    info!(
        environment = %config.environment,
        address = %config.server.bind_address(),
        data_file = %config.storage.data_file.display(),
        "Configuration loaded"
    );

    set_expose_internal_errors(config.expose_internal_errors());

    if config.security.has_admin_keys() {
        let plaintext = config.security.count_plaintext_keys();
        if plaintext > 0 {
            warn!(
                count = plaintext,
                "Admin keys must be Argon2 hashes; plaintext entries are ignored. \
                 Use `leadintake-cli hash-admin-key` to generate them"
            );
        }
    } else {
        warn!("No admin keys configured, admin routes are unauthenticated");
    }

    let repository = JsonFileLeadRepository::from_config(&config.storage);
    let lead_service = Arc::new(LeadService::new(Arc::new(repository)));

    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let app = create_app(AppState::new(lead_service, config));

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{addr}");
    info!("API docs: http://{addr}/swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for SIGINT or SIGTERM
///
/// Once a signal arrives, in-flight requests get `timeout` to drain before
/// the process exits.
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            },
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }

    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        warn!(timeout_secs = timeout.as_secs(), "Graceful shutdown timed out, exiting");
        std::process::exit(1);
    });
}
