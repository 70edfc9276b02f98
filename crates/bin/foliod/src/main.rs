//! # foliod — portfolio preview daemon
//!
//! Composition root that wires the preview server together and serves the
//! site locally, so the page's same-origin fetch of the profile document
//! works exactly as it does when deployed.
//!
//! ## Responsibilities
//! - Parse configuration (`folio.toml`, env vars)
//! - Initialize `tracing` with the configured filter
//! - Construct the file-backed profile source and the render service
//! - Build the axum router and serve it
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use folio_adapter_http_axum::source::FileProfileSource;
use folio_adapter_http_axum::state::AppState;
use folio_app::ports::ProfileSource;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("unable to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log))
        .init();

    let profile = FileProfileSource::new(config.profile_path());
    check_profile(&profile).await;

    let state = AppState::new(&config.root, profile, &config.page);
    let app = folio_adapter_http_axum::router::build(state);

    let bind_addr = config.bind;
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("unable to bind {bind_addr}"))?;
    tracing::info!(
        address = %bind_addr,
        root = %config.root.display(),
        "foliod listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("foliod stopped");
    Ok(())
}

/// Warn early when the profile document is missing or broken; the server
/// still starts so the document can be fixed while it runs.
async fn check_profile(profile: &FileProfileSource) {
    match profile.fetch().await {
        Ok(document) => tracing::info!(
            name = %document.name,
            path = %profile.path().display(),
            "profile document loaded"
        ),
        Err(err) => tracing::warn!(
            error = %err,
            path = %profile.path().display(),
            "profile document unavailable"
        ),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "unable to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "unable to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
