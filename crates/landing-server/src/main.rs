//! Landing server entry point.
//!
//! Builds the CMS and record clients from the environment, then starts the
//! Axum HTTP server with graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use landing_client::{ContentClient, ContentConfig, RecordClient};
use landing_server::config::ServerConfig;
use landing_server::routes;
use landing_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment.
    let config = ServerConfig::from_env();

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(content_url = %config.content_url, "landing server starting");

    let state = build_app_state(&config)?;
    let app = routes::app(state);

    // Bind and serve.
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "landing server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("landing server stopped");
    Ok(())
}

/// Build the shared application state.
fn build_app_state(config: &ServerConfig) -> anyhow::Result<Arc<AppState>> {
    let content = ContentClient::with_config(ContentConfig {
        base_url: config.content_url.clone(),
        timeout: config.http_timeout,
    })
    .context("failed to build content client")?;

    let records = match &config.records {
        Some(cfg) => {
            info!(doc = %cfg.doc_id, table = %cfg.table_id, "lead storage configured");
            Some(RecordClient::new(cfg.clone()).context("failed to build record client")?)
        }
        None => {
            warn!("GRIST_* settings incomplete, lead submissions will be rejected");
            None
        }
    };

    Ok(Arc::new(AppState::new(content, records, config.revalidate)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
