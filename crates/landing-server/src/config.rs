//! Server configuration.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Service settings use `LANDING_*` variables; the record store keeps the
//! `GRIST_*` names its deployments already export.

use std::net::SocketAddr;
use std::time::Duration;

use landing_client::{DEFAULT_CONTENT_URL, DEFAULT_TIMEOUT, RecordConfig};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REVALIDATE_SECS: u64 = 300;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// CMS origin.
    pub content_url: String,
    /// How long a fetched insight list is served before refetching.
    /// Zero disables caching.
    pub revalidate: Duration,
    /// Outbound request timeout for both backends.
    pub http_timeout: Duration,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Record store settings; `None` when any `GRIST_*` variable is missing.
    pub records: Option<RecordConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT`: port to bind on, all interfaces
    /// - `LANDING_BIND_ADDR`: full bind address (overrides `PORT`, default: `127.0.0.1:3000`)
    /// - `LANDING_CONTENT_URL`: CMS origin (default: `http://127.0.0.1:1337`)
    /// - `LANDING_REVALIDATE_SECS`: insight cache window (default: `300`)
    /// - `LANDING_HTTP_TIMEOUT_SECS`: outbound timeout (default: `10`)
    /// - `LANDING_LOG_LEVEL`: log filter (default: `info`)
    /// - `GRIST_BASE_URL`, `GRIST_API_KEY`, `GRIST_DOC_ID`, `GRIST_TABLE_ID`: record store
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let default_addr = SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT));

        // Priority: LANDING_BIND_ADDR > PORT > default 127.0.0.1:3000
        let bind_addr = if let Some(addr) = var("LANDING_BIND_ADDR") {
            addr.parse().unwrap_or(default_addr)
        } else if let Some(port) = var("PORT") {
            SocketAddr::from(([0, 0, 0, 0], port.parse().unwrap_or(DEFAULT_PORT)))
        } else {
            default_addr
        };

        let content_url =
            var("LANDING_CONTENT_URL").unwrap_or_else(|| DEFAULT_CONTENT_URL.to_owned());

        let revalidate = Duration::from_secs(
            var("LANDING_REVALIDATE_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REVALIDATE_SECS),
        );

        let http_timeout = var("LANDING_HTTP_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

        let log_level = var("LANDING_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let records = match (
            var("GRIST_BASE_URL"),
            var("GRIST_API_KEY"),
            var("GRIST_DOC_ID"),
            var("GRIST_TABLE_ID"),
        ) {
            (Some(base_url), Some(api_key), Some(doc_id), Some(table_id)) => Some(RecordConfig {
                base_url,
                api_key,
                doc_id,
                table_id,
                timeout: http_timeout,
            }),
            _ => None,
        };

        Self {
            bind_addr,
            content_url,
            revalidate,
            http_timeout,
            log_level,
            records,
        }
    }
}
