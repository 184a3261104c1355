//! HTTP clients for the landing page.
//!
//! [`ContentClient`] talks to the headless CMS and hands back normalized
//! previews; [`RecordClient`] appends leads to the spreadsheet-backed
//! record store. Neither retries: a failed request is reported once and
//! the caller decides how to degrade.
//!
//! # Example
//!
//! ```rust,no_run
//! use landing_client::ContentClient;
//!
//! # async fn example() -> Result<(), landing_client::ContentError> {
//! let client = ContentClient::new("http://127.0.0.1:1337")?;
//! for insight in client.fetch_insights().await? {
//!     tracing::info!(title = %insight.title, "insight");
//! }
//! # Ok(())
//! # }
//! ```

mod content;
mod error;
pub mod query;
mod records;

pub use content::{ArticleDetail, ContentClient};
pub use error::{ContentError, RecordError};
pub use records::{Passthrough, RecordClient};

use std::time::Duration;

/// Content server used when nothing else is configured.
pub const DEFAULT_CONTENT_URL: &str = "http://127.0.0.1:1337";

/// Per-request timeout for both clients.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Articles requested per listing.
pub const PAGE_SIZE: u32 = 20;

const USER_AGENT: &str = concat!("landing-client/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`ContentClient`].
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// CMS origin, e.g. `http://127.0.0.1:1337`. Also used to absolutize
    /// relative media URLs.
    pub base_url: String,
    /// Request timeout. Default: 10 seconds.
    pub timeout: Duration,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CONTENT_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Configuration for [`RecordClient`].
#[derive(Clone)]
pub struct RecordConfig {
    /// Record API origin.
    pub base_url: String,
    /// Bearer token.
    pub api_key: String,
    /// Document holding the leads table.
    pub doc_id: String,
    /// Table that receives one record per lead.
    pub table_id: String,
    /// Request timeout. Default: 10 seconds.
    pub timeout: Duration,
}

impl std::fmt::Debug for RecordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[redacted]")
            .field("doc_id", &self.doc_id)
            .field("table_id", &self.table_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    let timeout = if timeout.is_zero() {
        DEFAULT_TIMEOUT
    } else {
        timeout
    };
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}
