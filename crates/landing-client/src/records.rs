//! Spreadsheet-backed record store client (Grist).
//!
//! Leads are appended as one record each to a configured table. Two
//! read-only introspection calls (tables, columns) are exposed for
//! debugging the deployment's document layout.

use landing_core::lead::Lead;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::RecordError;
use crate::{RecordConfig, http_client};

/// Status and body of a backend response, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passthrough {
    pub status: u16,
    pub body: String,
}

/// Client for the record API.
#[derive(Debug, Clone)]
pub struct RecordClient {
    cfg: RecordConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct AddRecordsRequest<'a> {
    records: [NewRecord<'a>; 1],
}

#[derive(Serialize)]
struct NewRecord<'a> {
    fields: &'a Lead,
}

#[derive(Deserialize)]
struct AddRecordsResponse {
    #[serde(default)]
    records: Vec<CreatedRecord>,
}

#[derive(Deserialize)]
struct CreatedRecord {
    id: Option<i64>,
}

impl RecordClient {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Config` if a required setting is empty or the
    /// HTTP client cannot be built.
    pub fn new(cfg: RecordConfig) -> Result<Self, RecordError> {
        for (name, value) in [
            ("base_url", &cfg.base_url),
            ("api_key", &cfg.api_key),
            ("doc_id", &cfg.doc_id),
            ("table_id", &cfg.table_id),
        ] {
            if value.trim().is_empty() {
                return Err(RecordError::Config(format!("missing {name}")));
            }
        }

        let client = http_client(cfg.timeout)
            .map_err(|e| RecordError::Config(format!("failed to build HTTP client: {e}")))?;
        let cfg = RecordConfig {
            base_url: cfg.base_url.trim_end_matches('/').to_owned(),
            ..cfg
        };
        Ok(Self { cfg, client })
    }

    #[must_use]
    pub fn config(&self) -> &RecordConfig {
        &self.cfg
    }

    /// Append a lead. Returns the new record id when the backend reports one.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Api` with the backend body on a non-success
    /// status, or a network/decode error.
    pub async fn add_lead(&self, lead: &Lead) -> Result<Option<i64>, RecordError> {
        let url = format!("{}/records", self.table_url());
        let body = AddRecordsRequest {
            records: [NewRecord { fields: lead }],
        };

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.cfg.api_key)
            .json(&body)
            .send()
            .await
            .map_err(RecordError::from_send)?;

        let status = resp.status();
        let text = resp.text().await.map_err(RecordError::from_send)?;
        if !status.is_success() {
            return Err(RecordError::Api {
                status_code: status.as_u16(),
                doc_id: self.cfg.doc_id.clone(),
                table_id: self.cfg.table_id.clone(),
                body: text,
            });
        }

        let created: AddRecordsResponse = serde_json::from_str(&text)?;
        let id = created.records.first().and_then(|r| r.id);
        info!(table = %self.cfg.table_id, ?id, "lead recorded");
        Ok(id)
    }

    /// List the document's tables.
    ///
    /// # Errors
    ///
    /// Returns a network error if the backend is unreachable. Non-success
    /// statuses are passed through, not treated as errors.
    pub async fn list_tables(&self) -> Result<Passthrough, RecordError> {
        let url = format!(
            "{}/api/docs/{}/tables",
            self.cfg.base_url,
            urlencoding::encode(&self.cfg.doc_id)
        );
        self.passthrough(&url).await
    }

    /// List the columns of the leads table.
    ///
    /// # Errors
    ///
    /// Same as [`list_tables`](Self::list_tables).
    pub async fn list_columns(&self) -> Result<Passthrough, RecordError> {
        let url = format!("{}/columns", self.table_url());
        self.passthrough(&url).await
    }

    // --- Private ---

    fn table_url(&self) -> String {
        format!(
            "{}/api/docs/{}/tables/{}",
            self.cfg.base_url,
            urlencoding::encode(&self.cfg.doc_id),
            urlencoding::encode(&self.cfg.table_id)
        )
    }

    async fn passthrough(&self, url: &str) -> Result<Passthrough, RecordError> {
        debug!(%url, "record API passthrough");
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.cfg.api_key)
            .send()
            .await
            .map_err(RecordError::from_send)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(RecordError::from_send)?;
        Ok(Passthrough { status, body })
    }
}
