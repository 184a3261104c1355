//! Error types for the landing HTTP clients.

/// Errors from the headless CMS client.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The client could not be built from its configuration.
    #[error("content client config error: {0}")]
    Config(String),

    /// The CMS answered with a non-success status.
    #[error("content API error {status_code}: {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Error message from the CMS, or `HTTP <code>`.
        message: String,
    },

    /// No article with this document id.
    #[error("article \"{document_id}\" not found")]
    NotFound {
        /// The document id that was requested.
        document_id: String,
    },

    /// Request timed out.
    #[error("content request timed out")]
    Timeout,

    /// Network or HTTP client error.
    #[error("content network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("content json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the spreadsheet record client.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The client could not be built from its configuration.
    #[error("record client config error: {0}")]
    Config(String),

    /// The record API rejected the request.
    #[error("Grist error {status_code} [doc={doc_id} table={table_id}]: {body}")]
    Api {
        status_code: u16,
        doc_id: String,
        table_id: String,
        /// Raw response body.
        body: String,
    },

    /// Request timed out.
    #[error("record request timed out")]
    Timeout,

    /// Network or HTTP client error.
    #[error("record network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("record json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContentError {
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err)
        }
    }
}

impl RecordError {
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err)
        }
    }
}
