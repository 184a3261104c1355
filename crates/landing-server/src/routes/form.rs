//! Lead submission route: `POST /api/form/submit`.
//!
//! Validates the form body and appends it to the record store. Responses
//! use the shape the landing page form expects: `{ok, id}` on success and
//! `{error}` with a visitor-facing message otherwise.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use tracing::{error, info, warn};

use landing_core::error::LeadError;
use landing_core::lead::LeadSubmission;

use crate::routes::records::NOT_CONFIGURED;
use crate::state::AppState;

/// Build the `/api/form` router.
pub fn router() -> Router<Arc<AppState>> {
    // Each submission holds an outbound request open; cap them.
    Router::new()
        .route("/api/form/submit", post(submit))
        .layer(tower::limit::ConcurrencyLimitLayer::new(10))
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
    /// Id of the new record, when the backend reports one.
    pub id: Option<i64>,
}

#[derive(Debug, Serialize)]
struct FormErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

/// Failure of a submission, rendered as `{error}` for the form.
#[derive(Debug)]
pub enum FormError {
    /// Body was not a JSON object.
    Malformed,
    /// A field failed validation.
    Invalid(LeadError),
    /// Storage is unconfigured or rejected the record.
    Backend(String),
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Malformed => (
                StatusCode::BAD_REQUEST,
                FormErrorBody {
                    error: "Invalid request body.".to_owned(),
                    field: None,
                },
            ),
            Self::Invalid(err) => (
                StatusCode::BAD_REQUEST,
                FormErrorBody {
                    error: err.to_string(),
                    field: Some(err.field()),
                },
            ),
            Self::Backend(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                FormErrorBody {
                    error: message,
                    field: None,
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

// ── Handlers ─────────────────────────────────────────────────────────

/// Validate and store one lead.
async fn submit(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, FormError> {
    let submission: LeadSubmission = serde_json::from_slice(&body).map_err(|err| {
        warn!(error = %err, "rejecting malformed lead body");
        FormError::Malformed
    })?;

    let lead = submission.validate().map_err(|err| {
        info!(field = err.field(), "lead failed validation");
        FormError::Invalid(err)
    })?;

    let Some(records) = state.records.as_ref() else {
        error!("lead received but record storage is not configured");
        return Err(FormError::Backend(NOT_CONFIGURED.to_owned()));
    };

    let id = records.add_lead(&lead).await.map_err(|err| {
        error!(error = %err, "failed to store lead");
        FormError::Backend(err.to_string())
    })?;

    Ok(Json(SubmitResponse { ok: true, id }))
}
