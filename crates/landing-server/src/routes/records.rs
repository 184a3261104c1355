//! Record store introspection routes: `/api/grist/*`
//!
//! Pass the backend's status and body through untouched, for checking a
//! deployment's document layout.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use landing_client::{Passthrough, RecordClient};

use crate::error::AppError;
use crate::state::AppState;

/// Message returned when the `GRIST_*` settings are incomplete.
pub const NOT_CONFIGURED: &str = "lead storage is not configured";

/// Build the `/api/grist` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/grist/debug", get(list_tables))
        .route("/api/grist/columns", get(list_columns))
}

/// The configured record client, or a 500 explaining what is missing.
///
/// # Errors
///
/// Returns `AppError::Internal` when no record client is configured.
pub fn record_client(state: &AppState) -> Result<&RecordClient, AppError> {
    state
        .records
        .as_ref()
        .ok_or_else(|| AppError::Internal(NOT_CONFIGURED.to_owned()))
}

async fn list_tables(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let passthrough = record_client(&state)?.list_tables().await?;
    Ok(into_response(passthrough))
}

async fn list_columns(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let passthrough = record_client(&state)?.list_columns().await?;
    Ok(into_response(passthrough))
}

fn into_response(passthrough: Passthrough) -> Response {
    let status = StatusCode::from_u16(passthrough.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        passthrough.body,
    )
        .into_response()
}
