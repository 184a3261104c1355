//! Insight routes: `/api/insights*`
//!
//! The list is served from the revalidation cache when fresh. A failed or
//! empty fetch is reported as an empty list, never as an error.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::{debug, warn};

use landing_core::preview::InsightPreview;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api/insights` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/insights", get(list_insights))
        .route("/api/insights/{document_id}", get(get_insight))
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct InsightListResponse {
    pub insights: Vec<InsightPreview>,
    /// Set when there is nothing to show, so the page renders its
    /// "no insights available" state.
    pub empty: bool,
}

#[derive(Debug, Serialize)]
pub struct InsightDetailResponse {
    pub insight: InsightPreview,
    pub raw: serde_json::Value,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// List normalized insight previews, newest first.
async fn list_insights(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let insights = if let Some(cached) = state.insights.fresh().await {
        debug!(count = cached.len(), "serving cached insights");
        cached
    } else {
        match state.content.fetch_insights().await {
            Ok(insights) => {
                // Empty results are never cached.
                if !insights.is_empty() {
                    state.insights.store(insights.clone()).await;
                }
                insights
            }
            Err(err) => {
                warn!(error = %err, "insight fetch failed, serving empty list");
                Vec::new()
            }
        }
    };

    let cache_control = format!("public, max-age={}", state.insights.ttl().as_secs());
    let empty = insights.is_empty();
    (
        [(header::CACHE_CONTROL, cache_control)],
        Json(InsightListResponse { insights, empty }),
    )
}

/// Look up one article by document id.
async fn get_insight(
    State(state): State<Arc<AppState>>,
    Path(document_id): Path<String>,
) -> Result<Json<InsightDetailResponse>, AppError> {
    let detail = state.content.fetch_article(&document_id).await?;
    Ok(Json(InsightDetailResponse {
        insight: detail.preview,
        raw: detail.raw,
    }))
}
