//! Hero cover route: `GET /api/cover`.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use landing_core::media::NormalizedImage;

use crate::state::AppState;

/// Build the `/api/cover` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/cover", get(get_cover))
}

#[derive(Debug, Serialize)]
pub struct CoverResponse {
    /// `null` when the CMS has no usable hero image.
    pub cover: Option<NormalizedImage>,
}

async fn get_cover(State(state): State<Arc<AppState>>) -> Json<CoverResponse> {
    Json(CoverResponse {
        cover: state.content.fetch_cover().await,
    })
}
