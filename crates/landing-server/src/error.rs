//! HTTP error types for the landing server.
//!
//! Maps client errors from `landing-client` into HTTP responses. Every
//! variant produces a JSON body with a machine-readable `error` field and a
//! human-readable `message`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use landing_client::{ContentError, RecordError};

/// Application-level error returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Requested resource not found.
    NotFound(String),
    /// An upstream service failed or answered with an error.
    Upstream(String),
    /// Internal server error.
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            Self::Upstream(msg) => (StatusCode::BAD_GATEWAY, "upstream_error", msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorBody {
            error: error_type,
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::NotFound { .. } => Self::NotFound(err.to_string()),
            ContentError::Config(_) => Self::Internal(err.to_string()),
            ContentError::Api { .. }
            | ContentError::Timeout
            | ContentError::Network(_)
            | ContentError::Json(_) => Self::Upstream(err.to_string()),
        }
    }
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Config(_) => Self::Internal(err.to_string()),
            RecordError::Api { .. }
            | RecordError::Timeout
            | RecordError::Network(_)
            | RecordError::Json(_) => Self::Upstream(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_not_found_maps_to_404() {
        let err: AppError = ContentError::NotFound {
            document_id: "abc".to_owned(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn content_api_failure_maps_to_502() {
        let err: AppError = ContentError::Api {
            status_code: 500,
            message: "db down".to_owned(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn record_timeout_maps_to_502() {
        let err: AppError = RecordError::Timeout.into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
