//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tournify_resolution::ResolutionError;

/// Errors surfaced to HTTP callers as non-200 responses.
///
/// Everything else the pipeline produces — no quorum, failed detail checks —
/// is data in a 200 body, so callers can tell "the system worked and found
/// no consensus" from "the system could not attempt the work".
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("canonical match record unavailable: {0}")]
    CanonicalUnavailable(String),
}

impl From<ResolutionError> for RpcError {
    fn from(e: ResolutionError) -> Self {
        match e {
            ResolutionError::EmptyRoster | ResolutionError::RosterTooSmall(_) => {
                RpcError::InvalidRequest(e.to_string())
            }
            ResolutionError::CanonicalUnavailable(source) => {
                RpcError::CanonicalUnavailable(source.to_string())
            }
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        match self {
            RpcError::InvalidRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_request",
                    "message": message,
                })),
            )
                .into_response(),
            RpcError::CanonicalUnavailable(message) => (
                StatusCode::BAD_GATEWAY,
                // Without the canonical record neither detail check could
                // run: both are indeterminate, not false.
                Json(json!({
                    "error": "canonical_record_unavailable",
                    "message": message,
                    "validation_passed": false,
                    "time_ok": null,
                    "map_ok": null,
                })),
            )
                .into_response(),
        }
    }
}
