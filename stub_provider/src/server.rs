//! Axum server exposing the provider wire format.

use crate::data;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

/// Shared state for the synthetic provider.
pub struct StubState {
    /// The match every non-`solo-` player reports having played.
    shared_match_id: String,
    /// Fixed reference clock; all generated timestamps are relative to it.
    clock_base: DateTime<Utc>,
}

impl StubState {
    pub fn new() -> Self {
        Self {
            shared_match_id: "scrim-4417".to_string(),
            clock_base: Utc::now(),
        }
    }

    pub fn with_shared_match(mut self, match_id: impl Into<String>) -> Self {
        self.shared_match_id = match_id.into();
        self
    }

    pub fn shared_match_id(&self) -> &str {
        &self.shared_match_id
    }

    pub fn clock_base(&self) -> DateTime<Utc> {
        self.clock_base
    }
}

impl Default for StubState {
    fn default() -> Self {
        Self::new()
    }
}

/// The synthetic provider server.
pub struct StubServer {
    pub port: u16,
    pub state: Arc<StubState>,
}

impl StubServer {
    pub fn new(port: u16) -> Self {
        Self {
            port,
            state: Arc::new(StubState::new()),
        }
    }

    /// Start serving. Runs until the process is shut down.
    pub async fn start(&self) -> std::io::Result<()> {
        let app = router(self.state.clone());
        let addr = format!("0.0.0.0:{}", self.port);
        info!(
            "stub provider listening on {} (shared match: {})",
            addr, self.state.shared_match_id
        );
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await
    }
}

/// Build the provider router; separated from [`StubServer::start`] so tests
/// can serve it on an ephemeral port.
pub fn router(state: Arc<StubState>) -> Router {
    Router::new()
        .route("/history/:region/:platform/:name/:tag", get(history))
        .route("/match/:match_id", get(match_record))
        .with_state(state)
}

async fn history(
    State(state): State<Arc<StubState>>,
    Path((_region, _platform, name, _tag)): Path<(String, String, String, String)>,
) -> Response {
    match data::player_history(&state, &name) {
        Some(history) => Json(history).into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "history backend failure" })),
        )
            .into_response(),
    }
}

async fn match_record(
    State(state): State<Arc<StubState>>,
    Path(match_id): Path<String>,
) -> Response {
    match data::match_record(&state, &match_id) {
        Some(record) => Json(record).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("match {match_id} not found") })),
        )
            .into_response(),
    }
}
