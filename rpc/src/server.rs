//! Axum server for the match API.

use crate::handlers;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tournify_resolution::MatchResolver;
use tracing::info;

/// Shared state for the API. The resolver keeps no per-request state, so
/// one instance serves all concurrent requests.
pub struct AppState {
    pub resolver: MatchResolver,
}

/// The HTTP API server.
pub struct RpcServer {
    pub port: u16,
    pub state: Arc<AppState>,
}

impl RpcServer {
    pub fn new(port: u16, resolver: MatchResolver) -> Self {
        Self {
            port,
            state: Arc::new(AppState { resolver }),
        }
    }

    /// Start serving. Runs until the process is shut down.
    pub async fn start(&self) -> std::io::Result<()> {
        let app = router(self.state.clone());
        let addr = format!("0.0.0.0:{}", self.port);
        info!("match API listening on {}", addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await
    }
}

/// Build the API router; separated from [`RpcServer::start`] so tests can
/// serve it on an ephemeral port.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/matches", post(handlers::create_match))
        .route(
            "/matches/validate-match-history",
            post(handlers::validate_match_history),
        )
        .route("/matches/leaderboard", post(handlers::leaderboard))
        .with_state(state)
}
