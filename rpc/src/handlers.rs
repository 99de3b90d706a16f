//! Request handlers for the match API.

use crate::error::RpcError;
use crate::server::AppState;

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tournify_resolution::{
    LeaderboardEntry, LeaderboardOutcome, ValidationReport, ValidationRequest,
};
use tournify_types::time::flexible_utc;
use tournify_types::PlayerIdentity;
use uuid::Uuid;

// ── Validation ───────────────────────────────────────────────────────────

pub async fn validate_match_history(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ValidationRequest>,
) -> Result<Json<ValidationReport>, RpcError> {
    let report = state.resolver.validate(&request).await?;
    Ok(Json(report))
}

// ── Leaderboard ──────────────────────────────────────────────────────────

/// Leaderboard response. On a failed validation the ranking fields stay
/// empty and the validation outcome's message is carried instead.
#[derive(Serialize)]
pub struct LeaderboardResponse {
    pub match_id: Option<String>,
    pub map: Option<String>,
    pub total_players: usize,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub validation_passed: bool,
    pub message: String,
}

pub async fn leaderboard(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ValidationRequest>,
) -> Result<Json<LeaderboardResponse>, RpcError> {
    let response = match state.resolver.leaderboard(&request).await? {
        LeaderboardOutcome::Ranked(report) => LeaderboardResponse {
            match_id: Some(report.match_id),
            map: Some(report.map),
            total_players: report.total_players,
            leaderboard: report.leaderboard,
            validation_passed: true,
            message: report.message,
        },
        LeaderboardOutcome::Rejected(report) => LeaderboardResponse {
            match_id: report.match_id,
            map: None,
            total_players: 0,
            leaderboard: Vec::new(),
            validation_passed: false,
            message: report.message,
        },
    };
    Ok(Json(response))
}

// ── Create match (stub) ──────────────────────────────────────────────────

/// Create-match input. Nothing is persisted; the endpoint exists for
/// interface completeness with tournament tooling.
#[derive(Deserialize)]
pub struct CreateMatchRequest {
    pub players: Vec<PlayerIdentity>,
    #[serde(with = "flexible_utc")]
    pub match_start_time: DateTime<Utc>,
    pub match_map: String,
}

#[derive(Serialize)]
pub struct CreateMatchResponse {
    pub match_id: String,
    pub players: Vec<PlayerIdentity>,
    #[serde(with = "flexible_utc")]
    pub match_start_time: DateTime<Utc>,
    pub match_map: String,
    pub status: String,
    pub message: String,
}

pub async fn create_match(
    Json(request): Json<CreateMatchRequest>,
) -> Result<Json<CreateMatchResponse>, RpcError> {
    if request.players.is_empty() {
        return Err(RpcError::InvalidRequest(
            "players list cannot be empty".to_string(),
        ));
    }
    if request.match_map.trim().is_empty() {
        return Err(RpcError::InvalidRequest(
            "match map cannot be empty".to_string(),
        ));
    }

    let match_id = Uuid::new_v4().to_string();
    Ok(Json(CreateMatchResponse {
        message: format!("match created with id {match_id}"),
        match_id: match_id.clone(),
        players: request.players,
        match_start_time: request.match_start_time,
        match_map: request.match_map,
        status: "created".to_string(),
    }))
}

// ── Service meta ─────────────────────────────────────────────────────────

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Tournify match API is running" }))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
