//! Request and result shapes for the resolution pipeline.

use crate::quorum::QUORUM_FRACTION;
use crate::rank::LeaderboardEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tournify_types::time::flexible_utc;
use tournify_types::PlayerIdentity;

/// What the caller believes the group played.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub players: Vec<PlayerIdentity>,
    #[serde(with = "flexible_utc")]
    pub expected_start_time: DateTime<Utc>,
    pub expected_map: String,
}

/// Outcome of a full validation pass.
///
/// "The system worked and found no consensus" is represented here, as data;
/// hard failures (invalid input, canonical record unreachable) never reach
/// this type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationReport {
    /// The resolved match, when a quorum agreed on one.
    pub match_id: Option<String>,
    /// Support for the resolved match as a percentage of the roster; 0.0
    /// when no match reached quorum.
    pub percentage_with_match: f64,
    pub validation_passed: bool,
    /// Start-time check; `null` when it could not be evaluated.
    pub time_ok: Option<bool>,
    /// Map check; `null` when it could not be evaluated.
    pub map_ok: Option<bool>,
    pub players_with_match: Vec<PlayerIdentity>,
    pub players_without_match: Vec<PlayerIdentity>,
    pub message: String,
}

impl ValidationReport {
    /// The terminal no-quorum outcome: nothing resolved, empty partitions.
    pub fn no_quorum(roster_size: usize) -> Self {
        Self {
            match_id: None,
            percentage_with_match: 0.0,
            validation_passed: false,
            time_ok: None,
            map_ok: None,
            players_with_match: Vec::new(),
            players_without_match: Vec::new(),
            message: format!(
                "no shared match found in at least {:.0}% of player histories \
                 (0.0% consensus across {} players)",
                QUORUM_FRACTION * 100.0,
                roster_size
            ),
        }
    }
}

/// A built leaderboard for a verified match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeaderboardReport {
    pub match_id: String,
    pub map: String,
    pub total_players: usize,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub message: String,
}

/// Result of a leaderboard request: a ranking, or the validation outcome
/// that prevented one.
#[derive(Clone, Debug)]
pub enum LeaderboardOutcome {
    Ranked(LeaderboardReport),
    Rejected(ValidationReport),
}
