//! Wire types for the match-history provider API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tournify_types::time::flexible_utc;
use tournify_types::PlayerIdentity;

/// One entry in a player's recent-match history.
///
/// The provider timestamps every entry so the recency window can be applied
/// client-side.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryMatch {
    pub match_id: String,
    #[serde(with = "flexible_utc")]
    pub started_at: DateTime<Utc>,
}

/// Response from `GET /history/{region}/{platform}/{name}/{tag}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub matches: Vec<HistoryMatch>,
}

/// Per-player statistics inside a canonical match record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatLine {
    pub name: String,
    pub tag: String,
    pub kills: u32,
    pub average_combat_score: f64,
}

/// The authoritative record for one match, fetched by identifier.
///
/// This is the ground truth a quorum vote is checked against; it is fetched
/// fresh for every verification or ranking call and never cached.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: String,
    #[serde(with = "flexible_utc")]
    pub started_at: DateTime<Utc>,
    pub map: String,
    pub region: String,
    pub platform: String,
    pub players: Vec<PlayerStatLine>,
}

impl MatchRecord {
    /// Full identity of a stat line: the line carries name and tag, the
    /// record carries the shard the match was played on.
    pub fn identity_of(&self, line: &PlayerStatLine) -> PlayerIdentity {
        PlayerIdentity::new(&line.name, &line.tag, &self.region, &self.platform)
    }
}
