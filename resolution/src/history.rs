//! Concurrent collection of per-player match histories.

use crate::error::ResolutionError;
use std::collections::HashSet;
use tournify_provider::ProviderClient;
use tournify_types::PlayerIdentity;
use tracing::warn;

/// Per-player histories for one resolution request.
///
/// Holds exactly one entry per distinct requested player, in first-seen
/// request order. The order is load-bearing: the quorum vote breaks ties by
/// first encounter, so iteration must be reproducible for a given request.
#[derive(Clone, Debug, Default)]
pub struct AggregatedHistory {
    entries: Vec<(PlayerIdentity, Vec<String>)>,
}

impl AggregatedHistory {
    /// Build from already-collected entries. Callers are expected to pass
    /// one entry per distinct player.
    pub fn from_entries(entries: Vec<(PlayerIdentity, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// Number of distinct players in the aggregate — the N that quorum
    /// percentages are computed against.
    pub fn player_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, player: &PlayerIdentity) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(p, _)| p == player)
            .map(|(_, history)| history.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(PlayerIdentity, Vec<String>)> {
        self.entries.iter()
    }
}

/// Deduplicate a roster, preserving first-seen order. Supplying the same
/// identity twice is idempotent, never double-counted.
pub fn distinct_roster(players: &[PlayerIdentity]) -> Vec<PlayerIdentity> {
    let mut seen = HashSet::new();
    players
        .iter()
        .filter(|player| seen.insert((*player).clone()))
        .cloned()
        .collect()
}

/// Fetch every player's recent history concurrently and join the results.
///
/// One task per distinct player; the call returns only after every task has
/// settled — no short-circuit on failure, no cancellation of siblings, no
/// retries. A player whose lookup fails gets an empty history rather than
/// being dropped, so quorum percentages are always computed over the full
/// roster and never over just the successes.
pub async fn collect_histories(
    client: &ProviderClient,
    players: &[PlayerIdentity],
) -> Result<AggregatedHistory, ResolutionError> {
    if players.is_empty() {
        return Err(ResolutionError::EmptyRoster);
    }
    let roster = distinct_roster(players);

    let mut handles = Vec::with_capacity(roster.len());
    for player in &roster {
        let client = client.clone();
        let player = player.clone();
        handles.push(tokio::spawn(async move {
            match client.recent_match_ids(&player).await {
                Ok(ids) => ids,
                Err(e) => {
                    warn!(player = %player, error = %e, "history lookup failed, counting as empty");
                    Vec::new()
                }
            }
        }));
    }

    let mut entries = Vec::with_capacity(roster.len());
    for (player, handle) in roster.into_iter().zip(handles) {
        let history = match handle.await {
            Ok(history) => history,
            Err(e) => {
                warn!(player = %player, error = %e, "history task aborted, counting as empty");
                Vec::new()
            }
        };
        entries.push((player, history));
    }

    Ok(AggregatedHistory { entries })
}
