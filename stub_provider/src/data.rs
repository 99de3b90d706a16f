//! Deterministic synthetic match data.

use crate::server::StubState;
use chrono::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hash::{Hash, Hasher};
use tournify_provider::{HistoryMatch, HistoryResponse, MatchRecord, PlayerStatLine};

/// The competitive map pool.
pub const VALORANT_MAPS: [&str; 10] = [
    "Ascent", "Bind", "Haven", "Split", "Icebox", "Breeze", "Fracture", "Pearl", "Lotus", "Sunset",
];

/// Players generated into every canonical record.
pub const PLAYERS_PER_MATCH: u32 = 10;

fn seed_for(key: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Generate the canonical record for a match id, or `None` for `lost-*`
/// ids. Same id, same record, for the lifetime of the server.
pub fn match_record(state: &StubState, match_id: &str) -> Option<MatchRecord> {
    if match_id.starts_with("lost-") {
        return None;
    }

    let mut rng = StdRng::seed_from_u64(seed_for(match_id));

    let map = VALORANT_MAPS[rng.random_range(0..VALORANT_MAPS.len())];
    let started_at = state.clock_base()
        - Duration::hours(rng.random_range(1..=72))
        - Duration::minutes(rng.random_range(0..60));

    let players = (1..=PLAYERS_PER_MATCH)
        .map(|i| {
            let kills: u32 = rng.random_range(0..=25);
            // ACS tracks kills with ±15% variation, clamped to [150, 350].
            let base_acs = 150.0 + kills as f64 * 8.0;
            let variation: f64 = rng.random_range(-0.15..=0.15);
            let acs = (base_acs * (1.0 + variation)).clamp(150.0, 350.0);
            PlayerStatLine {
                name: format!("{match_id}-player-{i}"),
                tag: format!("{i:04}"),
                kills,
                average_combat_score: (acs * 100.0).round() / 100.0,
            }
        })
        .collect();

    Some(MatchRecord {
        match_id: match_id.to_string(),
        started_at,
        map: map.to_string(),
        region: "ap".to_string(),
        platform: "pc".to_string(),
        players,
    })
}

/// Generate a player's recent history, or `None` for `faulty-*` names (the
/// caller turns that into a 500).
///
/// Four matches unique to the player inside the recency window, one stale
/// entry well outside it (real providers return old matches too; dropping
/// them is the client's job), and — unless the player is `solo-*` — the
/// shared scrim match last.
pub fn player_history(state: &StubState, player_name: &str) -> Option<HistoryResponse> {
    if player_name.starts_with("faulty-") {
        return None;
    }

    let mut rng = StdRng::seed_from_u64(seed_for(player_name));
    let mut matches = Vec::new();

    for i in 1..=4 {
        matches.push(HistoryMatch {
            match_id: format!("{player_name}-m{i}"),
            started_at: state.clock_base() - Duration::days(rng.random_range(1..=20)),
        });
    }
    matches.push(HistoryMatch {
        match_id: format!("{player_name}-stale"),
        started_at: state.clock_base() - Duration::days(45),
    });

    if !player_name.starts_with("solo-") {
        let shared_id = state.shared_match_id();
        let started_at = match_record(state, shared_id)
            .map(|record| record.started_at)
            .unwrap_or(state.clock_base() - Duration::hours(2));
        matches.push(HistoryMatch {
            match_id: shared_id.to_string(),
            started_at,
        });
    }

    Some(HistoryResponse { matches })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_deterministic_per_id() {
        let state = StubState::new();
        let first = match_record(&state, "scrim-a").unwrap();
        let second = match_record(&state, "scrim-a").unwrap();

        assert_eq!(first.map, second.map);
        assert_eq!(first.started_at, second.started_at);
        assert_eq!(first.players, second.players);
    }

    #[test]
    fn different_ids_generally_differ() {
        let state = StubState::new();
        let a = match_record(&state, "scrim-a").unwrap();
        let b = match_record(&state, "scrim-b").unwrap();
        assert_ne!(
            (a.started_at, &a.players),
            (b.started_at, &b.players)
        );
    }

    #[test]
    fn record_shape_follows_the_generator_rules() {
        let state = StubState::new();
        let record = match_record(&state, "scrim-a").unwrap();

        assert_eq!(record.players.len(), PLAYERS_PER_MATCH as usize);
        assert!(VALORANT_MAPS.contains(&record.map.as_str()));
        for (i, line) in record.players.iter().enumerate() {
            assert_eq!(line.name, format!("scrim-a-player-{}", i + 1));
            assert!(line.kills <= 25);
            assert!((150.0..=350.0).contains(&line.average_combat_score));
        }
    }

    #[test]
    fn lost_ids_have_no_record() {
        let state = StubState::new();
        assert!(match_record(&state, "lost-scrim-1").is_none());
    }

    #[test]
    fn history_ends_with_the_shared_match() {
        let state = StubState::new();
        let history = player_history(&state, "some-player").unwrap();

        assert_eq!(history.matches.len(), 6);
        assert_eq!(
            history.matches.last().unwrap().match_id,
            state.shared_match_id()
        );
    }

    #[test]
    fn stale_entry_is_outside_the_recency_window() {
        let state = StubState::new();
        let history = player_history(&state, "some-player").unwrap();

        let stale = history
            .matches
            .iter()
            .find(|m| m.match_id.ends_with("-stale"))
            .unwrap();
        assert!(state.clock_base() - stale.started_at > Duration::days(30));
    }

    #[test]
    fn solo_players_share_nothing() {
        let state = StubState::new();
        let history = player_history(&state, "solo-drifter").unwrap();

        assert_eq!(history.matches.len(), 5);
        assert!(history
            .matches
            .iter()
            .all(|m| m.match_id != state.shared_match_id()));
    }

    #[test]
    fn faulty_players_fail_generation() {
        let state = StubState::new();
        assert!(player_history(&state, "faulty-ghost").is_none());
    }

    #[test]
    fn shared_entry_survives_a_lost_shared_match() {
        // History still reports the shared id even when its canonical
        // record is gone; that is exactly the situation the canonical-
        // unavailable path needs.
        let state = StubState::new().with_shared_match("lost-scrim-9");
        let history = player_history(&state, "some-player").unwrap();
        assert_eq!(history.matches.last().unwrap().match_id, "lost-scrim-9");
    }
}
