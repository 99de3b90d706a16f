//! Match leaderboard construction.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tournify_provider::MatchRecord;
use tournify_types::PlayerIdentity;

/// One row of a match leaderboard.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based dense rank; ties on the sort key still get consecutive
    /// distinct ranks.
    pub rank: u32,
    pub player: PlayerIdentity,
    pub kills: u32,
    pub average_combat_score: f64,
}

/// Rank the requested players by their canonical match statistics.
///
/// Stat lines for players outside `roster` (the opposing side, fill-ins)
/// are dropped. Requested players missing from the record are omitted
/// rather than treated as an error, so the output may be shorter than the
/// roster. Sort key: kills descending, then average combat score
/// descending; the sort is stable.
pub fn build_leaderboard(
    record: &MatchRecord,
    roster: &HashSet<PlayerIdentity>,
) -> Vec<LeaderboardEntry> {
    let mut lines: Vec<_> = record
        .players
        .iter()
        .filter(|line| roster.contains(&record.identity_of(line)))
        .collect();

    lines.sort_by(|a, b| {
        b.kills
            .cmp(&a.kills)
            .then_with(|| b.average_combat_score.total_cmp(&a.average_combat_score))
    });

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| LeaderboardEntry {
            rank: i as u32 + 1,
            player: record.identity_of(line),
            kills: line.kills,
            average_combat_score: line.average_combat_score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tournify_provider::PlayerStatLine;

    fn line(name: &str, kills: u32, acs: f64) -> PlayerStatLine {
        PlayerStatLine {
            name: name.to_string(),
            tag: "0001".to_string(),
            kills,
            average_combat_score: acs,
        }
    }

    fn record(players: Vec<PlayerStatLine>) -> MatchRecord {
        MatchRecord {
            match_id: "scrim-1".to_string(),
            started_at: Utc::now(),
            map: "Ascent".to_string(),
            region: "ap".to_string(),
            platform: "pc".to_string(),
            players,
        }
    }

    fn identity(name: &str) -> PlayerIdentity {
        PlayerIdentity::new(name, "0001", "ap", "pc")
    }

    #[test]
    fn kills_rank_first_then_combat_score() {
        let rec = record(vec![
            line("a", 10, 200.0),
            line("b", 10, 250.0),
            line("c", 5, 300.0),
        ]);
        let roster: HashSet<_> = ["a", "b", "c"].iter().map(|n| identity(n)).collect();

        let board = build_leaderboard(&rec, &roster);
        assert_eq!(board.len(), 3);
        assert_eq!(board[0].player.name, "b");
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[1].player.name, "a");
        assert_eq!(board[1].rank, 2);
        assert_eq!(board[2].player.name, "c");
        assert_eq!(board[2].rank, 3);
    }

    #[test]
    fn players_outside_the_roster_are_dropped() {
        let rec = record(vec![
            line("requested", 5, 200.0),
            line("opponent", 25, 350.0),
        ]);
        let roster: HashSet<_> = [identity("requested")].into_iter().collect();

        let board = build_leaderboard(&rec, &roster);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].player.name, "requested");
        assert_eq!(board[0].rank, 1);
    }

    #[test]
    fn roster_members_missing_from_the_record_are_omitted() {
        let rec = record(vec![line("present", 5, 200.0)]);
        let roster: HashSet<_> = [identity("present"), identity("absent")]
            .into_iter()
            .collect();

        let board = build_leaderboard(&rec, &roster);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn exact_ties_keep_record_order_with_distinct_ranks() {
        let rec = record(vec![line("first", 10, 250.0), line("second", 10, 250.0)]);
        let roster: HashSet<_> = ["first", "second"].iter().map(|n| identity(n)).collect();

        let board = build_leaderboard(&rec, &roster);
        assert_eq!(board[0].player.name, "first");
        assert_eq!(board[1].player.name, "second");
        assert_eq!((board[0].rank, board[1].rank), (1, 2));
    }

    #[test]
    fn membership_uses_the_record_shard() {
        let rec = record(vec![line("a", 5, 200.0)]);
        // Same name and tag, different region — not the same player.
        let roster: HashSet<_> = [PlayerIdentity::new("a", "0001", "eu", "pc")]
            .into_iter()
            .collect();

        assert!(build_leaderboard(&rec, &roster).is_empty());
    }
}
