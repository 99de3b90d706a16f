//! Quorum vote over independently reported histories.
//!
//! No single player is trusted: a match identifier counts as the match the
//! group actually played only when enough of the roster's self-reported
//! histories name it. A pure function of the aggregate, so resolving the
//! same histories twice yields the same vote.

use crate::history::AggregatedHistory;
use std::collections::HashMap;

/// Fraction of the roster that must report a match for it to win.
pub const QUORUM_FRACTION: f64 = 0.70;

/// The winning match identifier and how much of the roster backed it.
#[derive(Clone, Debug, PartialEq)]
pub struct QuorumVote {
    pub match_id: String,
    /// Number of history entries naming this match.
    pub support: usize,
    /// Support as a percentage of the distinct roster size.
    pub percent: f64,
}

/// History entries needed for a match to win, for a roster of `n` players.
pub fn required_support(n: usize) -> usize {
    (n as f64 * QUORUM_FRACTION).floor() as usize
}

/// Find the match identifier backed by at least a quorum of the roster.
///
/// All histories are flattened into one multiset and counted per
/// identifier. Candidates are ranked by count descending; ties go to the
/// identifier seen first across the flattened histories, which keeps the
/// winner reproducible for a given aggregate. Returns `None` when nothing
/// reaches the threshold.
pub fn resolve(history: &AggregatedHistory) -> Option<QuorumVote> {
    let n = history.player_count();
    if n == 0 {
        return None;
    }
    let required = required_support(n);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut candidates: Vec<&str> = Vec::new();
    for (_, ids) in history.iter() {
        for id in ids {
            let count = counts.entry(id.as_str()).or_insert(0);
            if *count == 0 {
                candidates.push(id.as_str());
            }
            *count += 1;
        }
    }

    // Stable sort: equal counts keep first-encountered order.
    candidates.sort_by_key(|id| std::cmp::Reverse(counts[id]));

    let winner = candidates.into_iter().find(|id| counts[id] >= required)?;
    let support = counts[winner];

    Some(QuorumVote {
        match_id: winner.to_string(),
        support,
        percent: support as f64 / n as f64 * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tournify_types::PlayerIdentity;

    fn player(n: u32) -> PlayerIdentity {
        PlayerIdentity::new(format!("player-{n}"), format!("{n:04}"), "ap", "pc")
    }

    fn aggregate(histories: Vec<Vec<&str>>) -> AggregatedHistory {
        AggregatedHistory::from_entries(
            histories
                .into_iter()
                .enumerate()
                .map(|(i, ids)| {
                    (
                        player(i as u32),
                        ids.into_iter().map(String::from).collect(),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn required_support_floors() {
        assert_eq!(required_support(1), 0);
        assert_eq!(required_support(2), 1);
        assert_eq!(required_support(3), 2);
        assert_eq!(required_support(5), 3);
        assert_eq!(required_support(7), 4);
        assert_eq!(required_support(10), 7);
    }

    #[test]
    fn seven_of_ten_reach_quorum() {
        let mut histories: Vec<Vec<&str>> = (0..7).map(|_| vec!["M1"]).collect();
        histories.extend((0..3).map(|_| vec![]));

        let vote = resolve(&aggregate(histories)).unwrap();
        assert_eq!(vote.match_id, "M1");
        assert_eq!(vote.support, 7);
        assert!((vote.percent - 70.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_histories_find_nothing() {
        let vote = resolve(&aggregate(vec![vec!["a"], vec!["b"], vec!["c"]]));
        assert!(vote.is_none());
    }

    #[test]
    fn exactly_the_threshold_is_enough() {
        // N = 3, required = 2.
        let vote = resolve(&aggregate(vec![vec!["M1"], vec!["M1"], vec!["other"]])).unwrap();
        assert_eq!(vote.match_id, "M1");
        assert_eq!(vote.support, 2);
    }

    #[test]
    fn ties_break_by_first_encounter() {
        // "early" and "late" both have support 2; "early" appears first in
        // the flattened multiset and must win.
        let vote = resolve(&aggregate(vec![
            vec!["early", "late"],
            vec!["late", "early"],
        ]))
        .unwrap();
        assert_eq!(vote.match_id, "early");
    }

    #[test]
    fn single_player_trivially_wins_with_required_zero() {
        // floor(1 × 0.7) = 0 — vacuous quorum; callers reject N < 2 upstream.
        let vote = resolve(&aggregate(vec![vec!["only"]])).unwrap();
        assert_eq!(vote.match_id, "only");
        assert_eq!(vote.support, 1);
    }

    #[test]
    fn no_identifiers_at_all_finds_nothing() {
        assert!(resolve(&aggregate(vec![vec![], vec![]])).is_none());
    }

    #[test]
    fn resolve_is_a_pure_function_of_the_aggregate() {
        let histories = aggregate(vec![vec!["M1", "M2"], vec!["M1"], vec!["M2", "M1"]]);
        let first = resolve(&histories).unwrap();
        let second = resolve(&histories).unwrap();
        assert_eq!(first, second);
    }
}
