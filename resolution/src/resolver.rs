//! The resolution pipeline: collect, vote, verify, and optionally rank.

use crate::error::ResolutionError;
use crate::history::{collect_histories, distinct_roster, AggregatedHistory};
use crate::quorum;
use crate::rank::build_leaderboard;
use crate::report::{LeaderboardOutcome, LeaderboardReport, ValidationReport, ValidationRequest};
use crate::verify::{check_details, DetailChecks, TIME_TOLERANCE_SECS};

use std::collections::HashSet;
use tournify_provider::{MatchRecord, ProviderClient};
use tournify_types::PlayerIdentity;
use tracing::{debug, info};

/// Resolves which match a group of independently reporting players actually
/// played, then verifies and optionally ranks it.
///
/// Holds only the provider client. Every request builds its state from
/// scratch and discards it, so a single resolver is safely shared across
/// concurrent requests.
pub struct MatchResolver {
    client: ProviderClient,
}

impl MatchResolver {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }

    /// Run the validation pipeline: collect histories, find the quorum
    /// match, and check its canonical record against the caller's
    /// expectations.
    ///
    /// Hard failures are limited to invalid input (empty or single-player
    /// roster, rejected before any outbound call) and an unreachable
    /// canonical record. No quorum and failed detail checks come back as a
    /// report with `validation_passed == false`.
    pub async fn validate(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationReport, ResolutionError> {
        let roster = distinct_roster(&request.players);
        if roster.is_empty() {
            return Err(ResolutionError::EmptyRoster);
        }
        if roster.len() < 2 {
            return Err(ResolutionError::RosterTooSmall(roster.len()));
        }

        let histories = collect_histories(&self.client, &roster).await?;

        let Some(vote) = quorum::resolve(&histories) else {
            info!(players = roster.len(), "no match reached quorum");
            return Ok(ValidationReport::no_quorum(roster.len()));
        };
        debug!(
            match_id = %vote.match_id,
            support = vote.support,
            percent = vote.percent,
            "quorum reached"
        );

        let (players_with_match, players_without_match) =
            partition_by_membership(&histories, &vote.match_id);

        let record = self
            .client
            .match_record(&vote.match_id)
            .await
            .map_err(ResolutionError::CanonicalUnavailable)?;

        let checks = check_details(&record, request.expected_start_time, &request.expected_map);
        let message = detail_message(&vote.match_id, vote.percent, &checks, &record, request);

        Ok(ValidationReport {
            match_id: Some(vote.match_id),
            percentage_with_match: vote.percent,
            validation_passed: checks.verified(),
            time_ok: checks.time_ok,
            map_ok: checks.map_ok,
            players_with_match,
            players_without_match,
            message,
        })
    }

    /// Build the leaderboard for the match the roster is resolved to.
    ///
    /// Re-runs the whole validation pipeline; only a verified match is
    /// ranked. Ranking reads a second, independent canonical fetch so this
    /// operation stands on its own when called as a top-level request.
    pub async fn leaderboard(
        &self,
        request: &ValidationRequest,
    ) -> Result<LeaderboardOutcome, ResolutionError> {
        let report = self.validate(request).await?;
        if !report.validation_passed {
            return Ok(LeaderboardOutcome::Rejected(report));
        }
        let Some(match_id) = report.match_id.as_deref() else {
            return Ok(LeaderboardOutcome::Rejected(report));
        };

        let record = self
            .client
            .match_record(match_id)
            .await
            .map_err(ResolutionError::CanonicalUnavailable)?;

        let roster: HashSet<PlayerIdentity> =
            distinct_roster(&request.players).into_iter().collect();
        let leaderboard = build_leaderboard(&record, &roster);

        info!(
            match_id = %record.match_id,
            ranked = leaderboard.len(),
            "leaderboard built"
        );

        Ok(LeaderboardOutcome::Ranked(LeaderboardReport {
            message: format!(
                "ranked {} of {} requested players for match {} on {}",
                leaderboard.len(),
                roster.len(),
                record.match_id,
                record.map
            ),
            match_id: record.match_id,
            map: record.map,
            total_players: leaderboard.len(),
            leaderboard,
        }))
    }
}

/// Split the roster by whether each player's own reported history contains
/// the resolved match. The partitions are disjoint and together cover the
/// whole roster.
fn partition_by_membership(
    histories: &AggregatedHistory,
    match_id: &str,
) -> (Vec<PlayerIdentity>, Vec<PlayerIdentity>) {
    let mut with_match = Vec::new();
    let mut without_match = Vec::new();
    for (player, ids) in histories.iter() {
        if ids.iter().any(|id| id == match_id) {
            with_match.push(player.clone());
        } else {
            without_match.push(player.clone());
        }
    }
    (with_match, without_match)
}

fn detail_message(
    match_id: &str,
    percent: f64,
    checks: &DetailChecks,
    record: &MatchRecord,
    request: &ValidationRequest,
) -> String {
    if checks.verified() {
        return format!(
            "match {match_id} validated: {percent:.1}% of players report it, \
             start time and map confirmed"
        );
    }

    let mut problems = Vec::new();
    if checks.time_ok == Some(false) {
        problems.push(format!(
            "start time differs from the expected value by more than \
             {TIME_TOLERANCE_SECS} seconds"
        ));
    }
    if checks.map_ok == Some(false) {
        problems.push(format!(
            "map \"{}\" does not match expected \"{}\"",
            record.map, request.expected_map
        ));
    }
    format!(
        "match {match_id} found ({percent:.1}% of players report it) but failed \
         verification: {}",
        problems.join("; ")
    )
}
