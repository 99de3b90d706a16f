//! Match resolution core.
//!
//! Resolves which match a group of independently reporting players actually
//! played when none of them is a trusted authority: collect every player's
//! self-reported history concurrently, find the match identifier a quorum of
//! the roster agrees on, verify that match's canonical record against the
//! caller's expectations, and optionally rank the roster by its statistics.

pub mod error;
pub mod history;
pub mod quorum;
pub mod rank;
pub mod report;
pub mod resolver;
pub mod verify;

pub use error::ResolutionError;
pub use history::{collect_histories, distinct_roster, AggregatedHistory};
pub use quorum::{required_support, QuorumVote, QUORUM_FRACTION};
pub use rank::{build_leaderboard, LeaderboardEntry};
pub use report::{LeaderboardOutcome, LeaderboardReport, ValidationReport, ValidationRequest};
pub use resolver::MatchResolver;
pub use verify::{check_details, DetailChecks, TIME_TOLERANCE_SECS};
