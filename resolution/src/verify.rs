//! Canonical-record verification against caller expectations.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tournify_provider::MatchRecord;

/// Allowed start-time skew in seconds. The boundary is inclusive.
pub const TIME_TOLERANCE_SECS: i64 = 300;

/// Outcome of the two independent detail checks.
///
/// `None` means the check could not be evaluated (no canonical record to
/// check against), which is distinct from a determinate failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DetailChecks {
    pub time_ok: Option<bool>,
    pub map_ok: Option<bool>,
}

impl DetailChecks {
    /// Both checks evaluated and passed.
    pub fn verified(&self) -> bool {
        self.time_ok == Some(true) && self.map_ok == Some(true)
    }

    /// Neither check could be evaluated.
    pub fn indeterminate() -> Self {
        Self {
            time_ok: None,
            map_ok: None,
        }
    }
}

/// Check the canonical record against the caller's expected start time and
/// map. The axes are independent so callers can tell "right map, wrong
/// time" apart from "wrong map, right time".
pub fn check_details(
    record: &MatchRecord,
    expected_start: DateTime<Utc>,
    expected_map: &str,
) -> DetailChecks {
    let skew = (record.started_at - expected_start).num_seconds().abs();
    let time_ok = skew <= TIME_TOLERANCE_SECS;
    let map_ok = record.map.to_lowercase() == expected_map.to_lowercase();

    DetailChecks {
        time_ok: Some(time_ok),
        map_ok: Some(map_ok),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn record(map: &str, started_at: DateTime<Utc>) -> MatchRecord {
        MatchRecord {
            match_id: "scrim-1".to_string(),
            started_at,
            map: map.to_string(),
            region: "ap".to_string(),
            platform: "pc".to_string(),
            players: Vec::new(),
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 9, 15, 58, 27).unwrap()
    }

    #[test]
    fn time_tolerance_is_inclusive_at_300_seconds() {
        let rec = record("Ascent", start());

        let exact = check_details(&rec, start() + Duration::seconds(300), "Ascent");
        assert_eq!(exact.time_ok, Some(true));

        let over = check_details(&rec, start() + Duration::seconds(301), "Ascent");
        assert_eq!(over.time_ok, Some(false));
    }

    #[test]
    fn time_difference_is_absolute() {
        let rec = record("Ascent", start());

        let behind = check_details(&rec, start() - Duration::seconds(300), "Ascent");
        assert_eq!(behind.time_ok, Some(true));

        let far_behind = check_details(&rec, start() - Duration::seconds(301), "Ascent");
        assert_eq!(far_behind.time_ok, Some(false));
    }

    #[test]
    fn map_comparison_ignores_case() {
        let rec = record("Ascent", start());
        assert_eq!(check_details(&rec, start(), "ascent").map_ok, Some(true));
        assert_eq!(check_details(&rec, start(), "ASCENT").map_ok, Some(true));
        assert_eq!(check_details(&rec, start(), "Ascent").map_ok, Some(true));
    }

    #[test]
    fn wrong_map_right_time_is_distinguishable() {
        let rec = record("Bind", start());
        let checks = check_details(&rec, start(), "Ascent");
        assert_eq!(checks.time_ok, Some(true));
        assert_eq!(checks.map_ok, Some(false));
        assert!(!checks.verified());
    }

    #[test]
    fn verified_requires_both_axes() {
        let rec = record("Ascent", start());
        assert!(check_details(&rec, start(), "Ascent").verified());
        assert!(!check_details(&rec, start() + Duration::seconds(999), "Ascent").verified());
    }

    #[test]
    fn indeterminate_is_not_verified() {
        let checks = DetailChecks::indeterminate();
        assert_eq!(checks.time_ok, None);
        assert_eq!(checks.map_ok, None);
        assert!(!checks.verified());
    }
}
