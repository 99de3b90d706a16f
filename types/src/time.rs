//! Wire timestamps.
//!
//! Callers and the provider exchange ISO-8601 datetimes. Tournament tooling
//! often omits the offset, so values without one are read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid timestamp {value:?}: expected ISO-8601, e.g. 2025-08-09T15:58:27")]
pub struct InstantParseError {
    pub value: String,
}

/// Parse an ISO-8601 datetime, assuming UTC when no offset is present.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, InstantParseError> {
    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        return Ok(zoned.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| InstantParseError {
            value: raw.to_string(),
        })
}

/// Serde adapter for `DateTime<Utc>` fields using the flexible parse above.
/// Serializes as RFC 3339 with a `Z` suffix.
pub mod flexible_utc {
    use super::parse_instant;
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_instant(&raw).map_err(de::Error::custom)
    }
}
