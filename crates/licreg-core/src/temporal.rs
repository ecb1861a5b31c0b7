//! # Temporal Types: UTC Millisecond Timestamps
//!
//! Defines `Timestamp`, the instant type used for registration and expiry
//! dates. License dates are issued as Unix epoch milliseconds, so every
//! `Timestamp` is UTC and truncated to millisecond precision. Two timestamps
//! that print the same compare equal.
//!
//! Input offsets are accepted and converted to UTC. Display output is always
//! `YYYY-MM-DDTHH:MM:SS.sssZ`.

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LicregError;

/// A UTC timestamp, truncated to millisecond precision.
///
/// # Construction
///
/// - [`Timestamp::now()`]: current UTC time, truncated.
/// - [`Timestamp::from_utc()`]: from a `DateTime<Utc>`, truncating sub-milliseconds.
/// - [`Timestamp::from_epoch_millis()`]: from Unix epoch milliseconds.
/// - [`Timestamp::parse()`]: from an RFC 3339 string with any offset.
/// - [`Timestamp::parse_date()`]: from a `YYYY-MM-DD` calendar date at midnight UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "DateTime<Utc>")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to milliseconds.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-milliseconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(3))
    }

    /// Create a timestamp from Unix epoch milliseconds.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, LicregError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| {
                LicregError::InvalidArgument(format!("epoch millis out of range: {millis}"))
            })
    }

    /// Parse an RFC 3339 timestamp, converting any offset to UTC.
    pub fn parse(s: &str) -> Result<Self, LicregError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            LicregError::InvalidArgument(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self::from_utc(dt.with_timezone(&Utc)))
    }

    /// Parse a `YYYY-MM-DD` calendar date as midnight UTC.
    pub fn parse_date(s: &str) -> Result<Self, LicregError> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
            LicregError::InvalidArgument(format!("invalid calendar date {s:?}: {e}"))
        })?;
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
            LicregError::InvalidArgument(format!("no midnight for calendar date {s:?}"))
        })?;
        Ok(Self(midnight.and_utc()))
    }

    /// Parse either an RFC 3339 timestamp or a `YYYY-MM-DD` date.
    ///
    /// The error reported on failure is the RFC 3339 one unless the input
    /// is date-shaped (no `T` separator).
    pub fn parse_flexible(s: &str) -> Result<Self, LicregError> {
        match Self::parse(s) {
            Ok(ts) => Ok(ts),
            Err(_) if !s.contains('T') => Self::parse_date(s),
            Err(e) => Err(e),
        }
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in milliseconds.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Render as ISO 8601 with millisecond fraction and Z suffix
    /// (e.g., `2024-02-01T00:00:00.000Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_utc(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_now_has_no_submillis() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().nanosecond() % 1_000_000, 0);
    }

    #[test]
    fn test_from_utc_truncates_to_millis() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap();
        let ts = Timestamp::from_utc(dt.with_nanosecond(123_456_789).unwrap());
        assert_eq!(ts.as_datetime().nanosecond(), 123_000_000);
        assert_eq!(ts.to_iso8601(), "2024-01-15T12:30:45.123Z");
    }

    #[test]
    fn test_display_matches_iso8601() {
        let ts = Timestamp::from_utc(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(format!("{ts}"), "2024-02-01T00:00:00.000Z");
    }

    // ---- parse() ----

    #[test]
    fn test_parse_z_suffix() {
        let ts = Timestamp::parse("2024-01-15T12:00:00Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-15T12:00:00.000Z");
    }

    #[test]
    fn test_parse_converts_offset() {
        let ts = Timestamp::parse("2024-01-15T17:00:00+05:00").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-15T12:00:00.000Z");
    }

    #[test]
    fn test_parse_truncates_submillis() {
        let ts = Timestamp::parse("2024-01-15T12:00:00.123456Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-15T12:00:00.123Z");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Timestamp::parse("not-a-date").is_err());
        assert!(Timestamp::parse("2024-01-15").is_err());
        assert!(Timestamp::parse("").is_err());
    }

    // ---- parse_date() / parse_flexible() ----

    #[test]
    fn test_parse_date_is_midnight_utc() {
        let ts = Timestamp::parse_date("2024-03-01").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-03-01T00:00:00.000Z");
    }

    #[test]
    fn test_parse_date_rejects_impossible_date() {
        let err = Timestamp::parse_date("2024-02-30").unwrap_err();
        assert!(matches!(err, LicregError::InvalidArgument(_)));
    }

    #[test]
    fn test_parse_flexible_accepts_both_forms() {
        assert_eq!(
            Timestamp::parse_flexible("2024-01-01").unwrap(),
            Timestamp::parse("2024-01-01T00:00:00Z").unwrap()
        );
        assert_eq!(
            Timestamp::parse_flexible("2024-01-01T06:00:00+06:00").unwrap(),
            Timestamp::parse_date("2024-01-01").unwrap()
        );
    }

    #[test]
    fn test_parse_flexible_reports_rfc3339_error_for_datetime_input() {
        let err = Timestamp::parse_flexible("2024-01-01T99:00:00Z").unwrap_err();
        assert!(err.to_string().contains("RFC 3339"));
    }

    // ---- epoch ----

    #[test]
    fn test_epoch_millis() {
        let ts = Timestamp::from_epoch_millis(1_704_067_200_123).unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-01T00:00:00.123Z");
        assert_eq!(ts.epoch_millis(), 1_704_067_200_123);
    }

    #[test]
    fn test_epoch_millis_out_of_range() {
        assert!(Timestamp::from_epoch_millis(i64::MAX).is_err());
    }

    // ---- ordering ----

    #[test]
    fn test_ordering_at_millisecond_resolution() {
        let earlier = Timestamp::from_epoch_millis(1_704_067_200_000).unwrap();
        let later = Timestamp::from_epoch_millis(1_704_067_200_001).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_serde_roundtrip() {
        let ts = Timestamp::parse("2024-01-15T12:00:00.250Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }

    #[test]
    fn test_deserialize_truncates_submillis() {
        let text = "2024-02-01T00:00:00.000500Z";
        let decoded: Timestamp = serde_json::from_str(&format!("\"{text}\"")).unwrap();
        assert_eq!(decoded, Timestamp::parse(text).unwrap());
        assert_eq!(decoded.as_datetime().nanosecond(), 0);
    }
}
