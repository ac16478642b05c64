//! Second-precision UTC timestamps.
//!
//! Due dates only need to be self-consistent, so everything lives on one
//! absolute clock stored without an offset suffix. The format sorts
//! lexicographically in chronological order, which the due-date queries
//! rely on.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current time truncated to whole seconds.
pub fn now() -> DateTime<Utc> {
    Utc::now().with_nanosecond(0).unwrap()
}

/// Format a timestamp for storage.
pub fn format_ts(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp back to the shared clock.
pub fn parse_ts(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_parse_roundtrip() {
        let ts = now();
        let parsed = parse_ts(&format_ts(ts));
        assert_eq!(parsed, Some(ts));
    }

    #[test]
    fn test_now_has_no_subseconds() {
        assert_eq!(now().nanosecond(), 0);
    }

    #[test]
    fn test_string_order_matches_time_order() {
        let earlier = now();
        let later = earlier + Duration::days(3);
        assert!(format_ts(earlier) < format_ts(later));
    }

    #[test]
    fn test_parse_rejects_offset_suffix() {
        assert!(parse_ts("2026-01-01T12:00:00+02:00").is_none());
        assert!(parse_ts("garbage").is_none());
    }
}
