//! Timestamp formatting for feed documents.
//!
//! Atom wants RFC 3339 instants, and feed readers additionally expect a
//! stable width: the formatter always emits a numeric offset (`+00:00`,
//! never `Z`) and no sub-second digits.

use chrono::{DateTime, FixedOffset, Utc};

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS±HH:MM`.
///
/// Total over all valid timestamps. The offset is whatever the value
/// carries, so UTC instants render with `+00:00`.
pub fn format_rfc3339(ts: DateTime<FixedOffset>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// The Unix epoch at offset `+00:00`.
///
/// Floor value when accumulating a feed's `updated`; an empty feed
/// reports `1970-01-01T00:00:00+00:00` rather than "now".
pub fn unix_epoch() -> DateTime<FixedOffset> {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_utc_as_numeric_offset() {
        let ts = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
            .unwrap();
        assert_eq!(format_rfc3339(ts), "2023-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_format_keeps_original_offset() {
        let ts = FixedOffset::west_opt(7 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 15, 14, 30, 45)
            .unwrap();
        assert_eq!(format_rfc3339(ts), "2024-06-15T14:30:45-07:00");

        let ts = FixedOffset::east_opt(5 * 3600 + 30 * 60)
            .unwrap()
            .with_ymd_and_hms(2024, 12, 31, 23, 59, 59)
            .unwrap();
        assert_eq!(format_rfc3339(ts), "2024-12-31T23:59:59+05:30");
    }

    #[test]
    fn test_format_drops_subseconds() {
        let ts = "2024-06-15T14:30:45.123456789+02:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        assert_eq!(format_rfc3339(ts), "2024-06-15T14:30:45+02:00");
    }

    #[test]
    fn test_format_is_fixed_width() {
        let samples = [
            "1970-01-01T00:00:00+00:00",
            "2024-06-15T14:30:45-07:00",
            "0099-02-03T04:05:06+01:00",
        ];
        for sample in samples {
            let ts = sample.parse::<DateTime<FixedOffset>>().unwrap();
            assert_eq!(format_rfc3339(ts).len(), 25, "width changed for {sample}");
        }
    }

    #[test]
    fn test_unix_epoch_formats_to_epoch_string() {
        assert_eq!(format_rfc3339(unix_epoch()), "1970-01-01T00:00:00+00:00");
    }
}
