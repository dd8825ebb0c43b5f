pub mod journal;
pub mod plant;

pub use journal::JournalRecord;
pub use plant::PlantRecord;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Fixed-width RFC 3339 in UTC, so stored timestamps sort lexically
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("Invalid timestamp in store: {}", raw))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Identifier for a new row
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_round_trip() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap();
        let formatted = format_timestamp(&ts);
        assert_eq!(formatted, "2026-03-01T08:30:00.000000Z");
        assert_eq!(parse_timestamp(&formatted).unwrap(), ts);
    }

    #[test]
    fn test_formatted_timestamps_sort_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap();
        let later = earlier + chrono::Duration::microseconds(1500);
        assert!(format_timestamp(&earlier) < format_timestamp(&later));
    }

    #[test]
    fn test_invalid_timestamp() {
        assert!(parse_timestamp("yesterday").is_err());
    }
}
