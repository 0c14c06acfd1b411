//! Date parsing for the record timestamp field.

use chrono::NaiveDateTime;

/// Known source formats. Ordered by how often they occur in the data, since
/// each value tries the formats in turn.
pub const KNOWN_DATE_FORMATS: &[&str] = &["%m/%d/%Y %I:%M:%S %p"];

/// Parse a record timestamp using the known source formats.
pub fn parse_record_datetime(value: &str) -> Option<NaiveDateTime> {
    parse_with_formats(value, KNOWN_DATE_FORMATS)
}

/// Try each strptime-style format in turn; `None` when nothing matches.
pub fn parse_with_formats(value: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parses_source_timestamp_format() {
        let parsed = parse_record_datetime("03/18/2015 07:44:58 PM").expect("valid timestamp");
        assert_eq!(parsed.year(), 2015);
        assert_eq!(parsed.month(), 3);
        assert_eq!(parsed.day(), 18);
        assert_eq!(parsed.hour(), 19);
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!(parse_record_datetime("2015-03-18").is_none());
        assert!(parse_record_datetime("18/03/2015 07:44:58 PM").is_none());
        assert!(parse_record_datetime("").is_none());
        assert!(parse_record_datetime("not a date").is_none());
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_record_datetime("02/30/2015 01:00:00 AM").is_none());
        assert!(parse_record_datetime("13/01/2015 01:00:00 AM").is_none());
    }
}
