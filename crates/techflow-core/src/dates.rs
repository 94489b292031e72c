//! Due Date Handling
//!
//! The backend stores due dates either as a bare calendar date or as a full
//! timestamp. Both forms are accepted; naive values are taken as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Format used by `<input type="date">` and the task payload
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse a due date as delivered by the backend.
pub fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Calendar-date-only value for an editable date field, empty if unparseable
pub fn to_date_input(raw: &str) -> String {
    parse_due_date(raw)
        .map(|ts| ts.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Today's date as a date field value
pub fn today_input(now: DateTime<Utc>) -> String {
    now.format(DATE_INPUT_FORMAT).to_string()
}

/// Human readable due date for lists; falls back to the raw value
pub fn display_due_date(raw: &str) -> String {
    match parse_due_date(raw) {
        Some(ts) => ts.format("%b %d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Whether a date field value is a valid calendar date
pub fn is_valid_date_input(value: &str) -> bool {
    NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_formats() {
        let midnight = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_due_date("2020-01-01"), Some(midnight));
        assert_eq!(parse_due_date("2020-01-01T00:00:00.000Z"), Some(midnight));
        assert_eq!(parse_due_date("2020-01-01T00:00:00"), Some(midnight));
        assert_eq!(
            parse_due_date("2020-01-01T05:00:00+05:00"),
            Some(midnight)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("next friday"), None);
        assert_eq!(parse_due_date("2020-13-45"), None);
    }

    #[test]
    fn test_to_date_input() {
        assert_eq!(to_date_input("2024-06-30T22:15:00Z"), "2024-06-30");
        assert_eq!(to_date_input("2024-06-30"), "2024-06-30");
        assert_eq!(to_date_input("soon"), "");
    }

    #[test]
    fn test_display_falls_back_to_raw() {
        assert_eq!(display_due_date("2024-06-30"), "Jun 30, 2024");
        assert_eq!(display_due_date("soon"), "soon");
    }
}
