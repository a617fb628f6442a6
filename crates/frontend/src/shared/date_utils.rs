/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Format a server timestamp to DD.MM.YYYY HH:MM:SS for display.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// Format a date to DD.MM.YYYY for display.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format a date the way `<input type="date">` expects its value.
pub fn input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse the value emitted by `<input type="date">`. Empty input reads as
/// no selection.
pub fn parse_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Earliest date a display slot can be booked for. Creatives need a review
/// pass before going on screen, so same-day slots are not offered.
pub fn earliest_display_date(today: NaiveDate) -> NaiveDate {
    today + Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let dt = DateTime::parse_from_rfc3339("2026-03-15T14:02:26Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(dt), "15.03.2026 14:02:26");
    }

    #[test]
    fn test_date_input_round_trip() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(input_value(date), "2026-03-15");
        assert_eq!(parse_input_value("2026-03-15"), Some(date));
        assert_eq!(parse_input_value(""), None);
        assert_eq!(parse_input_value("not a date"), None);
        assert_eq!(format_date(date), "15.03.2026");
    }

    #[test]
    fn test_earliest_display_date_is_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(
            earliest_display_date(today),
            NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()
        );
    }
}
