//! Date and time utility functions
//!
//! Entities carry their dates as `YYYY-MM-DD` strings and their times of day
//! as `HH:MM` strings. This module parses and formats both and provides the
//! small amount of calendar arithmetic the insight endpoints need.

use chrono::{Datelike, Local, NaiveDate, NaiveTime};

/// Wire format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for times of day
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Parse a time string in HH:MM format to NaiveTime
pub fn parse_time(time_str: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(time_str, TIME_FORMAT)
}

/// Check whether a string is a well-formed YYYY-MM-DD date
pub fn is_valid_date(date_str: &str) -> bool {
    // chrono accepts unpadded and signed fields; only the canonical form is stored
    parse_date(date_str).is_ok_and(|d| format_ymd(d) == date_str)
}

/// Check whether a string is a well-formed HH:MM time
pub fn is_valid_time(time_str: &str) -> bool {
    parse_time(time_str).is_ok_and(|t| t.format(TIME_FORMAT).to_string() == time_str)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    format_ymd(today())
}

/// The date of the next occurrence of a yearly event on or after `from`.
///
/// Events on February 29th fall on February 28th in non-leap years. An event
/// that has not happened yet first occurs on its original date.
pub fn next_anniversary(original: NaiveDate, from: NaiveDate) -> NaiveDate {
    if original >= from {
        return original;
    }
    let this_year = anniversary_in_year(original, from.year());
    if this_year >= from {
        this_year
    } else {
        anniversary_in_year(original, from.year() + 1)
    }
}

fn anniversary_in_year(original: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, original.month(), original.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, original.month(), original.day() - 1))
        .unwrap_or(original)
}

/// `MM-DD` key used to order yearly events independently of their year
pub fn month_day_key(date_str: &str) -> &str {
    date_str.get(5..).unwrap_or(date_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unpadded_dates() {
        assert!(is_valid_date("2025-01-05"));
        assert!(!is_valid_date("2025-1-5"));
        assert!(!is_valid_date("2025-02-30"));
        assert!(!is_valid_date("yesterday"));
        assert!(!is_valid_date(" 2025-1-05"));
        assert!(!is_valid_date("+2025-1-05"));
        assert!(!is_valid_date("2025-01-05 "));
    }

    #[test]
    fn validates_times() {
        assert!(is_valid_time("07:30"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("7:30"));
        assert!(!is_valid_time(" 7:30"));
        assert!(!is_valid_time("+7:30"));
    }

    #[test]
    fn leap_day_anniversary_moves_to_feb_28() {
        let leap = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        let from = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(next_anniversary(leap, from), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn anniversary_already_passed_rolls_to_next_year() {
        let original = NaiveDate::from_ymd_opt(2015, 3, 1).unwrap();
        let from = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(next_anniversary(original, from), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }

    #[test]
    fn future_event_first_occurs_on_its_own_date() {
        let original = NaiveDate::from_ymd_opt(2030, 5, 1).unwrap();
        let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(next_anniversary(original, from), original);
    }

    #[test]
    fn month_day_key_strips_year() {
        assert_eq!(month_day_key("1999-12-24"), "12-24");
    }
}
