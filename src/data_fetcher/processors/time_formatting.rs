//! Finish time and date formatting, plus the date parsers used on sheet cells.

use chrono::{DateTime, Local, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::fmt::Display;

/// Long-form date pattern: day without padding, full month name, year.
const LONG_DATE_FORMAT: &str = "%-d %B %Y";

const DISPLAY_LOCALE: Locale = Locale::fr_FR;

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
];

const NAIVE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Formats a finish time given in milliseconds as `MM:SS.mmm`.
///
/// Minutes and seconds are zero-padded to two digits. Milliseconds are printed
/// as-is without padding, so 5 ms and 500 ms render as `.5` and `.500`.
/// Whole hours wrap around.
///
/// # Examples
///
/// ```
/// use tm_leaderboard::data_fetcher::processors::format_duration;
///
/// assert_eq!(format_duration(65000), "01:05.0");
/// assert_eq!(format_duration(599), "00:00.599");
/// ```
pub fn format_duration(ms: u64) -> String {
    let milliseconds = ms % 1000;
    let total_seconds = ms / 1000;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;

    format!("{minutes:02}:{seconds:02}.{milliseconds}")
}

/// Formats a timestamp as a French long-form date in the local time zone,
/// e.g. `10 mars 2024`.
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    format_date_in(timestamp, &Local)
}

/// Same as [`format_date`] but in an explicit time zone.
pub fn format_date_in<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .with_timezone(tz)
        .format_localized(LONG_DATE_FORMAT, DISPLAY_LOCALE)
        .to_string()
}

/// Formats a calendar day (season start or end) in the same long form.
pub fn format_day(day: NaiveDate) -> String {
    day.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(LONG_DATE_FORMAT, DISPLAY_LOCALE)
        .to_string()
}

/// Parses a finish timestamp.
///
/// Accepts RFC 3339 (`2024-03-10T18:22:11Z`, with or without offset), naive
/// date-times which are taken as local time, and bare dates which map to
/// midnight UTC.
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
        .or_else(|| {
            NAIVE_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
                .map(|day| day.and_time(NaiveTime::MIN).and_utc())
        })
}

/// Parses a season start or end date as written in the sheet.
pub fn parse_sheet_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NAIVE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        .or_else(|| parse_timestamp(input).map(|ts| ts.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_examples() {
        assert_eq!(format_duration(65000), "01:05.0");
        assert_eq!(format_duration(599), "00:00.599");
        assert_eq!(format_duration(0), "00:00.0");
    }

    #[test]
    fn test_format_duration_milliseconds_unpadded() {
        assert_eq!(format_duration(5), "00:00.5");
        assert_eq!(format_duration(50), "00:00.50");
        assert_eq!(format_duration(500), "00:00.500");
        assert_ne!(format_duration(5), format_duration(500));
    }

    #[test]
    fn test_format_duration_minutes_and_wrap() {
        assert_eq!(format_duration(125_042), "02:05.42");
        assert_eq!(format_duration(59 * 60_000 + 59_999), "59:59.999");
        // One hour and one second: hours are dropped
        assert_eq!(format_duration(3_601_000), "00:01.0");
    }

    #[test]
    fn test_format_duration_is_pure() {
        let first = format_duration(48_731);
        let second = format_duration(48_731);
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_date_french_long_form() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 10, 18, 22, 11).unwrap();
        assert_eq!(format_date_in(&ts, &Utc), "10 mars 2024");

        let ts = Utc.with_ymd_and_hms(2023, 12, 1, 9, 0, 0).unwrap();
        assert_eq!(format_date_in(&ts, &Utc), "1 décembre 2023");
    }

    #[test]
    fn test_format_day() {
        let day = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
        assert_eq!(format_day(day), "15 août 2024");
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 10, 18, 22, 11).unwrap();
        assert_eq!(parse_timestamp("2024-03-10T18:22:11Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-10T19:22:11+01:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-03-10"),
            Some(Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("hier"), None);
    }

    #[test]
    fn test_naive_timestamps_are_local_time() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(0, 30, 0)
            .unwrap();
        let expected = Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(parse_timestamp("2024-03-10 00:30:00"), Some(expected));
        let parsed = parse_timestamp("10/03/2024 00:30:00").unwrap();
        assert_eq!(parsed, expected);
        // Shown on the day it was written, whatever the local offset
        assert_eq!(format_date(&parsed), "10 mars 2024");
    }

    #[test]
    fn test_parse_sheet_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        assert_eq!(parse_sheet_date("2024-09-01"), Some(expected));
        assert_eq!(parse_sheet_date(" 01/09/2024 "), Some(expected));
        assert_eq!(parse_sheet_date("2024-09-01T10:00:00Z"), Some(expected));
        assert_eq!(parse_sheet_date("septembre"), None);
    }
}
