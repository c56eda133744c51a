//! Time utility functions
//!
//! Timestamp formats used on the wire and in the Markdown export.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

/// Human-readable timestamp used for `last_updated` / `last_refresh`
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ISO-8601 local timestamp with microseconds, as reported by refresh and health
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn display_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(DISPLAY_FORMAT).to_string()
}

pub fn iso_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(ISO_FORMAT).to_string()
}

/// Current local time in display format
pub fn display_now() -> String {
    display_timestamp(&Local::now())
}

/// Current local time in ISO format
pub fn iso_now() -> String {
    iso_timestamp(&Local::now())
}

/// Y Combinator batch label for a date: `W{yy}` for January to June,
/// `S{yy}` for July to December.
pub fn yc_batch_label(date: NaiveDate) -> String {
    let year = date.year() % 100;
    let season = if date.month() <= 6 { 'W' } else { 'S' };
    format!("{}{:02}", season, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, Utc};

    fn fixed() -> DateTime<Utc> {
        let naive =
            NaiveDateTime::parse_from_str("2026-02-10 08:05:03", DISPLAY_FORMAT).unwrap();
        Utc.from_utc_datetime(&naive)
    }

    #[test]
    fn test_display_timestamp() {
        assert_eq!(display_timestamp(&fixed()), "2026-02-10 08:05:03");
    }

    #[test]
    fn test_iso_timestamp_has_microseconds() {
        assert_eq!(iso_timestamp(&fixed()), "2026-02-10T08:05:03.000000");
    }

    #[test]
    fn test_display_now_round_trips_through_parser() {
        let now = display_now();
        assert!(NaiveDateTime::parse_from_str(&now, DISPLAY_FORMAT).is_ok());
    }

    #[test]
    fn test_yc_batch_label() {
        let feb = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let june = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        let july = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        let early = NaiveDate::from_ymd_opt(2105, 11, 1).unwrap();

        assert_eq!(yc_batch_label(feb), "W26");
        assert_eq!(yc_batch_label(june), "W26");
        assert_eq!(yc_batch_label(july), "S26");
        assert_eq!(yc_batch_label(early), "S05");
    }
}
