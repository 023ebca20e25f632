//! Event time parsing and localization.
//!
//! The calendar API returns start/end values either as a datetime string or
//! as a date-only string (all-day events). Both are brought into the single
//! newsletter timezone here:
//!
//! - RFC3339 values keep their explicit offset
//! - offset-less datetime strings are localized as UTC
//! - date-only values are taken as midnight UTC
//!
//! and the result is converted to [`NEWSLETTER_TZ`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use thiserror::Error;

/// The timezone all newsletter events are displayed in.
pub const NEWSLETTER_TZ: Tz = chrono_tz::US::Pacific;

/// An event time value that could not be parsed.
#[derive(Debug, Error)]
#[error("invalid event time {value:?}: {source}")]
pub struct TimeParseError {
    /// The raw value from the calendar API.
    pub value: String,
    #[source]
    source: chrono::ParseError,
}

impl TimeParseError {
    fn new(value: &str, source: chrono::ParseError) -> Self {
        Self {
            value: value.to_string(),
            source,
        }
    }
}

/// Parses a datetime string into the newsletter timezone.
///
/// Accepts RFC3339 (`2014-01-01T10:00:00-08:00`) and offset-less
/// (`2014-01-01T10:00:00`) forms; the latter is localized as UTC.
pub fn parse_event_datetime(value: &str) -> Result<DateTime<Tz>, TimeParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&NEWSLETTER_TZ));
    }

    match NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        Ok(naive) => Ok(naive.and_utc().with_timezone(&NEWSLETTER_TZ)),
        Err(source) => Err(TimeParseError::new(value, source)),
    }
}

/// Parses a date-only string (all-day event) into the newsletter timezone.
///
/// The date is taken as midnight UTC before conversion, matching how
/// datetime values without an offset are handled.
pub fn parse_event_date(value: &str) -> Result<DateTime<Tz>, TimeParseError> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(date
            .and_hms_opt(0, 0, 0)
            .expect("valid midnight")
            .and_utc()
            .with_timezone(&NEWSLETTER_TZ)),
        Err(source) => Err(TimeParseError::new(value, source)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn rfc3339_keeps_offset() {
        let dt = parse_event_datetime("2024-07-01T17:00:00-07:00").unwrap();
        // Already Pacific (PDT), so the wall clock is unchanged.
        assert_eq!(dt.hour(), 17);
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    }

    #[test]
    fn rfc3339_utc_converts_to_pacific() {
        let dt = parse_event_datetime("2024-07-01T17:00:00Z").unwrap();
        // July: PDT is UTC-7.
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn naive_datetime_localized_as_utc() {
        let dt = parse_event_datetime("2014-01-01T10:00:00").unwrap();
        // January: PST is UTC-8.
        assert_eq!(dt.hour(), 2);
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2014, 1, 1).unwrap());
    }

    #[test]
    fn date_only_is_midnight_utc() {
        let dt = parse_event_date("2014-01-01").unwrap();
        // Midnight UTC is the previous afternoon in Pacific.
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2013, 12, 31).unwrap());
        assert_eq!(dt.hour(), 16);
    }

    #[test]
    fn malformed_datetime_is_rejected() {
        let err = parse_event_datetime("NO DATE").unwrap_err();
        assert!(err.to_string().contains("NO DATE"));
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert!(parse_event_date("01/01/2014").is_err());
        assert!(parse_event_date("").is_err());
    }

    #[test]
    fn date_string_is_not_a_valid_datetime() {
        assert!(parse_event_datetime("2014-01-01").is_err());
    }
}
