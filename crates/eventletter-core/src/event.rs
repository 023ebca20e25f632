//! The normalized newsletter event.
//!
//! [`NormalizedEvent`] is one row of the table handed from the fetch side to
//! the renderer: plain text fields (already defaulted upstream), start/end in
//! the newsletter timezone, and the derived multiday flag.

use chrono::{DateTime, Datelike, Duration};
use chrono_tz::Tz;
use serde::Serialize;

/// One row of the normalized event table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedEvent {
    /// The event title.
    pub summary: String,
    /// The event description (may contain literal `\n` sequences and URLs).
    pub description: String,
    /// The event location.
    pub location: String,
    /// When the event starts, in the newsletter timezone.
    ///
    /// For multiday events this is the displayed start, one day after the
    /// actual start (see [`NormalizedEvent::from_range`]).
    pub start: DateTime<Tz>,
    /// When the event ends, in the newsletter timezone.
    pub end: DateTime<Tz>,
    /// Whether start and end fall on different calendar dates.
    pub multiday: bool,
}

impl NormalizedEvent {
    /// Builds a row from its fields, deriving the multiday flag.
    ///
    /// The flag is computed from the raw start/end dates first. Rows flagged
    /// multiday then have their start advanced by exactly one day; the day
    /// number shown in the newsletter badge is the second day of the event,
    /// not the arrival day. This is intentional display behavior.
    pub fn from_range(
        summary: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Self {
        let multiday = start.date_naive() != end.date_naive();
        let start = if multiday {
            start + Duration::days(1)
        } else {
            start
        };

        Self {
            summary: summary.into(),
            description: description.into(),
            location: location.into(),
            start,
            end,
            multiday,
        }
    }

    /// The day-of-month shown in the badge for the event start.
    pub fn start_day(&self) -> u32 {
        self.start.day()
    }

    /// The day-of-month of the event end.
    pub fn end_day(&self) -> u32 {
        self.end.day()
    }

    /// Abbreviated weekday of the displayed start ("Wed").
    pub fn weekday_abbr(&self) -> String {
        self.start.format("%a").to_string()
    }
}
