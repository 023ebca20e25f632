//! Raw event representation from the calendar API.
//!
//! [`RawEvent`] carries an event exactly as the API described it: optional
//! text fields and unparsed start/end strings. Defaulting and time parsing
//! happen during normalization.

/// An event start or end as returned by the API.
///
/// Timed events carry a `dateTime` string, all-day events a date-only
/// string. The value is kept unparsed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEventTime {
    /// A datetime string, usually RFC3339 (`2014-01-01T10:00:00-08:00`).
    DateTime(String),
    /// A date-only string (`2014-01-01`) for all-day events.
    Date(String),
}

impl RawEventTime {
    /// The unparsed string value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::DateTime(s) | Self::Date(s) => s,
        }
    }
}

/// A calendar event as fetched, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    /// The event title, if the API sent one.
    pub summary: Option<String>,
    /// The event description, if the API sent one.
    pub description: Option<String>,
    /// The event location, if the API sent one.
    pub location: Option<String>,
    /// When the event starts.
    pub start: RawEventTime,
    /// When the event ends.
    pub end: RawEventTime,
}

impl RawEvent {
    /// Creates a raw event with the given start and end and no text fields.
    pub fn new(start: RawEventTime, end: RawEventTime) -> Self {
        Self {
            summary: None,
            description: None,
            location: None,
            start,
            end,
        }
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
