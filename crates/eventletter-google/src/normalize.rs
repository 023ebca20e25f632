//! Raw event normalization.
//!
//! Fills missing text fields with their placeholder values, parses the
//! start/end strings into the newsletter timezone, and derives the multiday
//! flag via [`NormalizedEvent::from_range`].

use chrono::DateTime;
use chrono_tz::Tz;
use eventletter_core::NormalizedEvent;
use eventletter_core::time::{parse_event_date, parse_event_datetime};
use tracing::debug;

use crate::error::{FetchError, FetchResult};
use crate::raw_event::{RawEvent, RawEventTime};

/// Placeholder summary for events without one.
pub const NO_SUMMARY: &str = "NO SUMMARY";
/// Placeholder description for events without one.
pub const NO_DESCRIPTION: &str = "NO DESCRIPTION";
/// Placeholder location for events without one.
pub const NO_LOCATION: &str = "NO LOCATION";

/// Normalizes a batch of raw events, preserving order.
///
/// Fails on the first event whose start or end cannot be parsed.
pub fn normalize_events(raw_events: Vec<RawEvent>) -> FetchResult<Vec<NormalizedEvent>> {
    let events = raw_events
        .into_iter()
        .map(normalize_event)
        .collect::<FetchResult<Vec<_>>>()?;

    debug!("normalized {} events", events.len());
    Ok(events)
}

/// Normalizes a single raw event.
pub fn normalize_event(raw: RawEvent) -> FetchResult<NormalizedEvent> {
    let summary = raw.summary.unwrap_or_else(|| NO_SUMMARY.to_string());
    let description = raw.description.unwrap_or_else(|| NO_DESCRIPTION.to_string());
    let location = raw.location.unwrap_or_else(|| NO_LOCATION.to_string());

    let start = convert_time(&raw.start)?;
    let end = convert_time(&raw.end)?;

    Ok(NormalizedEvent::from_range(
        summary,
        description,
        location,
        start,
        end,
    ))
}

/// Parses a raw time value into the newsletter timezone.
fn convert_time(time: &RawEventTime) -> FetchResult<DateTime<Tz>> {
    let result = match time {
        RawEventTime::DateTime(value) => parse_event_datetime(value),
        RawEventTime::Date(value) => parse_event_date(value),
    };

    result.map_err(|e| {
        FetchError::invalid_response(format!("unparseable event time {:?}", e.value))
            .with_source(e)
    })
}
