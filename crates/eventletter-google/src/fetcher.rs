//! The high-level newsletter event fetch.
//!
//! [`EventFetcher`] ties the pieces together: it queries the community
//! calendar for everything from today onward and returns the normalized
//! event table, ready for rendering.

use std::time::Duration;

use chrono::{Local, NaiveDate};
use eventletter_core::NormalizedEvent;
use tracing::info;

use crate::client::CalendarApiClient;
use crate::error::FetchResult;
use crate::normalize::normalize_events;

/// The community events calendar.
pub const NEWSLETTER_CALENDAR_ID: &str = "s0bgkk5un6iq16k3521f76sckk@group.calendar.google.com";

/// Fixed offset used for the lower time bound, matching the calendar's
/// Pacific daylight-time offset.
const TIME_MIN_OFFSET: &str = "-07:00";

/// Default HTTP timeout for calendar requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches and normalizes upcoming events for the newsletter.
#[derive(Debug)]
pub struct EventFetcher {
    client: CalendarApiClient,
    calendar_id: String,
}

impl EventFetcher {
    /// Creates a fetcher for the community calendar with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: CalendarApiClient::new(api_key, DEFAULT_TIMEOUT),
            calendar_id: NEWSLETTER_CALENDAR_ID.to_string(),
        }
    }

    /// Overrides the calendar to fetch from.
    #[must_use]
    pub fn with_calendar_id(mut self, calendar_id: impl Into<String>) -> Self {
        self.calendar_id = calendar_id.into();
        self
    }

    /// Fetches all events starting today or later, normalized and in start
    /// order.
    pub async fn pull_events(&self) -> FetchResult<Vec<NormalizedEvent>> {
        let time_min = time_min_for(Local::now().date_naive());
        let raw_events = self.client.list_events(&self.calendar_id, &time_min).await?;
        let events = normalize_events(raw_events)?;

        info!(
            calendar = %self.calendar_id,
            count = events.len(),
            "pulled newsletter events"
        );
        Ok(events)
    }
}

/// The lower time bound for a fetch: midnight of `date` at the fixed offset.
fn time_min_for(date: NaiveDate) -> String {
    format!("{}T00:00:00{}", date, TIME_MIN_OFFSET)
}
