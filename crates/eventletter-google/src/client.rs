//! Google Calendar API client.
//!
//! A low-level HTTP client for the Google Calendar API events.list endpoint,
//! handling API-key authentication, pagination, and response parsing.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{FetchError, FetchResult};
use crate::raw_event::{RawEvent, RawEventTime};

/// Base URL for Google Calendar API v3.
const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Google Calendar API client authenticated with an API key.
#[derive(Debug)]
pub struct CalendarApiClient {
    http_client: reqwest::Client,
    api_key: String,
}

impl CalendarApiClient {
    /// Creates a new client with the given API key.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http_client,
            api_key: api_key.into(),
        }
    }

    /// Lists all events from a calendar starting at `time_min`.
    ///
    /// Recurring events are expanded into single instances and the result is
    /// ordered by start time. All pages are followed; events appear in API
    /// order across page boundaries.
    pub async fn list_events(
        &self,
        calendar_id: &str,
        time_min: &str,
    ) -> FetchResult<Vec<RawEvent>> {
        let mut all_events = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let result = self
                .list_events_page(calendar_id, time_min, page_token.as_deref())
                .await?;

            append_page_events(&mut all_events, result.items)?;

            match result.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(
            "fetched {} events from calendar {}",
            all_events.len(),
            calendar_id
        );
        Ok(all_events)
    }

    /// Fetches a single page of events.
    async fn list_events_page(
        &self,
        calendar_id: &str,
        time_min: &str,
        page_token: Option<&str>,
    ) -> FetchResult<EventListResponse> {
        let url = format!(
            "{}/calendars/{}/events",
            CALENDAR_API_BASE,
            urlencoding::encode(calendar_id)
        );

        let mut request = self.http_client.get(&url).query(&[
            ("key", self.api_key.as_str()),
            ("timeMin", time_min),
            ("singleEvents", "true"),
            ("orderBy", "startTime"),
        ]);

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::network("request timeout")
            } else if e.is_connect() {
                FetchError::network(format!("connection failed: {}", e))
            } else {
                FetchError::network(format!("request failed: {}", e))
            }
        })?;

        let status = response.status();

        // Handle rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            return Err(FetchError::rate_limited(format!(
                "rate limit exceeded{}",
                retry_after
                    .map(|s| format!(", retry after {} seconds", s))
                    .unwrap_or_default()
            )));
        }

        // Handle authentication errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(FetchError::authentication("API key expired or invalid"));
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(FetchError::authorization("access denied to calendar"));
        }

        // Handle other errors
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::server(format!(
                "API error ({}): {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::network(format!("failed to read response: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| FetchError::invalid_response(format!("failed to parse response: {}", e)))
    }
}

/// Converts one page of API events and appends them to the accumulator.
pub(crate) fn append_page_events(
    all_events: &mut Vec<RawEvent>,
    items: Vec<ApiEvent>,
) -> FetchResult<()> {
    for event in items {
        all_events.push(convert_event(event)?);
    }
    Ok(())
}

/// Converts a Google Calendar API event to a [`RawEvent`].
fn convert_event(event: ApiEvent) -> FetchResult<RawEvent> {
    let start = convert_event_time(event.start, "start")?;
    let end = convert_event_time(event.end, "end")?;

    let mut raw_event = RawEvent::new(start, end);
    raw_event.summary = event.summary;
    raw_event.description = event.description;
    raw_event.location = event.location;

    Ok(raw_event)
}

/// Picks the `dateTime` or `date` value out of an API time field.
fn convert_event_time(time: Option<ApiEventTime>, field: &str) -> FetchResult<RawEventTime> {
    let Some(time) = time else {
        return Err(FetchError::invalid_response(format!(
            "event has no {} time",
            field
        )));
    };

    match (time.date_time, time.date) {
        (Some(dt), _) => Ok(RawEventTime::DateTime(dt)),
        (None, Some(date)) => Ok(RawEventTime::Date(date)),
        (None, None) => Err(FetchError::invalid_response(format!(
            "event {} time has neither dateTime nor date",
            field
        ))),
    }
}

/// Response from the events.list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EventListResponse {
    #[serde(default)]
    pub(crate) items: Vec<ApiEvent>,
    pub(crate) next_page_token: Option<String>,
}

/// A single event from the Google Calendar API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiEvent {
    summary: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start: Option<ApiEventTime>,
    end: Option<ApiEventTime>,
}

/// Event time from the API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEventTime {
    date: Option<String>,
    date_time: Option<String>,
}
