//! Google Calendar fetching and normalization for the newsletter.
//!
//! The flow is [`EventFetcher::pull_events`]: query the events.list endpoint
//! page by page, convert each item to a [`RawEvent`], then normalize into
//! [`eventletter_core::NormalizedEvent`] rows for rendering.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod normalize;
pub mod raw_event;

pub use client::CalendarApiClient;
pub use error::{FetchError, FetchErrorCode, FetchResult};
pub use fetcher::{EventFetcher, NEWSLETTER_CALENDAR_ID};
pub use normalize::{NO_DESCRIPTION, NO_LOCATION, NO_SUMMARY, normalize_event, normalize_events};
pub use raw_event::{RawEvent, RawEventTime};
