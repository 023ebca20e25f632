//! Core types: events, time localization, links, formatting, rendering

pub mod event;
pub mod format;
pub mod links;
pub mod render;
pub mod time;
pub mod tracing;

pub use event::NormalizedEvent;
pub use format::{badge_label, create_long_date, description_html, html_escape, ordinal};
pub use links::{DEFAULT_EVENT_URL, extract_event_link};
pub use render::{NEWSLETTER_CALENDAR_LINK, RenderError, events_to_html};
pub use time::{NEWSLETTER_TZ, TimeParseError, parse_event_date, parse_event_datetime};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
