//! Newsletter table rendering.
//!
//! Each normalized event is rendered through the row template, the resulting
//! fragment is re-parsed, stripped of comments, and appended under a shared
//! `<table><tbody>` element, which is then serialized pretty-printed.

use std::io::Cursor;
use std::string::FromUtf8Error;

use askama::Template;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use thiserror::Error;
use tracing::debug;

use crate::event::NormalizedEvent;
use crate::format::{badge_label, create_long_date, description_html, html_escape};
use crate::links::extract_event_link;

/// The "add to calendar" link shown on every row.
pub const NEWSLETTER_CALENDAR_LINK: &str = "http://www.sdanalytics.org/#events";

/// Errors that can occur while rendering the newsletter table.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Row template rendering failed.
    #[error("failed to render event row template: {0}")]
    Template(#[from] askama::Error),

    /// A rendered row fragment was not well-formed markup.
    #[error("failed to parse event row fragment: {0}")]
    Fragment(#[from] quick_xml::Error),

    /// Writing the assembled table failed.
    #[error("failed to write newsletter table: {0}")]
    Io(#[from] std::io::Error),

    /// The assembled table was not valid UTF-8.
    #[error("newsletter table is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// One rendered row of the newsletter table.
///
/// The `summary_title`, `description_text` and `description_subtext` fields
/// are escaped before construction and passed through the template verbatim.
#[derive(Template)]
#[template(path = "event_row.html")]
struct EventRow {
    icon_small_text: String,
    icon_large_text: String,
    summary_title: String,
    summary_link: String,
    summary_subtitle: String,
    description_text: String,
    description_subtext: String,
    calendar_link: String,
}

impl EventRow {
    fn from_event(event: &NormalizedEvent) -> Self {
        Self {
            icon_small_text: event.weekday_abbr(),
            icon_large_text: badge_label(event),
            summary_title: html_escape(&event.summary),
            summary_link: extract_event_link(&event.description),
            summary_subtitle: create_long_date(
                event.start.naive_local(),
                event.end.naive_local(),
            ),
            description_text: description_html(&event.description),
            description_subtext: html_escape(&event.location),
            calendar_link: NEWSLETTER_CALENDAR_LINK.to_string(),
        }
    }
}

/// Renders the events into a pretty-printed HTML `<table>` fragment.
///
/// Rows appear in input order; comments in the row template are stripped
/// from the output.
pub fn events_to_html(events: &[NormalizedEvent]) -> Result<String, RenderError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Start(BytesStart::new("table")))?;
    writer.write_event(Event::Start(BytesStart::new("tbody")))?;

    for event in events {
        let fragment = EventRow::from_event(event).render()?;
        append_fragment(&mut writer, &fragment)?;
    }

    writer.write_event(Event::End(BytesEnd::new("tbody")))?;
    writer.write_event(Event::End(BytesEnd::new("table")))?;

    debug!(rows = events.len(), "rendered newsletter table");

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

/// Re-parses a rendered row fragment and appends its nodes to the table,
/// dropping comment nodes.
fn append_fragment(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    fragment: &str,
) -> Result<(), RenderError> {
    let mut reader = Reader::from_str(fragment);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Comment(_) => {}
            event => writer.write_event(event)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::NEWSLETTER_TZ;
    use chrono::TimeZone;

    fn event(
        summary: &str,
        description: &str,
        location: &str,
        start_day: u32,
        end_day: u32,
    ) -> NormalizedEvent {
        NormalizedEvent::from_range(
            summary,
            description,
            location,
            NEWSLETTER_TZ
                .with_ymd_and_hms(2014, 1, start_day, 10, 0, 0)
                .unwrap(),
            NEWSLETTER_TZ
                .with_ymd_and_hms(2014, 1, end_day, 11, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn renders_table_structure() {
        let events = vec![event("Talk", "A talk", "Downtown", 1, 1)];
        let html = events_to_html(&events).unwrap();

        assert!(html.starts_with("<table>"));
        assert!(html.trim_end().ends_with("</table>"));
        assert!(html.contains("<tbody>"));
        assert!(html.contains("<tr>"));
        assert!(html.contains(">Talk</a>"));
        assert!(html.contains("Wed, January 1st 10:00am - 11:00am"));
    }

    #[test]
    fn one_row_per_event_in_input_order() {
        let events = vec![
            event("First", "", "", 1, 1),
            event("Second", "", "", 8, 8),
            event("Third", "", "", 15, 15),
        ];
        let html = events_to_html(&events).unwrap();

        assert_eq!(html.matches("<tr>").count(), 3);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        let third = html.find("Third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn empty_input_renders_empty_table() {
        let html = events_to_html(&[]).unwrap();
        assert!(html.contains("<table>"));
        assert!(!html.contains("<tr>"));
    }

    #[test]
    fn summary_and_location_are_escaped() {
        let events = vec![event("Rust & <Friends>", "", "Joe's \"Bar\"", 1, 1)];
        let html = events_to_html(&events).unwrap();

        assert!(html.contains("Rust &amp; &lt;Friends&gt;"));
        assert!(html.contains("Joe&#x27;s &quot;Bar&quot;"));
        assert!(!html.contains("<Friends>"));
    }

    #[test]
    fn template_comments_are_stripped() {
        let events = vec![event("Talk", "", "", 1, 1)];
        let html = events_to_html(&events).unwrap();
        assert!(!html.contains("<!--"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let events = vec![
            event("Talk", "Come to https://example.com/talk", "Downtown", 1, 1),
            event("Hackathon", "", "", 10, 12),
        ];
        assert_eq!(
            events_to_html(&events).unwrap(),
            events_to_html(&events).unwrap()
        );
    }

    #[test]
    fn row_links_to_url_from_description() {
        let events = vec![event("Talk", "RSVP at https://example.com/rsvp today", "", 1, 1)];
        let html = events_to_html(&events).unwrap();
        assert!(html.contains(r#"href="https://example.com/rsvp""#));
    }

    #[test]
    fn row_without_url_links_to_homepage() {
        let events = vec![event("Talk", "no links here", "", 1, 1)];
        let html = events_to_html(&events).unwrap();
        assert!(html.contains(r#"href="http://www.sdanalytics.org/""#));
    }

    #[test]
    fn every_row_carries_the_calendar_link() {
        let events = vec![event("A", "", "", 1, 1), event("B", "", "", 2, 2)];
        let html = events_to_html(&events).unwrap();
        assert_eq!(
            html.matches(r#"href="http://www.sdanalytics.org/#events""#)
                .count(),
            2
        );
    }

    #[test]
    fn multiday_event_shows_day_range_badge() {
        let events = vec![event("Hackathon", "", "", 1, 3)];
        let html = events_to_html(&events).unwrap();

        // Displayed start is the second day, so the badge starts there.
        assert!(html.contains(">2-3</div>"));
        assert!(html.contains("Thu, January 2nd - 3rd"));
    }

    #[test]
    fn literal_backslash_n_renders_as_line_break() {
        let events = vec![event("Talk", "line one\\nline two", "", 1, 1)];
        let html = events_to_html(&events).unwrap();
        assert!(html.contains("<br/>"));
        assert!(!html.contains("\\n"));
    }
}
