//! Label formatting and text escaping for the newsletter.
//!
//! Everything here is a pure function over already-normalized data: ordinal
//! day suffixes, the long human-readable date label, the badge day number,
//! and the HTML escaping applied before text is embedded in the row
//! template.

use chrono::{Datelike, NaiveDateTime};

use crate::event::NormalizedEvent;

/// Appends the English ordinal suffix to a day number (1st, 2nd, 3rd, 4th,
/// 11th, 21st, ...).
pub fn ordinal(n: u32) -> String {
    let suffix = match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{}{}", n, suffix)
}

/// Formats the long date label for a start/end pair.
///
/// Same calendar day: `"Wed, January 1st 10:00am - 11:00am"`.
/// Different days: `"Wed, January 1st - 2nd"`.
pub fn create_long_date(start: NaiveDateTime, end: NaiveDateTime) -> String {
    if start.date() == end.date() {
        format!(
            "{}, {} {} {} - {}",
            start.format("%a"),
            start.format("%B"),
            ordinal(start.day()),
            time_label(start),
            time_label(end),
        )
    } else {
        format!(
            "{}, {} {} - {}",
            start.format("%a"),
            start.format("%B"),
            ordinal(start.day()),
            ordinal(end.day()),
        )
    }
}

/// 12-hour time without a leading zero, lowercase am/pm ("10:00am").
fn time_label(dt: NaiveDateTime) -> String {
    dt.format("%l:%M%P").to_string().trim().to_string()
}

/// The large day-number badge: `"1-2"` for multiday events, `"1"` otherwise.
pub fn badge_label(event: &NormalizedEvent) -> String {
    if event.multiday {
        format!("{}-{}", event.start_day(), event.end_day())
    } else {
        event.start_day().to_string()
    }
}

/// Escapes text for HTML display.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Escapes a description and converts its literal backslash-n sequences to
/// `<br/>` tags.
///
/// Upstream descriptions encode newlines as the two characters `\` `n`, not
/// as actual newline characters; only those two-character sequences become
/// line breaks.
pub fn description_html(description: &str) -> String {
    html_escape(description).replace("\\n", "<br/>")
}
