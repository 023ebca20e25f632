//! Event link extraction from description text.
//!
//! Event descriptions usually carry a sign-up or detail URL in free text.
//! The first URL found becomes the row's link; rows without one link to the
//! newsletter homepage instead.

use std::sync::LazyLock;

use regex::Regex;

/// Fallback link for events whose description contains no URL.
pub const DEFAULT_EVENT_URL: &str = "http://www.sdanalytics.org/";

/// Regex for the first URL in free text: scheme, then letters, digits, the
/// common URL punctuation set, and percent-encoded octets.
static EVENT_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+")
        .expect("invalid event URL regex")
});

/// Returns the first URL in `text`, or [`DEFAULT_EVENT_URL`] if none exists.
pub fn extract_event_link(text: &str) -> String {
    EVENT_URL_REGEX
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_EVENT_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_url_exactly() {
        let text = "Sign up at https://example.com/signup?id=42 before Friday";
        assert_eq!(extract_event_link(text), "https://example.com/signup?id=42");
    }

    #[test]
    fn first_url_wins() {
        let text = "Main: http://one.example.org/a Backup: http://two.example.org/b";
        assert_eq!(extract_event_link(text), "http://one.example.org/a");
    }

    #[test]
    fn accepts_percent_encoded_octets() {
        let text = "Map: https://maps.example.com/place/Main%20St";
        assert_eq!(
            extract_event_link(text),
            "https://maps.example.com/place/Main%20St"
        );
    }

    #[test]
    fn plain_http_scheme() {
        let text = "see http://example.org/";
        assert_eq!(extract_event_link(text), "http://example.org/");
    }

    #[test]
    fn falls_back_to_homepage() {
        assert_eq!(
            extract_event_link("no links in here"),
            DEFAULT_EVENT_URL
        );
        assert_eq!(extract_event_link(""), DEFAULT_EVENT_URL);
    }

    #[test]
    fn stops_at_whitespace() {
        let text = "https://example.com/page and more words";
        assert_eq!(extract_event_link(text), "https://example.com/page");
    }
}
