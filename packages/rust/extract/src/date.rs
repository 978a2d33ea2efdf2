//! Publish-date discovery around the matched headline.
//!
//! Dates live near headlines: in a byline, a sibling span, a header
//! wrapper. The scan starts at the headline's parent and widens one
//! ancestor at a time, so the nearest date wins before the page's footer
//! ever gets a say.

use chrono::{DateTime, Datelike, NaiveDate};
use ego_tree::NodeRef;
use scraper::Node;
use tracing::debug;

use crate::dom::sole_text;

/// Formats tried after RFC 3339 and RFC 2822, most specific first.
/// Trailing time-of-day fields are parsed and ignored.
const DATE_FORMATS: [&str; 10] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%B %d, %Y",
    "%b %d, %Y",
    "%b. %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
];

/// Parse a candidate string as a calendar date.
///
/// `None` means "not a date"; the scan swallows it and moves on.
pub(crate) fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(input) {
        return Some(parsed.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
}

/// Long-form rendering: "March 5, 2019", day never zero-padded.
pub(crate) fn format_long(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

/// Search expanding ancestor scopes of `headline` for a parsable date.
///
/// Within each scope, element descendants are visited in document order
/// and evaluated through their sole text. Returns `None` once the root
/// is exhausted without a hit.
pub(crate) fn resolve_date(headline: NodeRef<'_, Node>) -> Option<String> {
    let mut scope = headline.parent();
    while let Some(space) = scope {
        for node in space.descendants().skip(1) {
            if !node.value().is_element() {
                continue;
            }
            let Some(candidate) = sole_text(node) else {
                continue;
            };
            if let Some(date) = parse_date(&candidate) {
                debug!(raw = %candidate, "date candidate parsed");
                return Some(format_long(date));
            }
        }
        scope = space.parent();
    }
    None
}
