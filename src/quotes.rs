//! Blockquote lines.
//!
//! Each `>` line is its own quote; consecutive lines are not merged.

use std::sync::LazyLock;

use regex::Regex;

static QUOTE_RE: LazyLock<Regex> =
    lazy_regex!(r"^> ?(.*)$", "blockquote regex should compile");

/// Return the quoted text of a `> text` line.
///
/// # Examples
///
/// ```
/// use mdbubble::quotes::parse_quote;
/// assert_eq!(parse_quote("> Safe travels"), Some("Safe travels"));
/// assert_eq!(parse_quote(" > indented"), None);
/// ```
#[must_use]
pub fn parse_quote(line: &str) -> Option<&str> {
    QUOTE_RE
        .captures(line)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim_end())
}
