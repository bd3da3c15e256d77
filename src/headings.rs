//! ATX heading detection.
//!
//! Levels one to three are recognised. The hashes must start the line and be
//! followed by a single space; `####` and deeper are left as text.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> =
    lazy_regex!(r"^(#{1,3}) (.*)$", "heading regex should compile");

/// Parse a heading line into its level and text.
///
/// # Examples
///
/// ```
/// use mdbubble::headings::parse_heading;
/// assert_eq!(parse_heading("## Title"), Some((2, "Title")));
/// assert_eq!(parse_heading("#### Too deep"), None);
/// assert_eq!(parse_heading("#nospace"), None);
/// ```
#[must_use]
pub fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let cap = HEADING_RE.captures(line)?;
    let hashes = cap.get(1)?.as_str();
    let text = cap.get(2)?.as_str().trim();
    let level = u8::try_from(hashes.len()).ok()?;
    Some((level, text))
}
