//! Horizontal rule detection.

use std::sync::LazyLock;

use regex::Regex;

pub(crate) static RULE_RE: LazyLock<Regex> =
    lazy_regex!(r"^---[ \t]*$", "rule regex should compile");

/// Return `true` if `line` is a `---` horizontal rule.
///
/// Only three dashes at the start of the line qualify. Longer runs and
/// asterisk or underscore rules are ordinary text in this dialect.
#[must_use]
pub fn is_rule(line: &str) -> bool {
    RULE_RE.is_match(line)
}
