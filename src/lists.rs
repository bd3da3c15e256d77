//! List item detection and grouping.
//!
//! Items must start at the left margin. Consecutive items of the same kind
//! form one list; an item of the other kind closes the current list and opens
//! a new one, and any other line closes the list. Lists never nest.

use std::sync::LazyLock;

use regex::Regex;

static BULLET_RE: LazyLock<Regex> =
    lazy_regex!(r"^[-*+] (.+)$", "bullet regex should compile");

static NUMBERED_RE: LazyLock<Regex> =
    lazy_regex!(r"^\d+\. (.+)$", "numbered item regex should compile");

/// Kind of list an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// HTML tag name for the list element.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Parse a list item line into its kind and content.
///
/// # Examples
///
/// ```
/// use mdbubble::lists::{ListKind, parse_item};
/// assert_eq!(parse_item("- milk"), Some((ListKind::Unordered, "milk")));
/// assert_eq!(parse_item("12. eggs"), Some((ListKind::Ordered, "eggs")));
/// assert_eq!(parse_item("-no space"), None);
/// ```
#[must_use]
pub fn parse_item(line: &str) -> Option<(ListKind, &str)> {
    let (kind, cap) = if let Some(cap) = BULLET_RE.captures(line) {
        (ListKind::Unordered, cap)
    } else {
        (ListKind::Ordered, NUMBERED_RE.captures(line)?)
    };
    let content = cap.get(1)?.as_str().trim();
    Some((kind, content))
}

/// Read a run of same-kind list items starting at `lines[start]`.
///
/// Returns the kind, the item contents and the index of the first line after
/// the run, or `None` when `lines[start]` is not a list item.
#[must_use]
pub fn take_list<'a>(lines: &[&'a str], start: usize) -> Option<(ListKind, Vec<&'a str>, usize)> {
    let (kind, first) = parse_item(lines.get(start)?)?;
    let mut items = vec![first];
    let mut idx = start + 1;
    while let Some((next_kind, content)) = lines.get(idx).and_then(|l| parse_item(l)) {
        if next_kind != kind {
            break;
        }
        items.push(content);
        idx += 1;
    }
    Some((kind, items, idx))
}
