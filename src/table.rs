//! Pipe table detection.
//!
//! A table is recognised only by its separator row: a line containing `|`
//! heads a table when the very next line is made of pipes, dashes, colons and
//! whitespace, with at least one character that is not whitespace. Body rows
//! continue until the first line without a `|`.

use std::sync::LazyLock;

use regex::Regex;

pub(crate) static SEP_RE: LazyLock<Regex> =
    lazy_regex!(r"^[\s|:-]*[|:-][\s|:-]*$", "separator regex should compile");

/// Cells of a parsed table, not yet escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<'a> {
    pub header: Vec<&'a str>,
    pub rows: Vec<Vec<&'a str>>,
}

/// Split a table line into its non-empty, trimmed cells.
///
/// # Examples
///
/// ```
/// use mdbubble::table::split_cells;
/// assert_eq!(split_cells("| A | B |"), vec!["A", "B"]);
/// assert_eq!(split_cells("a||b"), vec!["a", "b"]);
/// ```
#[must_use]
pub fn split_cells(line: &str) -> Vec<&str> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Return `true` if `line` is a separator row such as `|---|:--:|`.
#[must_use]
pub fn is_separator(line: &str) -> bool {
    SEP_RE.is_match(line.trim())
}

/// Read a table starting at `lines[start]`.
///
/// Returns the table and the index of the first line after it, or `None`
/// when `lines[start]` is not followed by a separator row.
#[must_use]
pub fn take_table<'a>(lines: &[&'a str], start: usize) -> Option<(Table<'a>, usize)> {
    let head = *lines.get(start)?;
    if !head.contains('|') || !lines.get(start + 1).is_some_and(|l| is_separator(l)) {
        return None;
    }

    let body_start = start + 2;
    let body_len = lines[body_start..]
        .iter()
        .take_while(|line| line.contains('|'))
        .count();
    let rows = lines[body_start..body_start + body_len]
        .iter()
        .map(|line| split_cells(line))
        .collect();

    Some((
        Table {
            header: split_cells(head),
            rows,
        },
        body_start + body_len,
    ))
}
