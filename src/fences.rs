//! Fenced code block detection.
//!
//! A fence is a region opened by a run of three or more backticks and closed
//! by the next run at least as long. Regions may start and end anywhere in the
//! input, including mid-line, and span newlines. A fence that never closes is
//! not a code block; its text is handed back to the caller unchanged.

use std::sync::LazyLock;

use regex::Regex;

static BACKTICK_RUN_RE: LazyLock<Regex> =
    lazy_regex!(r"`{3,}", "backtick run regex should compile");

static LANG_RE: LazyLock<Regex> =
    lazy_regex!(r"^[A-Za-z0-9_+#.\-]+$", "language regex should compile");

/// A complete fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFence<'a> {
    /// Language named by the info string, when it is a single word.
    pub lang: Option<&'a str>,
    /// Fence content with surrounding blank lines and trailing whitespace
    /// removed. Not yet escaped.
    pub code: String,
}

/// A piece of the input: either text outside any fence or a closed fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Code(CodeFence<'a>),
}

/// Split `input` into text and fenced code regions, in source order.
///
/// Runs shorter than the opener inside a fence are part of its content. An
/// unterminated opener and everything after it stay in the final text
/// segment. Empty text segments are omitted.
///
/// # Examples
///
/// ```
/// use mdbubble::fences::{Segment, split_fences};
///
/// let segments = split_fences("Use ```<b>``` here");
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0], Segment::Text("Use "));
/// assert!(matches!(&segments[1], Segment::Code(fence) if fence.code == "<b>"));
/// assert_eq!(segments[2], Segment::Text(" here"));
/// ```
#[must_use]
pub fn split_fences(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut pos = 0;
    let mut open: Option<(usize, usize)> = None;

    for run in BACKTICK_RUN_RE.find_iter(input) {
        match open {
            None => open = Some((run.start(), run.len())),
            Some((start, len)) if run.len() >= len => {
                if start > pos {
                    segments.push(Segment::Text(&input[pos..start]));
                }
                segments.push(Segment::Code(read_fence(&input[start + len..run.start()])));
                pos = run.end();
                open = None;
            }
            Some(_) => {}
        }
    }

    if let Some((start, _)) = open {
        log::trace!("unterminated fence at byte {start}, leaving as text");
    }
    if pos < input.len() {
        segments.push(Segment::Text(&input[pos..]));
    }
    segments
}

/// Build a fence from the text between its backtick runs.
///
/// Content without a newline is the code, trimmed. Otherwise the text before
/// the first newline is the info string: blank or a single language word is
/// consumed, anything else stays as the first code line.
fn read_fence(inner: &str) -> CodeFence<'_> {
    let Some((info, body)) = inner.split_once('\n') else {
        return CodeFence {
            lang: None,
            code: inner.trim().to_string(),
        };
    };
    let (lang, body) = if info.trim().is_empty() {
        (None, body)
    } else if let Some(lang) = fence_language(info) {
        (Some(lang), body)
    } else {
        (None, inner)
    };
    CodeFence {
        lang,
        code: trim_code(body).lines().collect::<Vec<_>>().join("\n"),
    }
}

/// Return the language named by a fence info string.
///
/// # Examples
///
/// ```
/// use mdbubble::fences::fence_language;
/// assert_eq!(fence_language(" rust "), Some("rust"));
/// assert_eq!(fence_language("rust linenums"), None);
/// assert_eq!(fence_language(""), None);
/// ```
#[must_use]
pub fn fence_language(info: &str) -> Option<&str> {
    let info = info.trim();
    LANG_RE.is_match(info).then_some(info)
}

/// Strip blank lines at both ends and trailing whitespace, keeping the
/// indentation of the first code line.
fn trim_code(code: &str) -> &str {
    let code = code.trim_end();
    let start = code
        .find(|c: char| !c.is_whitespace())
        .map_or(code.len(), |first| {
            code[..first].rfind('\n').map_or(0, |nl| nl + 1)
        });
    &code[start..]
}
