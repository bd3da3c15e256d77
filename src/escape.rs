//! HTML escaping for text and attribute values.
//!
//! The substitution table covers the five characters that can change the
//! meaning of HTML text or a quoted attribute value. It has no dependency on a
//! DOM and produces the same output in every runtime.

use std::borrow::Cow;

fn replacement(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape `text` for insertion into HTML element content or a quoted
/// attribute.
///
/// Text without metacharacters is returned borrowed.
///
/// # Examples
///
/// ```
/// use mdbubble::escape_html;
/// assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c: char| replacement(c).is_some()) else {
        return Cow::Borrowed(text);
    };
    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    push_escaped(&text[first..], &mut out);
    Cow::Owned(out)
}

/// Append the escaped form of `text` to `out`.
pub fn push_escaped(text: &str, out: &mut String) {
    for ch in text.chars() {
        match replacement(ch) {
            Some(entity) => out.push_str(entity),
            None => out.push(ch),
        }
    }
}
