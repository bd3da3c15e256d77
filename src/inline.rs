//! Inline span scanner.
//!
//! Recognises inline code, bold, italic and links within a run of text and
//! returns a small tree of [`Inline`] nodes borrowing from the source. The
//! scanner walks the text once, left to right. At each delimiter it tries the
//! spans in precedence order: code, then bold, then italic, then links.
//! Delimiters that do not close are kept as literal text.
//!
//! All delimiters are ASCII, so byte positions found here always fall on
//! character boundaries.

/// A parsed inline span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline<'a> {
    /// Literal text, not yet escaped.
    Text(&'a str),
    /// Backtick-delimited code; its content is never parsed further.
    Code(&'a str),
    /// `**strong**` text.
    Strong(Vec<Inline<'a>>),
    /// `*emphasised*` text.
    Emphasis(Vec<Inline<'a>>),
    /// `[label](href)` link. The destination is raw and unvalidated.
    Link {
        children: Vec<Inline<'a>>,
        href: &'a str,
    },
}

type Span<'a> = Option<(Inline<'a>, usize)>;

/// Parse the inline spans of `text`.
///
/// # Examples
///
/// ```
/// use mdbubble::inline::{Inline, parse_inline};
///
/// let nodes = parse_inline("a **b** `c`");
/// assert_eq!(
///     nodes,
///     vec![
///         Inline::Text("a "),
///         Inline::Strong(vec![Inline::Text("b")]),
///         Inline::Text(" "),
///         Inline::Code("c"),
///     ]
/// );
/// ```
#[must_use]
pub fn parse_inline(text: &str) -> Vec<Inline<'_>> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut plain_start = 0;
    let mut idx = 0;
    while idx < bytes.len() {
        let span = match bytes[idx] {
            b'`' => code_span(text, idx),
            b'*' => strong_span(text, idx).or_else(|| emphasis_span(text, idx)),
            b'[' => link_span(text, idx),
            _ => None,
        };
        match span {
            Some((node, end)) => {
                push_text(&mut out, &text[plain_start..idx]);
                out.push(node);
                idx = end;
                plain_start = end;
            }
            None => idx += 1,
        }
    }
    push_text(&mut out, &text[plain_start..]);
    out
}

fn push_text<'a>(out: &mut Vec<Inline<'a>>, text: &'a str) {
    if !text.is_empty() {
        out.push(Inline::Text(text));
    }
}

fn code_span(text: &str, start: usize) -> Span<'_> {
    let rest = &text[start + 1..];
    let close = rest.find('`')?;
    if close == 0 {
        return None;
    }
    Some((Inline::Code(&rest[..close]), start + close + 2))
}

fn strong_span(text: &str, start: usize) -> Span<'_> {
    let rest = text[start..].strip_prefix("**")?;
    let close = rest.find("**")?;
    if close == 0 {
        return None;
    }
    let inner = &rest[..close];
    Some((Inline::Strong(parse_inline(inner)), start + close + 4))
}

/// True when the `*` at `idx` touches another asterisk.
fn star_is_doubled(bytes: &[u8], idx: usize) -> bool {
    let before = idx.checked_sub(1).map(|i| bytes[i]);
    let after = bytes.get(idx + 1).copied();
    before == Some(b'*') || after == Some(b'*')
}

fn emphasis_span(text: &str, start: usize) -> Span<'_> {
    let bytes = text.as_bytes();
    if star_is_doubled(bytes, start) {
        return None;
    }
    let close = (start + 2..bytes.len())
        .find(|&j| bytes[j] == b'*' && !star_is_doubled(bytes, j))?;
    let inner = &text[start + 1..close];
    Some((Inline::Emphasis(parse_inline(inner)), close + 1))
}

fn link_span(text: &str, start: usize) -> Span<'_> {
    let rest = &text[start + 1..];
    let label_end = rest.find(']')?;
    if label_end == 0 {
        return None;
    }
    let label = &rest[..label_end];
    let target = rest[label_end + 1..].strip_prefix('(')?;
    let href_end = target.find(')')?;
    if href_end == 0 {
        return None;
    }
    let href = &target[..href_end];
    let end = start + 1 + label_end + 2 + href_end + 1;
    Some((
        Inline::Link {
            children: parse_inline(label),
            href,
        },
        end,
    ))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn plain_text_is_single_node() {
        assert_eq!(parse_inline("just words"), vec![Inline::Text("just words")]);
    }

    #[test]
    fn empty_input_has_no_nodes() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn bold_wins_over_italic() {
        let nodes = parse_inline("**bold** and *italic*");
        assert_eq!(
            nodes,
            vec![
                Inline::Strong(vec![Inline::Text("bold")]),
                Inline::Text(" and "),
                Inline::Emphasis(vec![Inline::Text("italic")]),
            ]
        );
    }

    #[test]
    fn italic_may_contain_bold() {
        let nodes = parse_inline("*a **b** c*");
        assert_eq!(
            nodes,
            vec![Inline::Emphasis(vec![
                Inline::Text("a "),
                Inline::Strong(vec![Inline::Text("b")]),
                Inline::Text(" c"),
            ])]
        );
    }

    #[test]
    fn code_content_is_opaque() {
        assert_eq!(
            parse_inline("`**not bold**`"),
            vec![Inline::Code("**not bold**")]
        );
    }

    #[test]
    fn link_label_is_parsed() {
        let nodes = parse_inline("see [**docs**](https://x.test/a)");
        assert_eq!(
            nodes,
            vec![
                Inline::Text("see "),
                Inline::Link {
                    children: vec![Inline::Strong(vec![Inline::Text("docs")])],
                    href: "https://x.test/a",
                },
            ]
        );
    }

    #[test]
    fn span_after_multibyte_text() {
        assert_eq!(
            parse_inline("café *olé*"),
            vec![
                Inline::Text("café "),
                Inline::Emphasis(vec![Inline::Text("olé")]),
            ]
        );
    }

    #[rstest]
    #[case("**unclosed")]
    #[case("*unclosed")]
    #[case("`unclosed")]
    #[case("``")]
    #[case("****")]
    #[case("[label]")]
    #[case("[label](")]
    #[case("[](empty)")]
    #[case("[label]()")]
    #[case("2 * 3")]
    fn unmatched_delimiters_stay_literal(#[case] input: &str) {
        let rendered: String = parse_inline(input)
            .iter()
            .map(|node| match node {
                Inline::Text(t) => *t,
                other => panic!("unexpected span {other:?}"),
            })
            .collect();
        assert_eq!(rendered, input);
    }
}
