//! HTML rendering of parsed blocks.
//!
//! Every piece of message text is escaped at the point it is inserted into a
//! tag, including heading, list, quote and link text. Link destinations pass
//! through [`safe_href`] and are attribute-escaped.

use crate::{
    blocks::Block,
    escape::push_escaped,
    inline::{Inline, parse_inline},
    links::safe_href,
    process::RenderOptions,
};

/// Class on the scroll container wrapped around fenced code.
pub const CODE_SCROLL_CLASS: &str = "code-scroll";

fn push_nodes(nodes: &[Inline<'_>], opts: &RenderOptions, out: &mut String) {
    for node in nodes {
        match node {
            Inline::Text(text) => push_escaped(text, out),
            Inline::Code(code) => {
                out.push_str("<code>");
                push_escaped(code, out);
                out.push_str("</code>");
            }
            Inline::Strong(children) => {
                out.push_str("<strong>");
                push_nodes(children, opts, out);
                out.push_str("</strong>");
            }
            Inline::Emphasis(children) => {
                out.push_str("<em>");
                push_nodes(children, opts, out);
                out.push_str("</em>");
            }
            Inline::Link { children, href } => match safe_href(href, opts.unsafe_links) {
                Some(url) => {
                    out.push_str("<a href=\"");
                    push_escaped(url, out);
                    out.push('"');
                    if !opts.same_tab {
                        out.push_str(" target=\"_blank\"");
                    }
                    out.push('>');
                    push_nodes(children, opts, out);
                    out.push_str("</a>");
                }
                None => push_nodes(children, opts, out),
            },
        }
    }
}

/// Render the inline spans of `text` to escaped HTML.
///
/// # Examples
///
/// ```
/// use mdbubble::{RenderOptions, html::render_inline};
///
/// let html = render_inline("**a** < b", &RenderOptions::default());
/// assert_eq!(html, "<strong>a</strong> &lt; b");
/// ```
#[must_use]
pub fn render_inline(text: &str, opts: &RenderOptions) -> String {
    let mut out = String::with_capacity(text.len());
    push_nodes(&parse_inline(text), opts, &mut out);
    out
}

fn push_wrapped(tag: &str, text: &str, opts: &RenderOptions, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    push_nodes(&parse_inline(text), opts, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_row(cell_tag: &str, cells: &[&str], opts: &RenderOptions, out: &mut String) {
    out.push_str("<tr>");
    for cell in cells {
        push_wrapped(cell_tag, cell, opts, out);
    }
    out.push_str("</tr>");
}

fn push_code_block(lang: Option<&str>, code: &str, out: &mut String) {
    out.push_str("<pre><div class=\"");
    out.push_str(CODE_SCROLL_CLASS);
    out.push_str("\"><code");
    if let Some(lang) = lang {
        out.push_str(" class=\"language-");
        push_escaped(lang, out);
        out.push('"');
    }
    out.push('>');
    push_escaped(code, out);
    out.push_str("</code></div></pre>");
}

/// Render one block to HTML.
#[must_use]
pub fn render_block(block: &Block<'_>, opts: &RenderOptions) -> String {
    let mut out = String::new();
    match block {
        Block::Heading { level, text } => push_wrapped(&format!("h{level}"), text, opts, &mut out),
        Block::CodeBlock { lang, code } => push_code_block(*lang, code, &mut out),
        Block::Table { header, rows } => {
            out.push_str("<table><thead>");
            push_row("th", header, opts, &mut out);
            out.push_str("</thead><tbody>");
            for row in rows {
                push_row("td", row, opts, &mut out);
            }
            out.push_str("</tbody></table>");
        }
        Block::List { kind, items } => {
            let tag = kind.tag();
            out.push('<');
            out.push_str(tag);
            out.push_str(">\n");
            for item in items {
                push_wrapped("li", item, opts, &mut out);
                out.push('\n');
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        Block::Paragraph { text } => push_wrapped("p", text, opts, &mut out),
        Block::Quote { text } => push_wrapped("blockquote", text, opts, &mut out),
        Block::Rule => out.push_str("<hr>"),
    }
    out
}

/// Render a block list, one block per line.
#[must_use]
pub fn render_blocks(blocks: &[Block<'_>], opts: &RenderOptions) -> String {
    blocks
        .iter()
        .map(|block| render_block(block, opts))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap a rendered fragment in a minimal HTML5 document.
///
/// # Examples
///
/// ```
/// use mdbubble::standalone_document;
///
/// let doc = standalone_document("<p>hi</p>", "Q&A");
/// assert!(doc.starts_with("<!DOCTYPE html>"));
/// assert!(doc.contains("<title>Q&amp;A</title>"));
/// assert!(doc.contains("<body>\n<p>hi</p>\n</body>"));
/// ```
#[must_use]
pub fn standalone_document(fragment: &str, title: &str) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    push_escaped(title, &mut out);
    out.push_str("</title>\n</head>\n<body>\n");
    out.push_str(fragment);
    out.push_str("\n</body>\n</html>");
    out
}
