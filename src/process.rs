//! High-level Markdown rendering.

use crate::{blocks::parse_blocks, html::render_blocks};

/// Switches for the HTML renderer. The default renders links that open in a
/// new tab and drops links with disallowed schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Omit `target="_blank"` on links.
    pub same_tab: bool,
    /// Accept link destinations with any scheme.
    pub unsafe_links: bool,
}

/// Render a chat message written in Markdown to an HTML fragment.
///
/// Rendering is pure and deterministic: the same input always yields the same
/// output, and no input makes it fail.
///
/// # Examples
///
/// ```
/// use mdbubble::parse_markdown;
///
/// assert_eq!(
///     parse_markdown("## Title\nSome **bold** text."),
///     "<h2>Title</h2>\n<p>Some <strong>bold</strong> text.</p>"
/// );
/// ```
#[must_use]
pub fn parse_markdown(input: &str) -> String {
    parse_markdown_with(input, &RenderOptions::default())
}

/// Render `input` with explicit [`RenderOptions`].
#[must_use]
pub fn parse_markdown_with(input: &str, opts: &RenderOptions) -> String {
    render_blocks(&parse_blocks(input), opts)
}
