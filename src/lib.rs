//! Render chat-bubble Markdown to HTML.
//!
//! The dialect is small: fenced code, pipe tables with a separator row,
//! one-line blockquotes, `---` rules, `#` to `###` headings, flat bullet and
//! numbered lists, and bold, italic, inline code and link spans. Input is
//! split into a flat list of [`Block`]s, then each block is rendered with all
//! text escaped.

#[macro_use]
mod macros;

pub mod blocks;
pub mod breaks;
pub mod escape;
pub mod fences;
pub mod headings;
pub mod html;
pub mod inline;
pub mod io;
pub mod links;
pub mod lists;
pub mod process;
pub mod quotes;
pub mod table;

pub use blocks::{Block, parse_blocks};
pub use escape::escape_html;
pub use html::{render_blocks, standalone_document};
pub use io::{render_file, write_html};
pub use process::{RenderOptions, parse_markdown, parse_markdown_with};
