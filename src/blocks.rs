//! Block tokenizer.
//!
//! Splits a message into a flat list of [`Block`] values. Fenced code regions
//! are cut out of the input first, wherever they sit. The text around them is
//! classified line by line, trying constructs in a fixed precedence: tables,
//! blockquotes, horizontal rules, headings, then lists. Lines that no
//! construct claims are gathered into paragraphs, which end at a blank line or
//! at the start of any other block. Blocks do not nest.

use crate::{
    breaks::is_rule,
    fences::{Segment, split_fences},
    headings::parse_heading,
    lists::{ListKind, take_list},
    quotes::parse_quote,
    table::take_table,
};

/// A block-level construct. Text fields are raw Markdown; inline spans are
/// parsed at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Heading {
        level: u8,
        text: &'a str,
    },
    CodeBlock {
        lang: Option<&'a str>,
        code: String,
    },
    Table {
        header: Vec<&'a str>,
        rows: Vec<Vec<&'a str>>,
    },
    List {
        kind: ListKind,
        items: Vec<&'a str>,
    },
    Paragraph {
        text: String,
    },
    Quote {
        text: &'a str,
    },
    Rule,
}

/// Try each block construct at `lines[idx]` in precedence order.
fn take_block<'a>(lines: &[&'a str], idx: usize) -> Option<(Block<'a>, usize)> {
    if let Some((table, next)) = take_table(lines, idx) {
        return Some((
            Block::Table {
                header: table.header,
                rows: table.rows,
            },
            next,
        ));
    }
    let line = lines[idx];
    if let Some(text) = parse_quote(line) {
        return Some((Block::Quote { text }, idx + 1));
    }
    if is_rule(line) {
        return Some((Block::Rule, idx + 1));
    }
    if let Some((level, text)) = parse_heading(line) {
        return Some((Block::Heading { level, text }, idx + 1));
    }
    take_list(lines, idx).map(|(kind, items, next)| (Block::List { kind, items }, next))
}

fn flush_paragraph<'a>(blocks: &mut Vec<Block<'a>>, buf: &mut Vec<&'a str>) {
    if buf.is_empty() {
        return;
    }
    blocks.push(Block::Paragraph {
        text: buf.join(" "),
    });
    buf.clear();
}

/// Tokenize `input` into blocks.
///
/// # Examples
///
/// ```
/// use mdbubble::{Block, parse_blocks};
///
/// let blocks = parse_blocks("# Hi\nfirst\nsecond");
/// assert_eq!(
///     blocks,
///     vec![
///         Block::Heading { level: 1, text: "Hi" },
///         Block::Paragraph { text: "first second".to_string() },
///     ]
/// );
/// ```
#[must_use]
pub fn parse_blocks(input: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    for segment in split_fences(input) {
        match segment {
            Segment::Text(text) => push_text_blocks(text, &mut blocks),
            Segment::Code(fence) => blocks.push(Block::CodeBlock {
                lang: fence.lang,
                code: fence.code,
            }),
        }
    }
    log::debug!(
        "parsed {} blocks from {} lines",
        blocks.len(),
        input.lines().count()
    );
    blocks
}

/// Classify the lines of a fence-free stretch of text.
fn push_text_blocks<'a>(text: &'a str, blocks: &mut Vec<Block<'a>>) {
    let lines: Vec<&str> = text.lines().collect();
    let mut para = Vec::new();
    let mut idx = 0;

    while idx < lines.len() {
        let line = lines[idx];
        if line.trim().is_empty() {
            flush_paragraph(blocks, &mut para);
            idx += 1;
            continue;
        }
        if let Some((block, next)) = take_block(&lines, idx) {
            flush_paragraph(blocks, &mut para);
            blocks.push(block);
            idx = next;
            continue;
        }
        para.push(line.trim());
        idx += 1;
    }
    flush_paragraph(blocks, &mut para);
}
