//! Utility helpers shared across integration tests.

use html5ever::{driver::ParseOpts, parse_document, tendril::TendrilSink};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Build a `Vec<String>` from a list of string slices.
///
/// Used to join multi-line Markdown fixtures without escaping newlines.
#[allow(unused_macros)]
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Parse rendered output into a DOM.
#[allow(dead_code)]
pub fn parse_html(html: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(html.to_string())
}

#[allow(dead_code)]
fn collect_elements(handle: &Handle, tag: &str, out: &mut Vec<Handle>) {
    if let NodeData::Element { name, .. } = &handle.data {
        if name.local.as_ref() == tag {
            out.push(handle.clone());
        }
    }
    for child in handle.children.borrow().iter() {
        collect_elements(child, tag, out);
    }
}

/// All elements named `tag` in document order.
#[allow(dead_code)]
pub fn elements(html: &str, tag: &str) -> Vec<Handle> {
    let dom = parse_html(html);
    let mut out = Vec::new();
    collect_elements(&dom.document, tag, &mut out);
    out
}

/// Concatenated text content of `handle`.
#[allow(dead_code)]
pub fn text_of(handle: &Handle) -> String {
    let mut out = String::new();
    push_text(handle, &mut out);
    out
}

#[allow(dead_code)]
fn push_text(handle: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &handle.data {
        out.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        push_text(child, out);
    }
}

/// Text of every `<th>`/`<td>` cell, grouped by `<tr>`.
#[allow(dead_code)]
pub fn table_rows(html: &str) -> Vec<Vec<String>> {
    let dom = parse_html(html);
    let mut rows = Vec::new();
    collect_elements(&dom.document, "tr", &mut rows);
    rows.iter()
        .map(|row| {
            row.children
                .borrow()
                .iter()
                .filter(|cell| {
                    matches!(
                        &cell.data,
                        NodeData::Element { name, .. }
                            if name.local.as_ref() == "th" || name.local.as_ref() == "td"
                    )
                })
                .map(text_of)
                .collect()
        })
        .collect()
}
