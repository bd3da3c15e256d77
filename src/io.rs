//! File helpers for rendering Markdown documents.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    html::standalone_document,
    process::{RenderOptions, parse_markdown_with},
};

/// Read a Markdown file and render it to an HTML fragment.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn render_file(path: &Path, opts: &RenderOptions) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(parse_markdown_with(&text, opts))
}

/// Path of the HTML output written for `path`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use mdbubble::io::html_path;
/// assert_eq!(html_path(Path::new("chat/reply.md")), Path::new("chat/reply.html"));
/// ```
#[must_use]
pub fn html_path(path: &Path) -> PathBuf {
    path.with_extension("html")
}

/// Title for a standalone document rendered from `path`.
#[must_use]
pub fn document_title(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "mdbubble".to_string(), |s| s.to_string_lossy().into_owned())
}

/// Render `path` and write the result next to it with an `.html` extension.
///
/// With `standalone` set, the fragment is wrapped in a full HTML document
/// titled after the file stem. Returns the path written.
///
/// # Errors
/// Returns an error if reading or writing fails, or if the input already has
/// an `.html` extension and would be overwritten.
pub fn write_html(path: &Path, opts: &RenderOptions, standalone: bool) -> io::Result<PathBuf> {
    let target = html_path(path);
    if target == path {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("refusing to overwrite input {}", path.display()),
        ));
    }
    let fragment = render_file(path, opts)?;
    let html = if standalone {
        standalone_document(&fragment, &document_title(path))
    } else {
        fragment
    };
    fs::write(&target, html + "\n")?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn render_file_reads_markdown() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("reply.md");
        fs::write(&file, "# Hi\n").unwrap();
        let html = render_file(&file, &RenderOptions::default()).unwrap();
        assert_eq!(html, "<h1>Hi</h1>");
    }

    #[test]
    fn write_html_creates_sibling() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("reply.md");
        fs::write(&file, "*hey*").unwrap();
        let target = write_html(&file, &RenderOptions::default(), false).unwrap();
        assert_eq!(target, dir.path().join("reply.html"));
        assert_eq!(fs::read_to_string(target).unwrap(), "<p><em>hey</em></p>\n");
    }

    #[test]
    fn write_html_standalone_uses_stem_as_title() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("itinerary.md");
        fs::write(&file, "text").unwrap();
        let target = write_html(&file, &RenderOptions::default(), true).unwrap();
        let out = fs::read_to_string(target).unwrap();
        assert!(out.contains("<title>itinerary</title>"));
        assert!(out.contains("<p>text</p>"));
    }

    #[test]
    fn write_html_refuses_html_input() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("page.html");
        fs::write(&file, "x").unwrap();
        let err = write_html(&file, &RenderOptions::default(), false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(fs::read_to_string(file).unwrap(), "x");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = render_file(&dir.path().join("absent.md"), &RenderOptions::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
