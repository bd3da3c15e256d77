//! Link target validation.
//!
//! Link destinations come from untrusted message text. Only a small set of
//! schemes may reach an `href`; anything else is rendered as plain text.

use std::sync::LazyLock;

use regex::Regex;

/// Schemes accepted in rendered `href` attributes.
pub const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

static SCHEME_RE: LazyLock<Regex> =
    lazy_regex!(r"^([A-Za-z][A-Za-z0-9+.\-]*):", "scheme regex should compile");

/// Return the lower-cased scheme of `url`, if it has one.
///
/// ASCII whitespace and control characters are ignored, matching how
/// browsers tolerate `java\tscript:` style targets.
///
/// # Examples
///
/// ```
/// use mdbubble::links::url_scheme;
/// assert_eq!(url_scheme("HTTPS://example.com").as_deref(), Some("https"));
/// assert_eq!(url_scheme("java\tscript:alert(1)").as_deref(), Some("javascript"));
/// assert_eq!(url_scheme("/relative/path"), None);
/// ```
#[must_use]
pub fn url_scheme(url: &str) -> Option<String> {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect();
    let cap = SCHEME_RE.captures(&compact)?;
    cap.get(1).map(|m| m.as_str().to_ascii_lowercase())
}

/// Return the trimmed destination if it may be used as an `href`.
///
/// Relative URLs and fragments carry no scheme and are accepted. With
/// `allow_any` set, every destination is accepted. The result still needs
/// attribute escaping before insertion.
#[must_use]
pub fn safe_href(url: &str, allow_any: bool) -> Option<&str> {
    let url = url.trim();
    if allow_any {
        return Some(url);
    }
    match url_scheme(url) {
        None => Some(url),
        Some(scheme) if ALLOWED_SCHEMES.contains(&scheme.as_str()) => Some(url),
        Some(scheme) => {
            log::warn!("dropping link with disallowed scheme `{scheme}`");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("https://example.com/a?b=c")]
    #[case("http://example.com")]
    #[case("mailto:someone@example.com")]
    #[case("tel:+15551234")]
    #[case("/flights/search")]
    #[case("#details")]
    #[case("  https://padded.example  ")]
    fn accepts_safe_targets(#[case] url: &str) {
        assert_eq!(safe_href(url, false), Some(url.trim()));
    }

    #[rstest]
    #[case("javascript:alert(1)")]
    #[case("JavaScript:alert(1)")]
    #[case(" java\tscript:alert(1)")]
    #[case("data:text/html;base64,PHNjcmlwdD4=")]
    #[case("vbscript:msgbox")]
    fn rejects_unsafe_targets(#[case] url: &str) {
        assert_eq!(safe_href(url, false), None);
    }

    #[test]
    fn allow_any_skips_check() {
        assert_eq!(
            safe_href("javascript:void(0)", true),
            Some("javascript:void(0)")
        );
    }

    #[test]
    fn colon_after_path_is_not_a_scheme() {
        assert_eq!(url_scheme("./a:b"), None);
        assert_eq!(url_scheme("search?q=a:b"), None);
    }
}
