//! Helper macros used across the crate.

/// Lazily compile a [`Regex`](regex::Regex) with a custom panic message.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static RE: LazyLock<Regex> = mdbubble::lazy_regex!(r"^#{1,3} ", "heading prefix");
/// assert!(RE.is_match("## Title"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        ::std::sync::LazyLock::new(|| ::regex::Regex::new($pattern).expect($msg))
    };
}
