//! Helper macros used across the crate.

/// Lazily compile a [`Regex`] with a custom panic message.
///
/// Every reference pattern in the registry is a `static` built with this
/// macro, so each pattern compiles once on first use.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static COMMENT_RE: LazyLock<Regex> =
///     autolinker::lazy_regex!(r"(?i)\bcomment\s*(\d+)", "comment pattern");
/// assert!(COMMENT_RE.is_match("see Comment 4"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
