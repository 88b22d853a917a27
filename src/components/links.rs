//! Hyperlinks: fully qualified URLs, internal short links and bare domains.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{lookup::LookupResult, run::TextRun};

pub(super) static FULL_URL_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)\b(?:https?://|ftp://|mailto:)[^\s<]+",
    "full url pattern should compile",
);

// Short links and implied links must not continue a path, a file name or an
// identifier, so the character before them is captured as `lead` and
// re-emitted as plain text.
pub(super) static SHORT_LINK_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)(?P<lead>^|[^-/._])\b(?:https?://|ftp://|mailto:)?(?:go|g|shortn|who|teams)/[^\s<]+",
    "short link pattern should compile",
);

pub(super) static NUMERIC_SHORT_LINK_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)(?P<lead>^|[^-/._])\b(?:https?://|ftp://)?(?:b|t|o|omg|cl|cr)/[0-9]+",
    "numeric short link pattern should compile",
);

pub(super) static IMPLIED_LINK_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)(?P<lead>^|[^-/._@])\b[a-z](?:[-.]?[a-z0-9])+\.(?:com|net|org|edu|dev)\b(?:/[^\s<]*)?",
    "implied link pattern should compile",
);

// Hosts served over plain http to avoid certificate interstitials.
static INTERNAL_SHORT_LINK_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)^(?:b|t|o|omg|cl|cr|go|g|shortn|who|teams)/",
    "internal short link host pattern should compile",
);

const LINK_SCHEMES: [&str; 4] = ["http://", "https://", "ftp://", "mailto:"];

/// Closing characters trimmed from the end of a link, each paired with the
/// opening character that, when present earlier in the link, keeps it.
const LINK_TRAILING_CHARS: [(Option<char>, char); 9] = [
    (None, ':'),
    (None, '.'),
    (None, ','),
    (None, '>'),
    (Some('('), ')'),
    (Some('['), ']'),
    (Some('{'), '}'),
    (Some('\''), '\''),
    (Some('"'), '"'),
];

/// Split trailing punctuation off a matched link.
///
/// Each entry of the trailing table is checked once, in order, so at most
/// one of each closing character is removed.
///
/// # Examples
///
/// ```
/// use autolinker::components::split_trailing;
///
/// assert_eq!(split_trailing("https://a.net/x)."), ("https://a.net/x", ")."));
/// assert_eq!(split_trailing("https://a.net/x=\"y\""), ("https://a.net/x=\"y\"", ""));
/// assert_eq!(split_trailing("https://a.net/(x)"), ("https://a.net/(x)", ""));
/// ```
#[must_use]
pub fn split_trailing(link: &str) -> (&str, &str) {
    let mut end = link.len();
    for (open, close) in LINK_TRAILING_CHARS {
        if let Some(body) = link[..end].strip_suffix(close)
            && open.is_none_or(|open| !body.contains(open))
        {
            end = body.len();
        }
    }
    link.split_at(end)
}

fn has_scheme(link: &str) -> bool {
    let lower = link.to_lowercase();
    LINK_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

fn link_href(link: &str) -> String {
    if has_scheme(link) {
        link.to_string()
    } else if INTERNAL_SHORT_LINK_RE.is_match(link) {
        format!("http://{link}")
    } else {
        format!("https://{link}")
    }
}

pub(super) fn replace_link(
    caps: &Captures<'_>,
    _found: Option<&LookupResult>,
    _current_project: &str,
) -> Vec<TextRun> {
    let lead = caps.name("lead").map_or("", |m| m.as_str());
    let (link, trailing) = split_trailing(&caps[0][lead.len()..]);
    let mut runs = Vec::with_capacity(3);
    if !lead.is_empty() {
        runs.push(TextRun::text(lead));
    }
    runs.push(TextRun::link(link, link_href(link)));
    if !trailing.is_empty() {
        runs.push(TextRun::text(trailing));
    }
    runs
}
