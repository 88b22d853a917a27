//! Links to comments on the current issue page.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{lookup::LookupResult, run::TextRun};

pub(super) static COMMENT_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)\bcomment[\x20\t]*(?::|=)?[\x20\t]*#?(?P<num>[0-9]+)\b",
    "comment reference pattern should compile",
);

// `#c12`, but not when glued to a word as in `comment#c12`.
pub(super) static ABBREVIATED_COMMENT_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)\B#c(?P<num>[0-9]+)\b",
    "abbreviated comment reference pattern should compile",
);

pub(super) fn replace_comment_ref(
    caps: &Captures<'_>,
    _found: Option<&LookupResult>,
    _current_project: &str,
) -> Vec<TextRun> {
    vec![TextRun::link(&caps[0], format!("#c{}", &caps["num"]))]
}
