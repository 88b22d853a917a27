//! Version-control references: git hashes and numbered revisions.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{lookup::LookupResult, run::TextRun};

/// Where revision links point.
pub const REVISION_URL_BASE: &str = "https://crrev.com/";

pub(super) static GIT_HASH_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)\b(?:r(?:evision\s+#?)?)?(?P<revnum>[a-f0-9]{40})\b",
    "git hash pattern should compile",
);

pub(super) static SVN_REF_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)\br(?:evision\s+#?)?(?P<revnum>[0-9]{4,7})\b",
    "revision number pattern should compile",
);

pub(super) fn replace_revision_ref(
    caps: &Captures<'_>,
    _found: Option<&LookupResult>,
    _current_project: &str,
) -> Vec<TextRun> {
    vec![TextRun::link(
        &caps[0],
        format!("{REVISION_URL_BASE}{}", &caps["revnum"]),
    )]
}
