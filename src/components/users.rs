//! Email addresses, linked to the user's profile when the user exists.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{lookup::LookupResult, reference::Reference, run::TextRun};

pub(super) static EMAIL_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)\b[a-z](?:[-.]?[a-z0-9])+@[a-z](?:[-.]?[a-z0-9])+\.(?:com|net|org|edu|dev)\b",
    "email pattern should compile",
);

pub(super) fn extract_email(caps: &Captures<'_>, _current_project: &str) -> Vec<Reference> {
    vec![Reference::User(caps[0].to_string())]
}

/// Known users link to their profile; anyone else gets a `mailto:` link.
pub(super) fn replace_email(
    caps: &Captures<'_>,
    found: Option<&LookupResult>,
    _current_project: &str,
) -> Vec<TextRun> {
    let email = &caps[0];
    let known = found
        .and_then(LookupResult::as_users)
        .is_some_and(|users| users.contains(email));
    let href = if known {
        format!("/u/{email}")
    } else {
        format!("mailto:{email}")
    };
    vec![TextRun::link(email, href)]
}
