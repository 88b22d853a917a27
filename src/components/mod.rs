//! The pattern registry.
//!
//! Each [`Component`] recognises one class of reference. Components apply in
//! ascending [`ComponentKey`] order, and a component only sees text that no
//! earlier component has claimed, so the order decides which pattern wins
//! when several could match the same text.

mod comments;
mod links;
mod revisions;
mod tracker;
mod users;

use std::{fmt, sync::LazyLock};

use regex::{Captures, Regex};

use crate::{lookup::LookupResult, reference::Reference, run::TextRun};

pub use links::split_trailing;

/// Identifier of a registered component. Ordering is registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentKey {
    TrackerCrbug,
    FullUrls,
    UserEmails,
    TrackerRegular,
    Shorthand,
    VersionControl,
    CommentRefs,
    AbbreviatedCommentRefs,
}

impl ComponentKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TrackerCrbug => "01-tracker-crbug",
            Self::FullUrls => "02-full-urls",
            Self::UserEmails => "03-user-emails",
            Self::TrackerRegular => "04-tracker-regular",
            Self::Shorthand => "05-linkify-shorthand",
            Self::VersionControl => "06-versioncontrol",
            Self::CommentRefs => "07-comment-refs",
            Self::AbbreviatedCommentRefs => "08-abbreviated-comment-refs",
        }
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which lookup a component needs before its matches can be linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Issues,
    Users,
}

/// Pull references out of one match, given the current project name.
pub type ExtractFn = fn(&Captures<'_>, &str) -> Vec<Reference>;

/// Turn one match into runs, given the component's lookup result (if any)
/// and the current project name.
pub type ReplaceFn = fn(&Captures<'_>, Option<&LookupResult>, &str) -> Vec<TextRun>;

/// One registry entry.
pub struct Component {
    pub key: ComponentKey,
    pub lookup: Option<LookupKind>,
    pub extract: ExtractFn,
    pub patterns: Vec<&'static Regex>,
    pub replace: ReplaceFn,
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("key", &self.key)
            .field("lookup", &self.lookup)
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}

fn no_references(_: &Captures<'_>, _: &str) -> Vec<Reference> {
    Vec::new()
}

static REGISTRY: LazyLock<Vec<Component>> = LazyLock::new(|| {
    let mut registry = vec![
        Component {
            key: ComponentKey::TrackerCrbug,
            lookup: Some(LookupKind::Issues),
            extract: tracker::extract_crbug_refs,
            patterns: vec![&*tracker::CRBUG_RE],
            replace: tracker::replace_crbug_ref,
        },
        Component {
            key: ComponentKey::FullUrls,
            lookup: None,
            extract: no_references,
            patterns: vec![&*links::FULL_URL_RE],
            replace: links::replace_link,
        },
        Component {
            key: ComponentKey::UserEmails,
            lookup: Some(LookupKind::Users),
            extract: users::extract_email,
            patterns: vec![&*users::EMAIL_RE],
            replace: users::replace_email,
        },
        Component {
            key: ComponentKey::TrackerRegular,
            lookup: Some(LookupKind::Issues),
            extract: tracker::extract_tracker_refs,
            patterns: vec![&*tracker::ISSUE_TRACKER_RE],
            replace: tracker::replace_tracker_refs,
        },
        Component {
            key: ComponentKey::Shorthand,
            lookup: None,
            extract: no_references,
            patterns: vec![
                &*links::SHORT_LINK_RE,
                &*links::NUMERIC_SHORT_LINK_RE,
                &*links::IMPLIED_LINK_RE,
            ],
            replace: links::replace_link,
        },
        Component {
            key: ComponentKey::VersionControl,
            lookup: None,
            extract: no_references,
            patterns: vec![&*revisions::GIT_HASH_RE, &*revisions::SVN_REF_RE],
            replace: revisions::replace_revision_ref,
        },
        Component {
            key: ComponentKey::CommentRefs,
            lookup: None,
            extract: no_references,
            patterns: vec![&*comments::COMMENT_RE],
            replace: comments::replace_comment_ref,
        },
        Component {
            key: ComponentKey::AbbreviatedCommentRefs,
            lookup: None,
            extract: no_references,
            patterns: vec![&*comments::ABBREVIATED_COMMENT_RE],
            replace: comments::replace_comment_ref,
        },
    ];
    registry.sort_by_key(|c| c.key);
    registry
});

/// All components in registry order.
#[must_use]
pub fn components() -> &'static [Component] {
    &REGISTRY
}

/// The component registered under `key`.
#[must_use]
pub fn component(key: ComponentKey) -> Option<&'static Component> {
    REGISTRY.iter().find(|c| c.key == key)
}
