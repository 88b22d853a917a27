//! The existence-lookup seam and the data it returns.
//!
//! The harvester asks a [`ReferenceLookup`] which referenced issues and
//! users exist. Replacement functions then consult the returned
//! [`LookupResult`] to decide whether, and how, to link a match.

use std::collections::BTreeMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    components::ComponentKey,
    reference::{IssueRef, UserRef, parse_local_id, same_name},
};

/// Summary of an existing issue as returned by the lookup service.
///
/// Records missing a project name or id deserialize to empty defaults, which
/// never match a reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueSummary {
    pub project_name: String,
    pub local_id: u32,
    pub summary: Option<String>,
}

impl IssueSummary {
    #[must_use]
    pub fn new(project_name: &str, local_id: u32, summary: Option<&str>) -> Self {
        Self {
            project_name: project_name.to_string(),
            local_id,
            summary: summary.map(str::to_string),
        }
    }

    /// Whether this record is the issue `project_name`/`local_id`.
    #[must_use]
    pub fn matches(&self, project_name: &str, local_id: u32) -> bool {
        !self.project_name.is_empty()
            && self.local_id == local_id
            && same_name(&self.project_name, project_name)
    }
}

/// An existing user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub email: String,
}

/// Issues confirmed to exist, split by state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueLookup {
    pub open_refs: Vec<IssueSummary>,
    pub closed_refs: Vec<IssueSummary>,
}

impl IssueLookup {
    /// Find an issue by the project name and id written in the text.
    ///
    /// Returns the summary and whether the issue is closed. Open issues win
    /// when a record appears in both lists.
    #[must_use]
    pub fn find(&self, project_name: &str, local_id: &str) -> Option<(&IssueSummary, bool)> {
        let local_id = parse_local_id(local_id)?;
        if let Some(open) = self
            .open_refs
            .iter()
            .find(|issue| issue.matches(project_name, local_id))
        {
            return Some((open, false));
        }
        self.closed_refs
            .iter()
            .find(|issue| issue.matches(project_name, local_id))
            .map(|closed| (closed, true))
    }
}

/// Users confirmed to exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserLookup {
    pub users: Vec<UserRecord>,
}

impl UserLookup {
    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.users.iter().any(|user| same_name(&user.email, email))
    }
}

/// Existence data for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Issues(IssueLookup),
    Users(UserLookup),
}

impl LookupResult {
    #[must_use]
    pub fn as_issues(&self) -> Option<&IssueLookup> {
        match self {
            Self::Issues(issues) => Some(issues),
            Self::Users(_) => None,
        }
    }

    #[must_use]
    pub fn as_users(&self) -> Option<&UserLookup> {
        match self {
            Self::Users(users) => Some(users),
            Self::Issues(_) => None,
        }
    }
}

/// Harvested lookup results keyed by component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentRefs {
    results: BTreeMap<ComponentKey, LookupResult>,
    skipped: bool,
}

impl ComponentRefs {
    /// An empty map: every lookup-backed reference stays unlinked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker for input too large to autolink.
    #[must_use]
    pub fn skipped() -> Self {
        Self {
            results: BTreeMap::new(),
            skipped: true,
        }
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    /// Record the lookup result for `key`, replacing any earlier one.
    pub fn insert(&mut self, key: ComponentKey, result: LookupResult) {
        self.results.insert(key, result);
    }

    #[must_use]
    pub fn with(mut self, key: ComponentKey, result: LookupResult) -> Self {
        self.insert(key, result);
        self
    }

    #[must_use]
    pub fn get(&self, key: ComponentKey) -> Option<&LookupResult> {
        self.results.get(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl FromIterator<(ComponentKey, LookupResult)> for ComponentRefs {
    fn from_iter<T: IntoIterator<Item = (ComponentKey, LookupResult)>>(iter: T) -> Self {
        Self {
            results: iter.into_iter().collect(),
            skipped: false,
        }
    }
}

/// Batched existence checks for referenced issues and users.
///
/// Each method receives the whole batch for one component and is called at
/// most once per component per harvest. Calls for different components may
/// be in flight at the same time.
pub trait ReferenceLookup {
    /// Return the requested issues that exist, split into open and closed.
    fn list_referenced_issues(
        &self,
        refs: &[IssueRef],
    ) -> impl Future<Output = anyhow::Result<IssueLookup>>;

    /// Return the requested users that exist.
    fn list_referenced_users(
        &self,
        refs: &[UserRef],
    ) -> impl Future<Output = anyhow::Result<UserLookup>>;
}

/// An in-memory lookup backed by a fixed set of known issues and users.
///
/// # Examples
///
/// ```
/// use autolinker::KnownReferences;
///
/// let known = KnownReferences::from_json(
///     r#"{"openIssues": [{"projectName": "chromium", "localId": 1}], "users": []}"#,
/// )
/// .unwrap();
/// assert_eq!(known.open_issues.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KnownReferences {
    pub open_issues: Vec<IssueSummary>,
    pub closed_issues: Vec<IssueSummary>,
    pub users: Vec<UserRecord>,
}

impl KnownReferences {
    /// Parse known references from JSON.
    ///
    /// # Errors
    /// Returns an error if `json` is not a valid references document.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid known references document")
    }
}

fn requested<'a>(
    issues: &'a [IssueSummary],
    refs: &'a [IssueRef],
) -> impl Iterator<Item = IssueSummary> + 'a {
    issues
        .iter()
        .filter(|issue| {
            refs.iter()
                .any(|r| issue.matches(&r.project_name, r.local_id))
        })
        .cloned()
}

impl ReferenceLookup for KnownReferences {
    async fn list_referenced_issues(&self, refs: &[IssueRef]) -> anyhow::Result<IssueLookup> {
        Ok(IssueLookup {
            open_refs: requested(&self.open_issues, refs).collect(),
            closed_refs: requested(&self.closed_issues, refs).collect(),
        })
    }

    async fn list_referenced_users(&self, refs: &[UserRef]) -> anyhow::Result<UserLookup> {
        let users = self
            .users
            .iter()
            .filter(|user| refs.iter().any(|r| same_name(&r.display_name, &user.email)))
            .cloned()
            .collect();
        Ok(UserLookup { users })
    }
}
