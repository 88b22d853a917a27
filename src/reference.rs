//! References extracted from matched text.
//!
//! Extraction keeps the text exactly as matched. The harvester validates
//! raw references into [`IssueRef`] and [`UserRef`] keys before sending them
//! to the lookup service.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A reference pulled out of one pattern match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// An issue in a project. `local_id` is the matched digits.
    Issue {
        project_name: String,
        local_id: String,
    },
    /// A user, identified by the email address written in the text.
    User(String),
}

impl Reference {
    /// Build an issue reference from matched text.
    #[must_use]
    pub fn issue(project_name: impl Into<String>, local_id: impl Into<String>) -> Self {
        Self::Issue {
            project_name: project_name.into(),
            local_id: local_id.into(),
        }
    }

    /// Validate an issue reference.
    ///
    /// Returns `None` for user references, for an empty project name and for
    /// ids that are not positive integers.
    #[must_use]
    pub fn to_issue_ref(&self) -> Option<IssueRef> {
        match self {
            Self::Issue {
                project_name,
                local_id,
            } if !project_name.is_empty() => Some(IssueRef {
                project_name: project_name.clone(),
                local_id: parse_local_id(local_id)?,
            }),
            _ => None,
        }
    }

    /// Validate a user reference.
    #[must_use]
    pub fn to_user_ref(&self) -> Option<UserRef> {
        match self {
            Self::User(name) if !name.is_empty() => Some(UserRef {
                display_name: name.clone(),
            }),
            _ => None,
        }
    }
}

/// Parse a matched issue id. Zero and overflowing ids are rejected.
#[must_use]
pub fn parse_local_id(text: &str) -> Option<u32> {
    text.parse::<u32>().ok().filter(|id| *id > 0)
}

/// Case-insensitive name comparison used for projects and users.
#[must_use]
pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// A validated issue key sent to the lookup service.
///
/// Equality ignores the case of `project_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRef {
    pub project_name: String,
    pub local_id: u32,
}

impl PartialEq for IssueRef {
    fn eq(&self, other: &Self) -> bool {
        self.local_id == other.local_id && same_name(&self.project_name, &other.project_name)
    }
}

impl Eq for IssueRef {}

impl Hash for IssueRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.project_name.to_lowercase().hash(state);
        self.local_id.hash(state);
    }
}

/// A validated user key sent to the lookup service.
///
/// Equality ignores the case of `display_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub display_name: String,
}

impl PartialEq for UserRef {
    fn eq(&self, other: &Self) -> bool {
        same_name(&self.display_name, &other.display_name)
    }
}

impl Eq for UserRef {}

impl Hash for UserRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.display_name.to_lowercase().hash(state);
    }
}
