//! Autolinking for issue comments and descriptions.
//!
//! Text is turned into a sequence of [`TextRun`]s in two phases. First
//! [`harvest_references`] scans every block for issue and user references
//! and resolves them through a [`ReferenceLookup`], one batch per
//! component. Then [`markup_autolinks`] rewrites each block, linking URLs,
//! short links, revisions, comment anchors and every reference the harvest
//! confirmed.
//!
//! ```
//! use autolinker::{KnownReferences, harvest_references, markup_autolinks};
//!
//! let known = KnownReferences::from_json(
//!     r#"{"closedIssues": [{"projectName": "chromium", "localId": 7}]}"#,
//! )
//! .unwrap();
//! let blocks = vec!["fixed in bug 7".to_string()];
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let refs = rt
//!     .block_on(harvest_references(&blocks, "chromium", &known))
//!     .unwrap();
//! let runs = markup_autolinks(&blocks[0], &refs, "chromium");
//! assert_eq!(runs[1].href.as_deref(), Some("/p/chromium/issues/detail?id=7"));
//! ```

#[macro_use]
mod macros;

pub mod components;
pub mod harvest;
pub mod lookup;
pub mod markup;
pub mod reference;
pub mod rewrite;
pub mod run;
pub mod segment;

pub use components::{Component, ComponentKey, LookupKind, component, components};
pub use harvest::{HarvestOptions, MAX_TOTAL_LENGTH, harvest_references, harvest_references_opts};
pub use lookup::{
    ComponentRefs,
    IssueLookup,
    IssueSummary,
    KnownReferences,
    LookupResult,
    ReferenceLookup,
    UserLookup,
    UserRecord,
};
pub use markup::markup_autolinks;
pub use reference::{IssueRef, Reference, UserRef};
pub use run::{STRIKE_THROUGH, Tag, TextRun, concat_content};
