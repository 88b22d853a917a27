//! Collect referenced issues and users, then resolve them in batches.
//!
//! Every component that needs a lookup gets exactly one call to the lookup
//! service per harvest, carrying every valid reference found in every
//! block. The calls run concurrently and the harvest completes once all of
//! them have succeeded.

use std::{collections::HashSet, hash::Hash};

use anyhow::Context;
use futures_util::future::{FutureExt, LocalBoxFuture, try_join_all};
use tracing::{debug, info};

use crate::{
    components::{Component, ComponentKey, LookupKind, components},
    lookup::{ComponentRefs, LookupResult, ReferenceLookup},
    reference::Reference,
};

/// Above this many bytes of input, autolinking is skipped entirely.
pub const MAX_TOTAL_LENGTH: usize = 50 * 1024;

/// Limits applied while harvesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestOptions {
    /// Total input length beyond which no lookups are made and markup links
    /// nothing.
    pub max_total_length: usize,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            max_total_length: MAX_TOTAL_LENGTH,
        }
    }
}

/// Scan every block with every pattern of `component`.
#[must_use]
pub fn extract_references(
    component: &Component,
    blocks: &[String],
    current_project: &str,
) -> Vec<Reference> {
    let mut refs = Vec::new();
    for pattern in &component.patterns {
        for block in blocks {
            for caps in pattern.captures_iter(block) {
                refs.extend((component.extract)(&caps, current_project));
            }
        }
    }
    refs
}

/// Keep the first occurrence of each key, in order.
fn dedup<T: Eq + Hash + Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

type PendingLookup<'a> = LocalBoxFuture<'a, anyhow::Result<(ComponentKey, LookupResult)>>;

fn issue_lookup<'a, L: ReferenceLookup>(
    lookup: &'a L,
    key: ComponentKey,
    refs: &[Reference],
) -> Option<PendingLookup<'a>> {
    let issue_refs = dedup(refs.iter().filter_map(Reference::to_issue_ref));
    if issue_refs.is_empty() {
        return None;
    }
    info!(component = %key, count = issue_refs.len(), "looking up referenced issues");
    Some(
        async move {
            let found = lookup
                .list_referenced_issues(&issue_refs)
                .await
                .with_context(|| format!("issue lookup for {key} failed"))?;
            Ok((key, LookupResult::Issues(found)))
        }
        .boxed_local(),
    )
}

fn user_lookup<'a, L: ReferenceLookup>(
    lookup: &'a L,
    key: ComponentKey,
    refs: &[Reference],
) -> Option<PendingLookup<'a>> {
    let user_refs = dedup(refs.iter().filter_map(Reference::to_user_ref));
    if user_refs.is_empty() {
        return None;
    }
    info!(component = %key, count = user_refs.len(), "looking up referenced users");
    Some(
        async move {
            let found = lookup
                .list_referenced_users(&user_refs)
                .await
                .with_context(|| format!("user lookup for {key} failed"))?;
            Ok((key, LookupResult::Users(found)))
        }
        .boxed_local(),
    )
}

/// Harvest with the default [`HarvestOptions`].
///
/// # Errors
/// Returns the first lookup failure.
pub async fn harvest_references<L: ReferenceLookup>(
    blocks: &[String],
    current_project: &str,
    lookup: &L,
) -> anyhow::Result<ComponentRefs> {
    harvest_references_opts(blocks, current_project, lookup, HarvestOptions::default()).await
}

/// Find every reference in `blocks` that needs a lookup and resolve them.
///
/// Malformed and duplicate references are dropped before the lookup.
/// Components with nothing to look up contribute no entry. If the blocks
/// together exceed `options.max_total_length`, nothing is looked up and a
/// skipped map is returned.
///
/// # Errors
/// Returns the first lookup failure; results of other lookups are discarded.
pub async fn harvest_references_opts<L: ReferenceLookup>(
    blocks: &[String],
    current_project: &str,
    lookup: &L,
    options: HarvestOptions,
) -> anyhow::Result<ComponentRefs> {
    let total_length: usize = blocks.iter().map(String::len).sum();
    if total_length > options.max_total_length {
        debug!(
            total_length,
            max_total_length = options.max_total_length,
            "input too large, skipping autolinking"
        );
        return Ok(ComponentRefs::skipped());
    }

    let mut pending = Vec::new();
    for component in components() {
        let Some(kind) = component.lookup else {
            continue;
        };
        let refs = extract_references(component, blocks, current_project);
        debug!(component = %component.key, ?refs, "extracted references");
        let request = match kind {
            LookupKind::Issues => issue_lookup(lookup, component.key, &refs),
            LookupKind::Users => user_lookup(lookup, component.key, &refs),
        };
        pending.extend(request);
    }

    let settled = try_join_all(pending).await?;
    Ok(settled.into_iter().collect())
}
