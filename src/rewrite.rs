//! Apply the registry to one plain chunk.

use regex::Regex;

use crate::{
    components::{Component, ReplaceFn, components},
    lookup::{ComponentRefs, LookupResult},
    run::TextRun,
};

/// Rescan every untagged run with `pattern`, splicing in the replacement
/// runs for each match. Tagged runs pass through untouched.
fn apply_pattern(
    runs: Vec<TextRun>,
    pattern: &Regex,
    replace: ReplaceFn,
    found: Option<&LookupResult>,
    current_project: &str,
) -> Vec<TextRun> {
    let mut out = Vec::with_capacity(runs.len());
    for run in runs {
        if run.is_tagged() {
            out.push(run);
            continue;
        }
        if !pattern.is_match(&run.content) {
            out.push(run);
            continue;
        }
        let content = run.content.as_str();
        let mut pos = 0;
        for caps in pattern.captures_iter(content) {
            let Some(m) = caps.get(0) else { continue };
            if m.start() > pos {
                out.push(TextRun::text(&content[pos..m.start()]));
            }
            out.extend(replace(&caps, found, current_project));
            pos = m.end();
        }
        if pos < content.len() {
            out.push(TextRun::text(&content[pos..]));
        }
    }
    out
}

fn apply_component(
    runs: Vec<TextRun>,
    component: &Component,
    refs: &ComponentRefs,
    current_project: &str,
) -> Vec<TextRun> {
    let found = refs.get(component.key);
    component.patterns.iter().fold(runs, |runs, pattern| {
        apply_pattern(runs, pattern, component.replace, found, current_project)
    })
}

/// Autolink one plain chunk.
///
/// The result's concatenated content equals `chunk`.
#[must_use]
pub fn autolink_chunk(chunk: &str, refs: &ComponentRefs, current_project: &str) -> Vec<TextRun> {
    components()
        .iter()
        .fold(vec![TextRun::text(chunk)], |runs, component| {
            apply_component(runs, component, refs, current_project)
        })
}
