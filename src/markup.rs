//! Turn one block of text into text runs.

use crate::{
    lookup::ComponentRefs,
    rewrite::autolink_chunk,
    run::TextRun,
    segment::{Chunk, segment},
};

/// Mark up `text` using references harvested earlier.
///
/// Line breaks become `br` runs and single-line `<b>...</b>` spans become
/// bold runs. Everything else is autolinked. When `refs` marks the input as
/// too large to autolink, plain chunks come back as untagged text.
///
/// # Examples
///
/// ```
/// use autolinker::{ComponentRefs, TextRun, markup_autolinks};
///
/// let runs = markup_autolinks("go/x\n<b>done</b>", &ComponentRefs::new(), "chromium");
/// assert_eq!(
///     runs,
///     vec![
///         TextRun::link("go/x", "http://go/x"),
///         TextRun::line_break(),
///         TextRun::bold("done"),
///     ]
/// );
/// ```
#[must_use]
pub fn markup_autolinks(text: &str, refs: &ComponentRefs, current_project: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    for chunk in segment(text) {
        match chunk {
            Chunk::Newline => runs.push(TextRun::line_break()),
            Chunk::Bold(inner) => runs.push(TextRun::bold(inner)),
            Chunk::Plain(plain) if refs.is_skipped() => runs.push(TextRun::text(plain)),
            Chunk::Plain(plain) => runs.extend(autolink_chunk(plain, refs, current_project)),
        }
    }
    runs
}
