//! Split text into newline, bold and plain chunks.
//!
//! Only plain chunks are autolinked. A bold span must sit on one line: a
//! `<b>` whose content contains a newline is split at the newline like any
//! other text and its markers stay literal.

use std::sync::LazyLock;

use regex::Regex;

// A bold span may contain a bare `\r`; only `\n` ends one. The span is
// matched before the line-break alternatives.
static NEWLINE_OR_BOLD_RE: LazyLock<Regex> = lazy_regex!(
    r"<b>[^<\n]+</b>|\r\n?|\n",
    "newline or bold pattern should compile",
);

static NEWLINE_RE: LazyLock<Regex> = lazy_regex!(r"^(?:\r\n?|\n)$", "newline pattern should compile");

/// A top-level piece of input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'a> {
    /// A single line break (`\n`, `\r` or `\r\n`).
    Newline,
    /// The inner text of a `<b>...</b>` span.
    Bold(&'a str),
    /// Text eligible for autolinking.
    Plain(&'a str),
}

fn classify(piece: &str) -> Chunk<'_> {
    if NEWLINE_RE.is_match(piece) {
        Chunk::Newline
    } else if let Some(inner) = piece
        .strip_prefix("<b>")
        .and_then(|rest| rest.strip_suffix("</b>"))
        .filter(|inner| !inner.is_empty())
    {
        Chunk::Bold(inner)
    } else {
        Chunk::Plain(piece)
    }
}

/// Split `text` into chunks.
///
/// Surrounding whitespace is trimmed first. Newlines and single-line bold
/// spans become their own chunks; the text between them is plain. Empty
/// pieces are dropped.
///
/// # Examples
///
/// ```
/// use autolinker::segment::{Chunk, segment};
///
/// assert_eq!(
///     segment("a <b>b</b>\nc"),
///     vec![
///         Chunk::Plain("a "),
///         Chunk::Bold("b"),
///         Chunk::Newline,
///         Chunk::Plain("c"),
///     ]
/// );
/// ```
#[must_use]
pub fn segment(text: &str) -> Vec<Chunk<'_>> {
    let text = text.trim();
    let mut chunks = Vec::new();
    let mut pos = 0;
    for m in NEWLINE_OR_BOLD_RE.find_iter(text) {
        if m.start() > pos {
            chunks.push(classify(&text[pos..m.start()]));
        }
        chunks.push(classify(m.as_str()));
        pos = m.end();
    }
    if pos < text.len() {
        chunks.push(classify(&text[pos..]));
    }
    chunks
}
