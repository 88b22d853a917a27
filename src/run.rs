//! Text runs: the output unit of autolinking.
//!
//! A run is either literal text or a tagged span (hyperlink, bold text or a
//! line break). Runs never overlap and, for any chunk of input, the
//! concatenation of their `content` fields is exactly the chunk.

use serde::Serialize;

/// Markup applied to a [`TextRun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Hyperlink; the run carries an `href`.
    A,
    /// Bold text passed through without autolinking.
    B,
    /// Line break with empty content.
    Br,
}

/// Css class for links to closed issues.
pub const STRIKE_THROUGH: &str = "strike-through";

/// One span of output text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextRun {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
}

impl TextRun {
    /// Plain, untagged text.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// A hyperlink to `href` displaying `content`.
    #[must_use]
    pub fn link(content: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: Some(Tag::A),
            href: Some(href.into()),
            ..Self::default()
        }
    }

    /// Bold text.
    #[must_use]
    pub fn bold(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: Some(Tag::B),
            ..Self::default()
        }
    }

    /// A line break.
    #[must_use]
    pub fn line_break() -> Self {
        Self {
            tag: Some(Tag::Br),
            ..Self::default()
        }
    }

    /// Attach a tooltip title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach a css class.
    #[must_use]
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    /// Whether an earlier pass already claimed this run.
    #[must_use]
    pub fn is_tagged(&self) -> bool {
        self.tag.is_some()
    }
}

/// Concatenate the visible content of `runs`.
///
/// # Examples
///
/// ```
/// use autolinker::{TextRun, concat_content};
///
/// let runs = vec![TextRun::text("see "), TextRun::link("go/x", "http://go/x")];
/// assert_eq!(concat_content(&runs), "see go/x");
/// ```
#[must_use]
pub fn concat_content(runs: &[TextRun]) -> String {
    runs.iter().map(|r| r.content.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_run_serializes_content_only() {
        let json = serde_json::to_string(&TextRun::text("hi")).unwrap();
        assert_eq!(json, r#"{"content":"hi"}"#);
    }

    #[test]
    fn line_break_serializes_tag_only() {
        let json = serde_json::to_string(&TextRun::line_break()).unwrap();
        assert_eq!(json, r#"{"tag":"br"}"#);
    }

    #[test]
    fn issue_link_keeps_empty_title_and_css() {
        let run = TextRun::link("123", "/p/x/issues/detail?id=123")
            .with_title("")
            .with_css("");
        let json = serde_json::to_string(&run).unwrap();
        assert_eq!(
            json,
            r#"{"content":"123","tag":"a","href":"/p/x/issues/detail?id=123","title":"","css":""}"#
        );
    }
}
