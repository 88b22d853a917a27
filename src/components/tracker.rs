//! Issue references: `crbug.com` links and `bug 123` style shorthand.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{
    lookup::{IssueLookup, LookupResult},
    reference::Reference,
    run::{STRIKE_THROUGH, TextRun},
};

/// Project used by `crbug.com/<id>` links that name no project.
pub(crate) const CRBUG_DEFAULT_PROJECT: &str = "chromium";

pub(super) static CRBUG_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)\b(?:https?://)?crbug\.com/(?:(?P<project>\b[-a-z0-9]+)/)?(?P<local_id>[0-9]+)\b(?P<comment>#c[0-9]+)?",
    "crbug link pattern should compile",
);

// A `bug`/`issue` prefix followed by one or more references chained with
// commas, `and` or `or`.
pub(super) static ISSUE_TRACKER_RE: LazyLock<Regex> = lazy_regex!(
    r"(?xi)
        \b(?:issues?|bugs?)[\x20\t]*(?::|=|\b)
        (?:
            [\x20\t]*
            (?:\b[-a-z0-9]+[:\#])?
            \#?
            [0-9]+\b
            (?:,?[\x20\t]*(?:and|or)?)?
        )+
    ",
    "issue tracker reference pattern should compile",
);

// One `[project:][#]id` item inside an `ISSUE_TRACKER_RE` match.
static PROJECT_LOCALID_RE: LazyLock<Regex> = lazy_regex!(
    r"(?xi)
        (?:\b(?:issue|bug)[\x20\t]*(?::|=)?[\x20\t]*)?
        (?:(?P<project>\b[-a-z0-9]+)[:\#])?
        \#?
        (?P<local_id>[0-9]+)
    ",
    "single issue reference pattern should compile",
);

/// Link `content` to the issue if the lookup confirms it exists.
fn issue_ref_run(
    project_name: &str,
    local_id: &str,
    found: Option<&IssueLookup>,
    content: &str,
    anchor: &str,
) -> TextRun {
    match found.and_then(|issues| issues.find(project_name, local_id)) {
        Some((issue, closed)) => TextRun::link(
            content,
            format!("/p/{project_name}/issues/detail?id={local_id}{anchor}"),
        )
        .with_title(issue.summary.clone().unwrap_or_default())
        .with_css(if closed { STRIKE_THROUGH } else { "" }),
        None => TextRun::text(content),
    }
}

fn crbug_project<'t>(caps: &Captures<'t>) -> &'t str {
    caps.name("project")
        .map_or(CRBUG_DEFAULT_PROJECT, |m| m.as_str())
}

/// `crbug.com` links ignore the current project.
pub(super) fn extract_crbug_refs(caps: &Captures<'_>, _current_project: &str) -> Vec<Reference> {
    vec![Reference::issue(crbug_project(caps), &caps["local_id"])]
}

pub(super) fn replace_crbug_ref(
    caps: &Captures<'_>,
    found: Option<&LookupResult>,
    _current_project: &str,
) -> Vec<TextRun> {
    let anchor = caps.name("comment").map_or("", |m| m.as_str());
    vec![issue_ref_run(
        crbug_project(caps),
        &caps["local_id"],
        found.and_then(LookupResult::as_issues),
        &caps[0],
        anchor,
    )]
}

/// Each item takes the project most recently named in the same match, or
/// the current project when none has been named yet.
pub(super) fn extract_tracker_refs(caps: &Captures<'_>, current_project: &str) -> Vec<Reference> {
    let mut project = current_project;
    PROJECT_LOCALID_RE
        .captures_iter(&caps[0])
        .map(|item| {
            if let Some(named) = item.name("project") {
                project = named.as_str();
            }
            Reference::issue(project, &item["local_id"])
        })
        .collect()
}

/// Split a chained reference into one run per item, keeping the text
/// between items (including any `bug`/`issue` prefix) as plain runs.
pub(super) fn replace_tracker_refs(
    caps: &Captures<'_>,
    found: Option<&LookupResult>,
    current_project: &str,
) -> Vec<TextRun> {
    let found = found.and_then(LookupResult::as_issues);
    let whole = &caps[0];
    let mut project = current_project;
    let mut runs = Vec::new();
    let mut pos = 0;
    for item in PROJECT_LOCALID_RE.captures_iter(whole) {
        let Some(m) = item.get(0) else { continue };
        if m.start() > pos {
            runs.push(TextRun::text(&whole[pos..m.start()]));
        }
        if let Some(named) = item.name("project") {
            project = named.as_str();
        }
        runs.push(issue_ref_run(
            project,
            &item["local_id"],
            found,
            m.as_str(),
            "",
        ));
        pos = m.end();
    }
    if pos < whole.len() {
        runs.push(TextRun::text(&whole[pos..]));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::IssueSummary;

    fn caps<'t>(re: &Regex, text: &'t str) -> Captures<'t> {
        re.captures(text).expect("pattern should match")
    }

    fn closed(project: &str, id: u32, summary: Option<&str>) -> LookupResult {
        LookupResult::Issues(IssueLookup {
            open_refs: Vec::new(),
            closed_refs: vec![IssueSummary::new(project, id, summary)],
        })
    }

    #[test]
    fn extracts_crbug_project_and_id() {
        let c = caps(&CRBUG_RE, "https://crbug.com/monorail/1234");
        assert_eq!(
            extract_crbug_refs(&c, ""),
            vec![Reference::issue("monorail", "1234")]
        );
    }

    #[test]
    fn crbug_defaults_to_chromium_and_ignores_current_project() {
        let c = caps(&CRBUG_RE, "http://crbug.com/1234");
        assert_eq!(
            extract_crbug_refs(&c, "foo"),
            vec![Reference::issue("chromium", "1234")]
        );
    }

    #[test]
    fn replaces_closed_crbug_with_strike_through() {
        let text = "crbug.com/monorail/1234";
        let c = caps(&CRBUG_RE, text);
        let found = closed("monorail", 1234, Some("Issue summary"));
        assert_eq!(
            replace_crbug_ref(&c, Some(&found), ""),
            vec![
                TextRun::link(text, "/p/monorail/issues/detail?id=1234")
                    .with_title("Issue summary")
                    .with_css(STRIKE_THROUGH)
            ]
        );
    }

    #[test]
    fn crbug_comment_anchor_is_appended() {
        let text = "crbug.com/monorail/1234#c1";
        let c = caps(&CRBUG_RE, text);
        let found = closed("monorail", 1234, None);
        let runs = replace_crbug_ref(&c, Some(&found), "");
        assert_eq!(runs.len(), 1);
        assert_eq!(
            runs[0].href.as_deref(),
            Some("/p/monorail/issues/detail?id=1234#c1")
        );
        assert_eq!(runs[0].content, text);
        assert_eq!(runs[0].title.as_deref(), Some(""));
    }

    #[test]
    fn unconfirmed_crbug_stays_plain() {
        let c = caps(&CRBUG_RE, "crbug.com/1234");
        assert_eq!(
            replace_crbug_ref(&c, None, "foo"),
            vec![TextRun::text("crbug.com/1234")]
        );
    }

    #[test]
    fn chained_refs_inherit_the_last_named_project() {
        let c = caps(
            &ISSUE_TRACKER_RE,
            "bugs=123, monorail:234 or #345 and PROJ:#456",
        );
        assert_eq!(&c[0], "bugs=123, monorail:234 or #345 and PROJ:#456");
        assert_eq!(
            extract_tracker_refs(&c, "foo-project"),
            vec![
                Reference::issue("foo-project", "123"),
                Reference::issue("monorail", "234"),
                Reference::issue("monorail", "345"),
                Reference::issue("PROJ", "456"),
            ]
        );
    }

    #[test]
    fn replaces_chained_refs_item_by_item() {
        let c = caps(
            &ISSUE_TRACKER_RE,
            "bugs=123, monorail:234 or #345 and PROJ:#456",
        );
        let found = LookupResult::Issues(IssueLookup {
            open_refs: vec![
                IssueSummary::new("monorail", 888, Some("sum")),
                IssueSummary::new("chromium", 123, Some("ma")),
            ],
            closed_refs: vec![IssueSummary::new("proj", 456, Some("ry"))],
        });
        assert_eq!(
            replace_tracker_refs(&c, Some(&found), "chromium"),
            vec![
                TextRun::text("bugs="),
                TextRun::link("123", "/p/chromium/issues/detail?id=123")
                    .with_title("ma")
                    .with_css(""),
                TextRun::text(", "),
                TextRun::text("monorail:234"),
                TextRun::text(" or "),
                TextRun::text("#345"),
                TextRun::text(" and "),
                TextRun::link("PROJ:#456", "/p/PROJ/issues/detail?id=456")
                    .with_title("ry")
                    .with_css(STRIKE_THROUGH),
            ]
        );
    }

    #[test]
    fn mixed_case_projects_link_with_written_name() {
        let c = caps(
            &ISSUE_TRACKER_RE,
            "bugs=123, monorail:234 or #345 and PROJ:#456",
        );
        let found = LookupResult::Issues(IssueLookup {
            open_refs: vec![IssueSummary::new("mOnOrAIl", 234, None)],
            closed_refs: vec![IssueSummary::new("LeMuR", 123, None)],
        });
        let runs = replace_tracker_refs(&c, Some(&found), "lEmUr");
        assert_eq!(
            runs[1],
            TextRun::link("123", "/p/lEmUr/issues/detail?id=123")
                .with_title("")
                .with_css(STRIKE_THROUGH)
        );
        assert_eq!(
            runs[3],
            TextRun::link("monorail:234", "/p/monorail/issues/detail?id=234")
                .with_title("")
                .with_css("")
        );
        assert_eq!(runs[5], TextRun::text("#345"));
        assert_eq!(runs[7], TextRun::text("PROJ:#456"));
    }

    #[test]
    fn singular_prefix_is_part_of_the_link() {
        let found = LookupResult::Issues(IssueLookup {
            open_refs: vec![IssueSummary::new("chromium", 7, None)],
            closed_refs: Vec::new(),
        });
        for text in ["bug 7", "issue: 7"] {
            let c = caps(&ISSUE_TRACKER_RE, text);
            assert_eq!(
                replace_tracker_refs(&c, Some(&found), "chromium"),
                vec![
                    TextRun::link(text, "/p/chromium/issues/detail?id=7")
                        .with_title("")
                        .with_css("")
                ]
            );
        }
    }

    #[test]
    fn malformed_tracker_refs_do_not_match() {
        for text in ["bug123", "bug 123a", "bug-123"] {
            assert!(!ISSUE_TRACKER_RE.is_match(text), "{text} should not match");
        }
    }

    #[test]
    fn trailing_separator_is_kept_as_plain_text() {
        let c = caps(&ISSUE_TRACKER_RE, "bugs = 456, monorail:123 get linked");
        assert_eq!(&c[0], "bugs = 456, monorail:123 ");
        let runs = replace_tracker_refs(&c, None, "chromium");
        assert_eq!(
            runs,
            vec![
                TextRun::text("bugs = "),
                TextRun::text("456"),
                TextRun::text(", "),
                TextRun::text("monorail:123"),
                TextRun::text(" "),
            ]
        );
    }
}
