//! Line rendering
//!
//! Assembles the final output fields for one commit and applies the
//! configured link decoration to the commit-id and author fields.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use relnotes_core::config::{LinkMode, RenderOptions};
use relnotes_git::CommitRecord;

use crate::classify::{Category, TYPE_PREFIX};
use crate::normalize::normalize;

/// The type prefix as it appears in the raw subject: an optional
/// bracketed ticket, any non-letter noise, then the lowercase type token
/// and its punctuation
static RAW_TYPE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\[[^\]]*\]\s+)?\P{L}*[a-z]+(?:\([^)]*\))?!?:\s*").expect("Invalid regex")
});

/// One fully rendered output line, ready for sorting and display
#[derive(Debug, Clone, Serialize)]
pub struct RenderedLine {
    /// Zero-padded category rank, `"01"`..`"99"`
    pub sort_key: String,
    /// Commit-id field, possibly link-decorated
    pub sha_field: String,
    /// Author field, possibly link-decorated
    pub author_field: String,
    /// Display date field
    pub date_field: String,
    /// Ticket prefix + category label + cleaned subject
    pub message_field: String,
}

/// Render one commit into its output fields
pub fn render_line(
    commit: &CommitRecord,
    category: Category,
    ticket_prefix: &str,
    options: &RenderOptions,
) -> RenderedLine {
    let handle = author_handle(&commit.author_email);

    let message = if TYPE_PREFIX.is_match(&normalize(&commit.subject)) {
        let rest = RAW_TYPE_PREFIX.replace(&commit.subject, "");
        format!("{}{} — {}", ticket_prefix, category.label, rest)
    } else {
        format!("{}{}", ticket_prefix, commit.subject)
    };

    let commit_url = options
        .commit_url_base
        .as_ref()
        .map(|base| format!("{}/-/commit/{}", base, commit.short_id));
    let profile_url = options
        .profile_url_base
        .as_ref()
        .map(|base| format!("{}/{}", base, handle));

    RenderedLine {
        sort_key: format!("{:02}", category.rank),
        sha_field: link(&commit.short_id, commit_url, options.link_mode),
        author_field: link(&format!("@{}", handle), profile_url, options.link_mode),
        date_field: commit.date.clone(),
        message_field: message,
    }
}

/// Derive the author handle from an email: everything before the first
/// `@`, or the whole string when there is none
fn author_handle(email: &str) -> &str {
    email.split_once('@').map_or(email, |(handle, _)| handle)
}

/// Decorate text with a link, degrading to plain text without a URL
fn link(text: &str, url: Option<String>, mode: LinkMode) -> String {
    match (mode, url) {
        (LinkMode::Plain, _) | (_, None) => text.to_string(),
        (LinkMode::Markdown, Some(url)) => format!("[{}]({})", text, url),
        (LinkMode::Hyperlink, Some(url)) => {
            format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    fn record(subject: &str) -> CommitRecord {
        CommitRecord::new("a1b2c3d", "alice@example.com", "16/02/2026 - 15:42", subject)
    }

    fn plain() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn test_message_with_type_prefix() {
        let commit = record("feat: add sorting");
        let line = render_line(&commit, classify(&commit.subject), "", &plain());
        assert_eq!(line.message_field, "✨ feat — add sorting");
        assert_eq!(line.sort_key, "01");
    }

    #[test]
    fn test_message_with_ticket_and_bracket_prefix() {
        let commit = record("[#12345] feat: add sorting");
        let line = render_line(&commit, classify(&commit.subject), "[#12345] ", &plain());
        assert_eq!(line.message_field, "[#12345] ✨ feat — add sorting");
    }

    #[test]
    fn test_message_without_type_prefix() {
        let commit = record("Update the readme");
        let line = render_line(&commit, classify(&commit.subject), "", &plain());
        assert_eq!(line.message_field, "Update the readme");
        assert_eq!(line.sort_key, "99");
    }

    #[test]
    fn test_unrecognized_type_keeps_other_label() {
        let commit = record("wip: half done");
        let line = render_line(&commit, classify(&commit.subject), "", &plain());
        assert_eq!(line.message_field, "• other — half done");
    }

    #[test]
    fn test_author_handle() {
        let commit = record("feat: x");
        let line = render_line(&commit, classify(&commit.subject), "", &plain());
        assert_eq!(line.author_field, "@alice");
    }

    #[test]
    fn test_author_without_at_sign() {
        let commit = CommitRecord::new("a1b2c3d", "buildbot", "16/02/2026 - 15:42", "fix: x");
        let line = render_line(&commit, classify(&commit.subject), "", &plain());
        assert_eq!(line.author_field, "@buildbot");
    }

    #[test]
    fn test_markdown_links() {
        let opts = RenderOptions::new(LinkMode::Markdown)
            .with_commit_url_base("https://gitlab.com/g/p")
            .with_profile_url_base("https://gitlab.com");
        let commit = record("fix: y");
        let line = render_line(&commit, classify(&commit.subject), "", &opts);
        assert_eq!(
            line.sha_field,
            "[a1b2c3d](https://gitlab.com/g/p/-/commit/a1b2c3d)"
        );
        assert_eq!(line.author_field, "[@alice](https://gitlab.com/alice)");
    }

    #[test]
    fn test_hyperlink_links() {
        let opts = RenderOptions::new(LinkMode::Hyperlink)
            .with_commit_url_base("https://gitlab.com/g/p");
        let commit = record("fix: y");
        let line = render_line(&commit, classify(&commit.subject), "", &opts);
        assert_eq!(
            line.sha_field,
            "\x1b]8;;https://gitlab.com/g/p/-/commit/a1b2c3d\x1b\\a1b2c3d\x1b]8;;\x1b\\"
        );
        // No profile base configured: author degrades to plain
        assert_eq!(line.author_field, "@alice");
    }

    #[test]
    fn test_missing_bases_degrade_to_plain() {
        let opts = RenderOptions::new(LinkMode::Markdown);
        let commit = record("fix: y");
        let line = render_line(&commit, classify(&commit.subject), "", &opts);
        assert_eq!(line.sha_field, "a1b2c3d");
        assert_eq!(line.author_field, "@alice");
    }
}
