//! The release notes pipeline
//!
//! Normalize -> classify -> extract ticket -> render, one commit at a
//! time, then a stable batch sort by (category rank, message text).

use tracing::{debug, info, instrument};

use relnotes_core::config::RenderOptions;
use relnotes_git::CommitRecord;

use crate::classify::classify;
use crate::render::{render_line, RenderedLine};
use crate::ticket::{extract_ticket, format_ticket_prefix, ticket_from_branches, BranchLookup};

/// Maximum display width of the message field
const MESSAGE_WIDTH: usize = 90;

/// Turns commit records into sorted, formatted release-notes lines
pub struct NotesPipeline {
    options: RenderOptions,
    branch_lookup: Option<Box<dyn BranchLookup>>,
}

impl NotesPipeline {
    /// Create a pipeline with the given rendering options
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            branch_lookup: None,
        }
    }

    /// Enable the ticket-from-branch fallback.
    ///
    /// The lookup is consulted at most once per commit, only when subject
    /// extraction finds nothing, and its results are never cached across
    /// commits. This path is slow and strictly opt-in.
    pub fn with_branch_lookup<L: BranchLookup + 'static>(mut self, lookup: L) -> Self {
        self.branch_lookup = Some(Box::new(lookup));
        self
    }

    /// Render every commit and stable-sort the result.
    ///
    /// Every record yields exactly one line; unclassifiable subjects fall
    /// back to the "other" category and a missing ticket renders as an
    /// empty prefix.
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn render(&self, commits: &[CommitRecord]) -> Vec<RenderedLine> {
        info!(commit_count = commits.len(), "rendering release notes");

        let mut lines: Vec<RenderedLine> = commits
            .iter()
            .map(|commit| {
                let category = classify(&commit.subject);
                let ticket = extract_ticket(&commit.subject).or_else(|| {
                    self.branch_lookup
                        .as_deref()
                        .and_then(|lookup| ticket_from_branches(&commit.short_id, lookup))
                });
                let prefix = ticket.as_deref().map(format_ticket_prefix).unwrap_or_default();
                render_line(commit, category, &prefix, &self.options)
            })
            .collect();

        // Within a category, lines group by message text, not by date
        lines.sort_by(|a, b| {
            (&a.sort_key, &a.message_field).cmp(&(&b.sort_key, &b.message_field))
        });

        debug!(line_count = lines.len(), "release notes rendered");
        lines
    }

    /// Render and format into final display lines
    pub fn generate(&self, commits: &[CommitRecord]) -> Vec<String> {
        self.render(commits).iter().map(format_line).collect()
    }
}

/// Format a rendered line into fixed-width columns.
///
/// The first three fields are left-justified with minimum widths of 10,
/// 18 and 18; the message is hard-truncated at 90 characters.
pub fn format_line(line: &RenderedLine) -> String {
    let message: String = line.message_field.chars().take(MESSAGE_WIDTH).collect();
    format!(
        "{:<10} {:<18} {:<18} {}",
        line.sha_field, line.author_field, line.date_field, message
    )
}
