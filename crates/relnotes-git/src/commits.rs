//! Commit history operations

use chrono::{FixedOffset, Offset, TimeZone, Utc};
use git2::Sort;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::CommitRecord;

impl GitRepo {
    /// Get the non-merge commits reachable from `to` but not from `from`.
    ///
    /// Both references are resolved before any walking starts; an
    /// unresolvable reference fails the whole query.
    #[instrument(skip(self))]
    pub fn commits_in_range(&self, from: &str, to: &str) -> Result<Vec<CommitRecord>> {
        let from_oid = self.resolve_ref(from)?;
        let to_oid = self.resolve_ref(to)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(to_oid)?;
        revwalk.hide(from_oid)?;

        let mut records = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            // Merge commits carry no changelog content of their own
            if commit.parent_count() > 1 {
                continue;
            }
            records.push(commit_to_record(&commit));
        }

        debug!(
            from,
            to,
            count = records.len(),
            "collected commits in range"
        );
        Ok(records)
    }
}

/// Convert a git2 Commit to a CommitRecord
fn commit_to_record(commit: &git2::Commit<'_>) -> CommitRecord {
    let short_id: String = commit.id().to_string().chars().take(7).collect();
    let author = commit.author();

    let subject = commit.summary().unwrap_or("(no message)").to_string();

    CommitRecord::new(
        short_id,
        author.email().unwrap_or("unknown").to_string(),
        format_display_date(commit.time()),
        subject,
    )
}

/// Format a commit time as `dd/mm/yyyy - HH:MM` in the author's offset
fn format_display_date(time: git2::Time) -> String {
    let offset =
        FixedOffset::east_opt(time.offset_minutes() * 60).unwrap_or_else(|| Utc.fix());

    match Utc.timestamp_opt(time.seconds(), 0).single() {
        Some(utc) => utc
            .with_timezone(&offset)
            .format("%d/%m/%Y - %H:%M")
            .to_string(),
        None => String::new(),
    }
}
