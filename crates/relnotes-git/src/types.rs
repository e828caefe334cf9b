//! Git types

use serde::{Deserialize, Serialize};

/// One non-merge commit from the requested range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Short commit hash (first 7 characters)
    pub short_id: String,
    /// Author email, as recorded in the commit
    pub author_email: String,
    /// Display date, `dd/mm/yyyy - HH:MM` in the author's offset
    pub date: String,
    /// First line of the commit message
    pub subject: String,
}

impl CommitRecord {
    /// Create a new CommitRecord
    pub fn new(
        short_id: impl Into<String>,
        author_email: impl Into<String>,
        date: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            short_id: short_id.into(),
            author_email: author_email.into(),
            date: date.into(),
            subject: subject.into(),
        }
    }
}

/// Web URLs derived from a remote URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostingUrls {
    /// Repository web base, e.g. `https://gitlab.com/group/project`
    pub web_base: String,
    /// Host base for user profiles, e.g. `https://gitlab.com`
    pub profile_base: String,
}
