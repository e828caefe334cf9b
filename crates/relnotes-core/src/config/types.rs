//! Configuration types

use serde::{Deserialize, Serialize};

/// Main configuration for relnotes, loaded from `relnotes.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How commit and author fields are linked in the output
    pub link_mode: Option<LinkMode>,

    /// Derive a ticket from containing remote branches when the subject
    /// has none (slow: scans every remote branch per commit)
    pub ticket_from_branch: bool,

    /// Remote used for URL derivation and fetching
    pub remote: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            link_mode: None,
            ticket_from_branch: false,
            remote: "origin".to_string(),
        }
    }
}

/// Link decoration applied to commit-id and author fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMode {
    /// No decoration
    Plain,
    /// OSC-8 terminal hyperlinks
    Hyperlink,
    /// Markdown links
    Markdown,
}

/// Immutable per-run rendering options, fixed at pipeline start
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Link decoration mode
    pub link_mode: LinkMode,
    /// Web base URL of the repository (e.g. `https://gitlab.com/group/project`);
    /// links degrade to plain text when absent
    pub commit_url_base: Option<String>,
    /// Base URL for user profiles (e.g. `https://gitlab.com`)
    pub profile_url_base: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            link_mode: LinkMode::Plain,
            commit_url_base: None,
            profile_url_base: None,
        }
    }
}

impl RenderOptions {
    /// Create options with the given link mode and no URL bases
    pub fn new(link_mode: LinkMode) -> Self {
        Self {
            link_mode,
            ..Default::default()
        }
    }

    /// Set the commit URL base
    pub fn with_commit_url_base(mut self, base: impl Into<String>) -> Self {
        self.commit_url_base = Some(base.into());
        self
    }

    /// Set the user profile URL base
    pub fn with_profile_url_base(mut self, base: impl Into<String>) -> Self {
        self.profile_url_base = Some(base.into());
        self
    }
}
