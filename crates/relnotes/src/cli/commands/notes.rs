//! Release notes generation command

use clap::{Args, ValueEnum};
use console::style;
use tracing::{info, warn};

use relnotes_changelog::{BranchLookup, NotesPipeline};
use relnotes_core::config::{load_config_or_default, Config, LinkMode, RenderOptions};
use relnotes_git::{git_fetch, GitRepo};

use crate::cli::{Cli, OutputFormat};

/// Generate release notes for a commit range
#[derive(Debug, Args)]
pub struct NotesCommand {
    /// Start of the range (exclusive), or a full `A..B` range
    pub from: Option<String>,

    /// End of the range (inclusive)
    #[arg(default_value = "HEAD")]
    pub to: String,

    /// Link decoration for commit and author fields
    #[arg(long, value_enum, default_value = "auto", env = "RELNOTES_LINK_MODE")]
    pub link_mode: LinkModeArg,

    /// Derive a ticket from containing remote branches when the subject
    /// has none (slow: scans every remote branch per commit)
    #[arg(long, env = "RELNOTES_TICKET_FROM_BRANCH")]
    pub ticket_from_branch: bool,

    /// Fetch the remote before walking the range
    #[arg(long)]
    pub fetch: bool,

    /// Remote used for URL derivation and fetching
    #[arg(long)]
    pub remote: Option<String>,
}

/// Link mode CLI argument, with terminal auto-detection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LinkModeArg {
    /// Hyperlinks when stdout is a terminal, markdown otherwise
    #[default]
    Auto,
    /// No decoration
    Plain,
    /// OSC-8 terminal hyperlinks
    Hyperlink,
    /// Markdown links
    Markdown,
}

impl NotesCommand {
    /// Execute the notes command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let Some(from) = &self.from else {
            anyhow::bail!("missing commit range (e.g. `relnotes v1.0.0` or `relnotes v1.0.0..HEAD`)");
        };
        let (from, to) = split_range(from, &self.to);

        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let remote = self.remote.clone().unwrap_or_else(|| config.remote.clone());
        info!(%from, %to, %remote, "generating release notes");

        if self.fetch {
            git_fetch(&remote)?;
        }

        let repo = GitRepo::discover(&cwd)?;
        let commits = repo.commits_in_range(&from, &to)?;

        if commits.is_empty() {
            if !cli.quiet {
                println!(
                    "{}",
                    style(format!("No commits found in {}..{}.", from, to)).yellow()
                );
            }
            return Ok(());
        }

        let options = self.render_options(&config, &repo, &remote);

        let mut pipeline = NotesPipeline::new(options);
        if self.ticket_from_branch || config.ticket_from_branch {
            // Second handle on the same repository, owned by the lookup
            pipeline = pipeline.with_branch_lookup(RepoBranchLookup {
                repo: GitRepo::discover(&cwd)?,
            });
        }

        match cli.format {
            OutputFormat::Json => {
                let lines = pipeline.render(&commits);
                println!("{}", serde_json::to_string_pretty(&lines)?);
            }
            OutputFormat::Text => {
                for line in pipeline.generate(&commits) {
                    println!("{}", line);
                }
            }
        }

        Ok(())
    }

    /// Resolve the render options from flags, config file, and remote URL
    fn render_options(&self, config: &Config, repo: &GitRepo, remote: &str) -> RenderOptions {
        let link_mode = match self.link_mode {
            LinkModeArg::Plain => LinkMode::Plain,
            LinkModeArg::Hyperlink => LinkMode::Hyperlink,
            LinkModeArg::Markdown => LinkMode::Markdown,
            LinkModeArg::Auto => config.link_mode.unwrap_or_else(|| {
                if console::Term::stdout().is_term() {
                    LinkMode::Hyperlink
                } else {
                    LinkMode::Markdown
                }
            }),
        };

        let mut options = RenderOptions::new(link_mode);
        if let Some(urls) = repo.remote_hosting_urls(remote) {
            options = options
                .with_commit_url_base(urls.web_base)
                .with_profile_url_base(urls.profile_base);
        }
        options
    }
}

/// Split a `from` argument that may itself carry a full `A..B` range
fn split_range(from: &str, to: &str) -> (String, String) {
    match from.split_once("..") {
        Some((a, b)) if !a.is_empty() && !b.is_empty() => {
            // Tolerate `A...B` symmetric-difference spelling
            (a.to_string(), b.trim_start_matches('.').to_string())
        }
        _ => (from.to_string(), to.to_string()),
    }
}

/// Branch lookup backed by the local repository's remote branches
struct RepoBranchLookup {
    repo: GitRepo,
}

impl BranchLookup for RepoBranchLookup {
    fn branches_containing(&self, short_id: &str) -> Vec<String> {
        match self.repo.branches_containing(short_id) {
            Ok(branches) => branches,
            Err(e) => {
                warn!(short_id, error = %e, "branch lookup failed, skipping fallback");
                Vec::new()
            }
        }
    }
}
