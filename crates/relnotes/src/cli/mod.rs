//! CLI definition and command handling

pub mod commands;

use clap::{Parser, Subcommand};

use commands::{CompletionsCommand, NotesCommand};

/// relnotes - Release notes from a git commit range
#[derive(Debug, Parser)]
#[command(name = "relnotes")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Suppress output except errors and the notes themselves
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub notes: NotesCommand,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width text lines
    #[default]
    Text,
    /// JSON records
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Some(Commands::Completions(ref cmd)) => cmd.execute(),
            None => self.notes.execute(&self),
        }
    }
}
