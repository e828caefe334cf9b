//! CLI commands

mod completions;
mod notes;

pub use completions::CompletionsCommand;
pub use notes::NotesCommand;
