//! Relnotes Changelog - Commit classification and release notes rendering
//!
//! This crate turns a flat sequence of commit records into sorted,
//! formatted release-notes lines: normalize the subject, classify it by
//! Conventional Commits type, extract a best-effort ticket identifier,
//! render the line, then stable-sort by category rank and message.

pub mod classify;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod ticket;

pub use classify::{classify, Category};
pub use normalize::normalize;
pub use pipeline::NotesPipeline;
pub use render::RenderedLine;
pub use ticket::{extract_ticket, format_ticket_prefix, BranchLookup};
