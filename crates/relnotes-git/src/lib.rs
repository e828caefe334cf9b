//! Relnotes Git - Git operations for release notes generation
//!
//! Wraps git2 to provide the commit-range query, remote URL derivation,
//! and branch-containment lookup that the pipeline consumes.

mod branches;
mod commits;
mod remote;
mod repository;
mod types;

pub use remote::{git_fetch, hosting_urls};
pub use repository::{GitRepo, Result};
pub use types::{CommitRecord, HostingUrls};
