//! Relnotes Core - Core library for release notes generation
//!
//! This crate provides the foundational types, error handling, and
//! configuration for the relnotes tool.

pub mod config;
pub mod error;

pub use config::{find_config, load_config, load_config_or_default, Config, LinkMode, RenderOptions};
pub use error::{GitError, RelnotesError, Result};
