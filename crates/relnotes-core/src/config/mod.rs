//! Configuration system for relnotes

mod loader;
mod types;

pub use loader::*;
pub use types::*;
