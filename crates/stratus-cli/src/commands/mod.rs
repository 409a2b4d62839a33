//! Subcommand implementations. Each returns the rendered output.

pub mod modifier;
pub mod resource;
pub mod types;
