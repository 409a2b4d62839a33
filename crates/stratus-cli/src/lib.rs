//! Library surface of the `stratus` schema inspection tool

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

pub use cli::{run, Cli, Commands};
pub use output::OutputFormat;
