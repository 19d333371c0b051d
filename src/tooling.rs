//! Tooling & Integration Layer
//!
//! Command-line entry points over the listing transforms.

pub mod cli;

pub use cli::{Cli, CliContext, Commands, ConfigCommands};
