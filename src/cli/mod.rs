//! Command line interface
//!
//! Argument parsing and the dispatch of each subcommand against a freshly
//! generated world.

pub mod args;
mod commands;

pub use args::{Args, Command};
pub use commands::{run, CliError};
