//! Command-line interface
//!
//! Thin wrapper over the pipeline: parse arguments, load the config from
//! the environment, run the requested command, print the result.

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
