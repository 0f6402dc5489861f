//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Tableau lineage connector CLI
#[derive(Parser, Debug)]
#[command(name = "tableau-lineage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output (logs request/response bodies)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline and print the flattened lineage rows
    Run,

    /// Sign in only, to validate credentials and connectivity
    Check,

    /// Print the declared output schema without touching the network
    Schema,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one row object per line)
    Json,
    /// Human-readable aligned columns
    Pretty,
}
