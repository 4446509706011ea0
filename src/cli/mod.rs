//! CLI argument parsing for wavepath
//!
//! Uses clap for argument parsing.
//! Supports global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod format;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::PathArgs;
pub use output::OutputFormat;

/// Wavepath - shortest and longest paths by wavefront simulation
#[derive(Parser, Debug)]
#[command(name = "wavepath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Topology file (TOML edge list); the built-in demo network when absent
    #[arg(long, global = true, env = "WAVEPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `wavepath_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the lightest path between two vertices
    Shortest(PathArgs),

    /// Find the heaviest simple path the branch search discovers
    Longest(PathArgs),

    /// List the configured edges and vertices
    Edges,

    /// Validate the topology configuration
    Check,
}
