//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use wavepath_core::config::TopologyConfig;
use wavepath_core::error::Result;
use wavepath_core::graph::Topology;

use super::macros::trace_command;

/// Read the edge list named by `--config`/`WAVEPATH_CONFIG`, or fall back to
/// the built-in demonstration network
pub fn load_config(cli: &Cli) -> Result<TopologyConfig> {
    match &cli.config {
        Some(path) => TopologyConfig::load(path),
        None => {
            tracing::debug!("using built-in topology");
            Ok(TopologyConfig::default())
        }
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn load_topology(&self) -> Result<Topology> {
        let config = load_config(self.cli)?;
        let topology = Topology::from_config(&config)?;
        trace_command!(self.start, "load_topology");
        Ok(topology)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("wavepath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest and longest paths by wavefront simulation.");
        println!();
        println!("Run `wavepath --help` for usage information.");
        Ok(())
    }
}
