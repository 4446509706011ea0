//! Command implementations for all wavepath commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use wavepath_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::PathArgs;
    use crate::commands::dispatch::macros::trace_command;
    use crate::commands::{check, edges, path};
    use wavepath_core::graph::SearchMode;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Shortest(args) => execute_path(ctx, SearchMode::Shortest, args),
            Commands::Longest(args) => execute_path(ctx, SearchMode::Longest, args),
            Commands::Edges => execute_edges(ctx),
            Commands::Check => execute_check(ctx),
        }
    }

    fn execute_path(ctx: &CommandContext, mode: SearchMode, args: &PathArgs) -> Result<()> {
        let topology = ctx.load_topology()?;
        path::execute(ctx.cli, &topology, mode, args)?;
        trace_command!(ctx.start, "execute_command");
        Ok(())
    }

    fn execute_edges(ctx: &CommandContext) -> Result<()> {
        let topology = ctx.load_topology()?;
        edges::execute(ctx.cli, &topology)?;
        trace_command!(ctx.start, "execute_command");
        Ok(())
    }

    fn execute_check(ctx: &CommandContext) -> Result<()> {
        let config = crate::commands::dispatch::command::load_config(ctx.cli)?;
        check::execute(ctx.cli, &config)?;
        trace_command!(ctx.start, "execute_command");
        Ok(())
    }
}
