//! `wavepath shortest` / `wavepath longest` - path queries between two vertices

use crate::cli::{Cli, PathArgs};
use crate::output_by_format_result;
use wavepath_core::bail_usage;
use wavepath_core::error::{Result, WavepathError};
use wavepath_core::graph::{PathResult, SearchMode, Topology};
use wavepath_core::records::path_records;

/// Execute a path query and print the result
pub fn execute(cli: &Cli, topology: &Topology, mode: SearchMode, args: &PathArgs) -> Result<()> {
    if args.from.is_empty() || args.to.is_empty() {
        bail_usage!("vertex ids must not be empty");
    }

    let result = topology.path(mode, args.from.as_str(), args.to.as_str())?;

    tracing::debug!(
        mode = %mode,
        found = result.found,
        weight = result.weight,
        ticks = result.ticks,
        branches = result.branches,
        "path_query"
    );

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok::<(), WavepathError>(())
        },
        human => {
            output_human(cli, &result);
        },
        records => {
            for line in path_records(&result) {
                println!("{}", line);
            }
        }
    )?;

    if args.strict && !result.found {
        return Err(WavepathError::NoPath {
            from: result.from,
            to: result.to,
        });
    }

    Ok(())
}

fn output_human(cli: &Cli, result: &PathResult) {
    if result.found {
        println!("{} (weight {})", result.path_display(), result.weight);
        if !cli.quiet && cli.verbose {
            eprintln!(
                "{} hops, {} ticks, {} branches",
                result.hops(),
                result.ticks,
                result.branches
            );
        }
    } else {
        println!("no path from {} to {}", result.from, result.to);
    }
}
