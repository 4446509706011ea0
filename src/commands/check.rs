//! `wavepath check` - validate the topology configuration

use crate::cli::Cli;
use crate::output_by_format_result;
use wavepath_core::config::TopologyConfig;
use wavepath_core::error::{Result, WavepathError};
use wavepath_core::graph::Topology;
use wavepath_core::records::RECORDS_VERSION;

/// Execute the check command
///
/// Validation failures surface as errors from the build, so reaching the
/// output means the configuration is usable.
pub fn execute(cli: &Cli, config: &TopologyConfig) -> Result<()> {
    let topology = Topology::from_config(config)?;
    let source = cli
        .config
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());

    output_by_format_result!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::json!({
                    "ok": true,
                    "config": source,
                    "vertices": topology.vertex_count(),
                    "edges": topology.edge_count(),
                })
            );
            Ok::<(), WavepathError>(())
        },
        human => {
            if !cli.quiet {
                println!(
                    "ok: {} ({} vertices, {} edges)",
                    source,
                    topology.vertex_count(),
                    topology.edge_count()
                );
            }
        },
        records => {
            println!(
                "H wavepath={} mode=check ok=true vertices={} edges={}",
                RECORDS_VERSION,
                topology.vertex_count(),
                topology.edge_count()
            );
        }
    )
}
