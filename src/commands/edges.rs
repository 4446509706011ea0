//! `wavepath edges` - list the configured network

use serde::Serialize;

use crate::cli::Cli;
use crate::output_by_format_result;
use wavepath_core::error::{Result, WavepathError};
use wavepath_core::graph::{Topology, Weight};
use wavepath_core::records::{escape_quotes, RECORDS_VERSION};

#[derive(Debug, Serialize)]
struct EdgeOutput<'a> {
    a: &'a str,
    weight: Weight,
    b: &'a str,
}

#[derive(Debug, Serialize)]
struct VertexOutput<'a> {
    id: &'a str,
    degree: usize,
}

#[derive(Debug, Serialize)]
struct EdgesOutput<'a> {
    edges: Vec<EdgeOutput<'a>>,
    vertices: Vec<VertexOutput<'a>>,
}

fn collect(topology: &Topology) -> EdgesOutput<'_> {
    let edges = topology
        .edges()
        .map(|(a, weight, b)| EdgeOutput { a, weight, b })
        .collect();
    let vertices = topology
        .vertex_ids()
        .map(|id| VertexOutput {
            id,
            degree: topology.degree(id).unwrap_or(0),
        })
        .collect();
    EdgesOutput { edges, vertices }
}

/// Execute the edges command
pub fn execute(cli: &Cli, topology: &Topology) -> Result<()> {
    let output = collect(topology);

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), WavepathError>(())
        },
        human => {
            for edge in &output.edges {
                println!("{} -{}- {}", edge.a, edge.weight, edge.b);
            }
            if !cli.quiet {
                println!();
                println!(
                    "{} vertices, {} edges",
                    output.vertices.len(),
                    output.edges.len()
                );
            }
        },
        records => {
            println!(
                "H wavepath={} mode=edges vertices={} edges={}",
                RECORDS_VERSION,
                output.vertices.len(),
                output.edges.len()
            );
            for vertex in &output.vertices {
                println!("V \"{}\" degree={}", escape_quotes(vertex.id), vertex.degree);
            }
            for edge in &output.edges {
                println!(
                    "E \"{}\" {} \"{}\"",
                    escape_quotes(edge.a),
                    edge.weight,
                    escape_quotes(edge.b)
                );
            }
        }
    )
}
