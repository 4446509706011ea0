//! Wavefront path-finding over small weighted undirected graphs
//!
//! Provides:
//! - `Topology`: immutable vertex/edge templates built from an edge list
//! - Shortest path: first arrival of a discrete-time wavefront
//! - Longest path: clone-on-revisit branch search over simple paths
//! - `ResolveVertex`: query endpoints given as ids or vertex handles

mod edge;
mod engine;
pub mod resolve;
pub mod snapshot;
pub mod topology;
pub mod types;
mod vertex;

pub use resolve::{Endpoint, EndpointKind, ResolveVertex, VertexRef};
pub use snapshot::{EdgeTemplate, VertexTemplate};
pub use topology::Topology;
pub use types::{EdgeKey, PathResult, PathWeight, SearchMode, VertexKey, Weight};
pub use vertex::Trail;
