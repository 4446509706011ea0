use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use tracing::debug;

use crate::{bail_invalid_edge, trace_time};
use crate::config::{EdgeSpec, TopologyConfig};
use crate::error::{Result, WavepathError};
use crate::graph::engine::Simulation;
use crate::graph::resolve::{resolve_pair, ResolveVertex, VertexRef};
use crate::graph::snapshot::{EdgeTemplate, VertexTemplate};
use crate::graph::types::{EdgeKey, PathResult, SearchMode, VertexKey, Weight};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// A weighted undirected graph built once from an edge list.
///
/// The topology only stores immutable templates; queries borrow it shared
/// and run against their own working copies, so any number of queries can
/// be issued one after another with identical results.
#[derive(Debug)]
pub struct Topology {
    instance: u64,
    vertices: Vec<VertexTemplate>,
    edges: Vec<EdgeTemplate>,
    index: HashMap<String, VertexKey>,
}

impl Topology {
    /// Build a topology from configuration triples, failing fast on the first
    /// malformed one.
    pub fn build<'a, I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a EdgeSpec>,
    {
        let start = Instant::now();
        let mut topology = Topology {
            instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
            vertices: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
        };
        let mut pairs: HashSet<(VertexKey, VertexKey)> = HashSet::new();

        for (index, spec) in edges.into_iter().enumerate() {
            let weight = validate_edge(index, spec)?;
            let a = topology.resolve_or_insert(spec.a());
            let b = topology.resolve_or_insert(spec.b());

            if !pairs.insert((a.min(b), a.max(b))) {
                return Err(WavepathError::DuplicateEdge {
                    index,
                    a: spec.a().to_string(),
                    b: spec.b().to_string(),
                });
            }

            let key = EdgeKey(topology.edges.len());
            topology.edges.push(EdgeTemplate::new(a, b, weight));
            topology.vertices[a.0].register(key);
            topology.vertices[b.0].register(key);
        }

        if topology.edges.is_empty() {
            return Err(WavepathError::EmptyTopology);
        }

        debug!(
            vertices = topology.vertices.len(),
            edges = topology.edges.len(),
            "build_topology"
        );
        trace_time!(
            start,
            "build_time",
            vertices = topology.vertices.len(),
            edges = topology.edges.len()
        );
        Ok(topology)
    }

    pub fn from_config(config: &TopologyConfig) -> Result<Self> {
        Self::build(&config.edges)
    }

    /// Look up a vertex by id, creating it on first reference
    fn resolve_or_insert(&mut self, id: &str) -> VertexKey {
        if let Some(key) = self.index.get(id) {
            return *key;
        }
        let key = VertexKey(self.vertices.len());
        self.vertices.push(VertexTemplate::new(id));
        self.index.insert(id.to_string(), key);
        key
    }

    /// Find the shortest path between two endpoints of the same kind.
    ///
    /// Returns a result with `found == false` when the destination cannot be
    /// reached.
    #[tracing::instrument(skip(self, from, to), fields(from_kind = %from.kind(), to_kind = %to.kind()))]
    pub fn shortest_path<E: ResolveVertex>(&self, from: E, to: E) -> Result<PathResult> {
        self.query(SearchMode::Shortest, &from, &to)
    }

    /// Find the heaviest simple path the branch search discovers between two
    /// endpoints of the same kind.
    ///
    /// Exponential in the branching factor; meant for small topologies.
    #[tracing::instrument(skip(self, from, to), fields(from_kind = %from.kind(), to_kind = %to.kind()))]
    pub fn longest_path<E: ResolveVertex>(&self, from: E, to: E) -> Result<PathResult> {
        self.query(SearchMode::Longest, &from, &to)
    }

    /// Run either query by mode
    pub fn path<E: ResolveVertex>(&self, mode: SearchMode, from: E, to: E) -> Result<PathResult> {
        self.query(mode, &from, &to)
    }

    fn query<E: ResolveVertex>(&self, mode: SearchMode, from: &E, to: &E) -> Result<PathResult> {
        let (source, destination) = resolve_pair(self, from, to)?;
        debug!(
            mode = %mode,
            from = self.id_of(source),
            to = self.id_of(destination),
            "query"
        );
        Ok(Simulation::new(self, mode).run(source, destination))
    }

    /// Handle to the vertex named `id`
    pub fn vertex(&self, id: &str) -> Option<VertexRef> {
        self.key_of(id).map(|key| VertexRef {
            topology: self.instance,
            key,
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertex ids in order of first reference
    pub fn vertex_ids(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(VertexTemplate::id)
    }

    /// Edges as `(a, weight, b)` in configuration order
    pub fn edges(&self) -> impl Iterator<Item = (&str, Weight, &str)> {
        self.edges.iter().map(|edge| {
            let [a, b] = edge.endpoints();
            (self.id_of(a), edge.weight(), self.id_of(b))
        })
    }

    /// Number of edges incident to `id`
    pub fn degree(&self, id: &str) -> Option<usize> {
        self.key_of(id).map(|key| self.vertices[key.0].degree())
    }

    pub(crate) fn instance_id(&self) -> u64 {
        self.instance
    }

    pub(crate) fn key_of(&self, id: &str) -> Option<VertexKey> {
        self.index.get(id).copied()
    }

    pub(crate) fn id_of(&self, key: VertexKey) -> &str {
        self.vertices[key.0].id()
    }

    pub(crate) fn vertex_templates(&self) -> &[VertexTemplate] {
        &self.vertices
    }

    pub(crate) fn edge_templates(&self) -> &[EdgeTemplate] {
        &self.edges
    }

    pub(crate) fn vertex_template(&self, key: VertexKey) -> &VertexTemplate {
        &self.vertices[key.0]
    }

    pub(crate) fn edge_template(&self, key: EdgeKey) -> &EdgeTemplate {
        &self.edges[key.0]
    }
}

/// Check one configuration triple and return its weight
fn validate_edge(index: usize, spec: &EdgeSpec) -> Result<Weight> {
    if spec.a().trim().is_empty() || spec.b().trim().is_empty() {
        bail_invalid_edge!(index, "endpoint id must not be empty");
    }
    if spec.a() == spec.b() {
        bail_invalid_edge!(index, format!("{} is connected to itself", spec.a()));
    }
    if spec.weight() <= 0 {
        bail_invalid_edge!(
            index,
            format!("weight must be positive, got {}", spec.weight())
        );
    }
    Weight::try_from(spec.weight()).map_err(|_| {
        WavepathError::invalid_edge(index, format!("weight {} is too large", spec.weight()))
    })
}
