use serde::Serialize;

/// Nominal weight of an edge: the number of ticks needed to cross it
pub type Weight = u32;

/// Cumulative weight along a trace
pub type PathWeight = u64;

/// Position of a vertex template inside its topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey(pub(crate) usize);

/// Position of an edge template inside its topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(pub(crate) usize);

/// Which query the propagation engine is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// First arrival wins; later arrivals dead-end
    Shortest,
    /// Every rediscovery forks an independent branch
    Longest,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Shortest => write!(f, "shortest"),
            SearchMode::Longest => write!(f, "longest"),
        }
    }
}

/// Outcome of a path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub mode: SearchMode,
    pub from: String,
    pub to: String,
    /// False when the destination is unreachable
    pub found: bool,
    /// Vertex ids from `from` to `to`, empty when not found
    pub vertices: Vec<String>,
    /// Sum of nominal weights along `vertices`
    pub weight: PathWeight,
    /// Simulation steps executed
    pub ticks: u64,
    /// Clone-on-revisit forks created (always 0 for shortest)
    pub branches: usize,
}

impl PathResult {
    /// Render the path as `A -> B -> C`
    pub fn path_display(&self) -> String {
        self.vertices.join(" -> ")
    }

    /// Number of edges along the path
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}
