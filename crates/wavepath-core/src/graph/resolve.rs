//! Query endpoints: anything resolvable to a vertex of a topology

use std::fmt;

use crate::error::{Result, WavepathError};
use crate::graph::types::VertexKey;
use crate::graph::Topology;

/// How a query endpoint names its vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    /// A raw vertex id
    Id,
    /// A [`VertexRef`] handed out by a topology
    Vertex,
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointKind::Id => write!(f, "id"),
            EndpointKind::Vertex => write!(f, "vertex"),
        }
    }
}

/// Handle to a vertex of one specific topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexRef {
    pub(crate) topology: u64,
    pub(crate) key: VertexKey,
}

impl VertexRef {
    pub fn key(&self) -> VertexKey {
        self.key
    }
}

/// Capability shared by every query endpoint
pub trait ResolveVertex {
    fn kind(&self) -> EndpointKind;

    /// Look the vertex up; queries never create vertices
    fn resolve(&self, topology: &Topology) -> Result<VertexKey>;
}

impl ResolveVertex for str {
    fn kind(&self) -> EndpointKind {
        EndpointKind::Id
    }

    fn resolve(&self, topology: &Topology) -> Result<VertexKey> {
        topology
            .key_of(self)
            .ok_or_else(|| WavepathError::vertex_not_found(self))
    }
}

impl ResolveVertex for String {
    fn kind(&self) -> EndpointKind {
        EndpointKind::Id
    }

    fn resolve(&self, topology: &Topology) -> Result<VertexKey> {
        self.as_str().resolve(topology)
    }
}

impl ResolveVertex for VertexRef {
    fn kind(&self) -> EndpointKind {
        EndpointKind::Vertex
    }

    fn resolve(&self, topology: &Topology) -> Result<VertexKey> {
        if self.topology != topology.instance_id() {
            return Err(WavepathError::ForeignVertex {
                id: format!("#{}", self.key.0),
            });
        }
        Ok(self.key)
    }
}

impl<T: ResolveVertex + ?Sized> ResolveVertex for &T {
    fn kind(&self) -> EndpointKind {
        (**self).kind()
    }

    fn resolve(&self, topology: &Topology) -> Result<VertexKey> {
        (**self).resolve(topology)
    }
}

/// An endpoint whose kind is only known at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Id(String),
    Vertex(VertexRef),
}

impl ResolveVertex for Endpoint {
    fn kind(&self) -> EndpointKind {
        match self {
            Endpoint::Id(_) => EndpointKind::Id,
            Endpoint::Vertex(_) => EndpointKind::Vertex,
        }
    }

    fn resolve(&self, topology: &Topology) -> Result<VertexKey> {
        match self {
            Endpoint::Id(id) => id.resolve(topology),
            Endpoint::Vertex(vertex) => vertex.resolve(topology),
        }
    }
}

impl From<&str> for Endpoint {
    fn from(id: &str) -> Self {
        Endpoint::Id(id.to_string())
    }
}

impl From<String> for Endpoint {
    fn from(id: String) -> Self {
        Endpoint::Id(id)
    }
}

impl From<VertexRef> for Endpoint {
    fn from(vertex: VertexRef) -> Self {
        Endpoint::Vertex(vertex)
    }
}

/// Resolve both query endpoints, rejecting mixed kinds before any lookup
pub(crate) fn resolve_pair<E: ResolveVertex>(
    topology: &Topology,
    from: &E,
    to: &E,
) -> Result<(VertexKey, VertexKey)> {
    if from.kind() != to.kind() {
        return Err(WavepathError::TypeMismatch {
            from: from.kind(),
            to: to.kind(),
        });
    }
    Ok((from.resolve(topology)?, to.resolve(topology)?))
}
