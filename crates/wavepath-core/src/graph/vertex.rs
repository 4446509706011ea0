//! Working vertex state

use crate::graph::edge::EdgeSlot;
use crate::graph::types::{PathWeight, VertexKey, Weight};

/// Position of a working vertex inside a simulation arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct VertexSlot(pub(crate) usize);

/// Traversal record of a reached vertex
///
/// `hops` lists the vertices from the source up to but excluding the
/// vertex that owns the trail; `weight` is the sum of the nominal weights
/// of the edges taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trail {
    hops: Vec<VertexKey>,
    weight: PathWeight,
}

impl Trail {
    /// Trail of the source vertex
    pub fn root() -> Self {
        Self::default()
    }

    pub fn hops(&self) -> &[VertexKey] {
        &self.hops
    }

    pub fn weight(&self) -> PathWeight {
        self.weight
    }

    pub fn contains(&self, key: VertexKey) -> bool {
        self.hops.contains(&key)
    }

    /// Trail of a vertex entered from `via` over an edge of `weight`
    pub fn extend(&self, via: VertexKey, weight: Weight) -> Self {
        let mut hops = Vec::with_capacity(self.hops.len() + 1);
        hops.extend_from_slice(&self.hops);
        hops.push(via);
        Trail {
            hops,
            weight: self.weight + PathWeight::from(weight),
        }
    }
}

/// Mutable per-query copy of a vertex
#[derive(Debug, Clone)]
pub(crate) struct WorkingVertex {
    key: VertexKey,
    live: Vec<EdgeSlot>,
    trail: Option<Trail>,
}

impl WorkingVertex {
    pub(crate) fn new(key: VertexKey) -> Self {
        WorkingVertex {
            key,
            live: Vec::new(),
            trail: None,
        }
    }

    pub(crate) fn key(&self) -> VertexKey {
        self.key
    }

    pub(crate) fn live_edges(&self) -> &[EdgeSlot] {
        &self.live
    }

    pub(crate) fn has_live_edges(&self) -> bool {
        !self.live.is_empty()
    }

    pub(crate) fn attach(&mut self, edge: EdgeSlot) {
        self.live.push(edge);
    }

    /// Remove a spent edge, preserving the order of the others
    pub(crate) fn detach(&mut self, edge: EdgeSlot) {
        self.live.retain(|e| *e != edge);
    }

    pub(crate) fn trail(&self) -> Option<&Trail> {
        self.trail.as_ref()
    }

    pub(crate) fn is_reached(&self) -> bool {
        self.trail.is_some()
    }

    pub(crate) fn enter(&mut self, trail: Trail) {
        debug_assert!(self.trail.is_none(), "vertex entered twice");
        self.trail = Some(trail);
    }
}
