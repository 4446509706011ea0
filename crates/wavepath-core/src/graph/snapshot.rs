//! Immutable templates and the working copies derived from them
//!
//! A [`Topology`] only ever holds templates. Every query materialises its own
//! [`Arena`] of working vertices and edges, so countdowns, pruned live sets
//! and traces never outlive the query that produced them.

use crate::graph::edge::{EdgeSlot, WorkingEdge};
use crate::graph::types::{EdgeKey, VertexKey, Weight};
use crate::graph::vertex::{VertexSlot, WorkingVertex};
use crate::graph::Topology;

/// Adjacency of a vertex as captured at build time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexTemplate {
    id: String,
    edges: Vec<EdgeKey>,
}

impl VertexTemplate {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        VertexTemplate {
            id: id.into(),
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Incident edges in registration order
    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn register(&mut self, edge: EdgeKey) {
        self.edges.push(edge);
    }

    /// A fresh working vertex with no trail and no live edges yet
    pub(crate) fn instantiate(&self, key: VertexKey) -> WorkingVertex {
        WorkingVertex::new(key)
    }
}

/// An undirected weighted edge as captured at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeTemplate {
    endpoints: [VertexKey; 2],
    weight: Weight,
}

impl EdgeTemplate {
    pub(crate) fn new(a: VertexKey, b: VertexKey, weight: Weight) -> Self {
        EdgeTemplate {
            endpoints: [a, b],
            weight,
        }
    }

    pub fn endpoints(&self) -> [VertexKey; 2] {
        self.endpoints
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The endpoint opposite `from`
    pub fn far_end(&self, from: VertexKey) -> VertexKey {
        if self.endpoints[0] == from {
            self.endpoints[1]
        } else {
            self.endpoints[0]
        }
    }

    /// A fresh working edge with a full countdown
    pub(crate) fn instantiate(&self, key: EdgeKey, holders: Vec<VertexSlot>) -> WorkingEdge {
        WorkingEdge::new(key, self.weight, holders)
    }
}

/// Per-query storage for working vertices and edges.
///
/// Slot `i` for `i < vertex_count` is the primary working copy of
/// `VertexKey(i)`; forks are appended after them.
#[derive(Debug)]
pub(crate) struct Arena {
    vertices: Vec<WorkingVertex>,
    edges: Vec<WorkingEdge>,
    primaries: usize,
}

impl Arena {
    /// One working copy per template, with every edge shared by both endpoints
    pub(crate) fn pristine(topology: &Topology) -> Self {
        let mut vertices: Vec<WorkingVertex> = topology
            .vertex_templates()
            .iter()
            .enumerate()
            .map(|(i, template)| template.instantiate(VertexKey(i)))
            .collect();

        let edges: Vec<WorkingEdge> = topology
            .edge_templates()
            .iter()
            .enumerate()
            .map(|(i, template)| {
                let holders = template.endpoints().map(|k| VertexSlot(k.0)).to_vec();
                template.instantiate(EdgeKey(i), holders)
            })
            .collect();

        for (i, template) in topology.vertex_templates().iter().enumerate() {
            for edge in template.edges() {
                vertices[i].attach(EdgeSlot(edge.0));
            }
        }

        Arena {
            primaries: vertices.len(),
            vertices,
            edges,
        }
    }

    /// Working copy of `key` that first arrivals enter
    pub(crate) fn primary(&self, key: VertexKey) -> VertexSlot {
        debug_assert!(key.0 < self.primaries);
        VertexSlot(key.0)
    }

    /// Fork an independent working copy of `key`.
    ///
    /// The fork owns a fresh instance of every template edge except
    /// `arrived_by`, which the branch has just spent.
    pub(crate) fn fork(
        &mut self,
        topology: &Topology,
        key: VertexKey,
        arrived_by: EdgeKey,
    ) -> VertexSlot {
        let slot = VertexSlot(self.vertices.len());
        let template = topology.vertex_template(key);
        let mut vertex = template.instantiate(key);

        for &edge_key in template.edges() {
            if edge_key == arrived_by {
                continue;
            }
            let edge_slot = EdgeSlot(self.edges.len());
            self.edges
                .push(topology.edge_template(edge_key).instantiate(edge_key, vec![slot]));
            vertex.attach(edge_slot);
        }

        self.vertices.push(vertex);
        slot
    }

    /// Drop a crossed edge from the live set of every holder
    pub(crate) fn retire(&mut self, edge: EdgeSlot) {
        let holders = self.edges[edge.0].holders().to_vec();
        for holder in holders {
            self.vertices[holder.0].detach(edge);
        }
    }

    pub(crate) fn vertex(&self, slot: VertexSlot) -> &WorkingVertex {
        &self.vertices[slot.0]
    }

    pub(crate) fn vertex_mut(&mut self, slot: VertexSlot) -> &mut WorkingVertex {
        &mut self.vertices[slot.0]
    }

    pub(crate) fn edge(&self, slot: EdgeSlot) -> &WorkingEdge {
        &self.edges[slot.0]
    }

    pub(crate) fn edge_mut(&mut self, slot: EdgeSlot) -> &mut WorkingEdge {
        &mut self.edges[slot.0]
    }

    pub(crate) fn fork_count(&self) -> usize {
        self.vertices.len() - self.primaries
    }
}
