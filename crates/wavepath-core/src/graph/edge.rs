//! Working edge state and the crossing rule

use crate::graph::types::{EdgeKey, SearchMode, Weight};
use crate::graph::vertex::{Trail, VertexSlot, WorkingVertex};

/// Position of a working edge inside a simulation arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EdgeSlot(pub(crate) usize);

/// Mutable per-query copy of an edge
///
/// `holders` are the working vertices whose live set contains this edge:
/// both endpoints for an edge instantiated with the topology, only the
/// forked vertex for an edge instantiated by a fork.
#[derive(Debug, Clone)]
pub(crate) struct WorkingEdge {
    key: EdgeKey,
    remaining: Weight,
    crossed: bool,
    holders: Vec<VertexSlot>,
}

impl WorkingEdge {
    pub(crate) fn new(key: EdgeKey, weight: Weight, holders: Vec<VertexSlot>) -> Self {
        WorkingEdge {
            key,
            remaining: weight,
            crossed: false,
            holders,
        }
    }

    pub(crate) fn key(&self) -> EdgeKey {
        self.key
    }

    #[cfg(test)]
    pub(crate) fn remaining(&self) -> Weight {
        self.remaining
    }

    pub(crate) fn is_crossed(&self) -> bool {
        self.crossed
    }

    pub(crate) fn holders(&self) -> &[VertexSlot] {
        &self.holders
    }

    /// Spend one tick of countdown; returns true when the edge is crossed
    pub(crate) fn tick(&mut self) -> bool {
        debug_assert!(!self.is_crossed(), "ticked a crossed edge");
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.crossed = true;
        }
        self.crossed
    }
}

/// What happens when a branch reaches the far end of a crossed edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Crossing {
    /// Dead end: cycle, or the target was already reached in shortest mode
    Reject,
    /// Enter the target's working vertex with this trail
    Enter(Trail),
    /// Enter a fresh fork of the target with this trail
    Fork(Trail),
}

/// Decide how `origin` crosses an edge of `weight` into `target`.
pub(crate) fn crossing(
    origin: &WorkingVertex,
    target: &WorkingVertex,
    weight: Weight,
    mode: SearchMode,
) -> Crossing {
    let Some(trail) = origin.trail() else {
        return Crossing::Reject;
    };
    // keeps every trace simple
    if target.key() == origin.key() || trail.contains(target.key()) {
        return Crossing::Reject;
    }

    let next = trail.extend(origin.key(), weight);
    match (target.is_reached(), mode) {
        (false, _) => Crossing::Enter(next),
        (true, SearchMode::Shortest) => Crossing::Reject,
        (true, SearchMode::Longest) => Crossing::Fork(next),
    }
}
