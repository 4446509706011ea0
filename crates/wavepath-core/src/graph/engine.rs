//! Wavefront propagation engine
//!
//! Both queries run the same tick loop: every active vertex spends one tick
//! of countdown on each of its live edges, and an edge whose countdown hits
//! zero carries the branch to its far endpoint. The modes differ only in
//! what happens on a second arrival (dead end vs. fork) and in when the loop
//! stops.
//!
//! Ordering: active vertices are processed in insertion order, live edges in
//! registration order, and each tick's results keep their first occurrence.
//! Longest-path ties therefore go to the route found first under that order.
//!
//! Forks: a clone created on rediscovery receives fresh copies of every
//! template edge except the one it arrived by. Crossing back over that edge
//! would always be rejected as a cycle, so paths are unaffected, but the
//! clone never spends ticks counting it down. A longest query can therefore
//! finish in fewer `ticks` than a model that clones the full edge set.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, trace};

use crate::graph::edge::{crossing, Crossing, EdgeSlot};
use crate::graph::snapshot::Arena;
use crate::graph::types::{PathResult, SearchMode, VertexKey};
use crate::graph::vertex::{Trail, VertexSlot};
use crate::graph::Topology;
use crate::trace_time;

/// Insertion-ordered, identity-deduplicated set of active vertices
#[derive(Debug, Default)]
struct Frontier {
    order: Vec<VertexSlot>,
    seen: HashSet<VertexSlot>,
}

impl Frontier {
    fn push(&mut self, slot: VertexSlot) {
        if self.seen.insert(slot) {
            self.order.push(slot);
        }
    }

    fn into_vec(self) -> Vec<VertexSlot> {
        self.order
    }
}

/// Transient state of one query against a topology
pub(crate) struct Simulation<'t> {
    topology: &'t Topology,
    mode: SearchMode,
    arena: Arena,
    ticks: u64,
}

impl<'t> Simulation<'t> {
    pub(crate) fn new(topology: &'t Topology, mode: SearchMode) -> Self {
        Simulation {
            topology,
            mode,
            arena: Arena::pristine(topology),
            ticks: 0,
        }
    }

    /// Run the query to completion
    pub(crate) fn run(self, source: VertexKey, destination: VertexKey) -> PathResult {
        let start = Instant::now();
        let result = if source == destination {
            self.trivial(source)
        } else {
            match self.mode {
                SearchMode::Shortest => self.run_shortest(source, destination),
                SearchMode::Longest => self.run_longest(source, destination),
            }
        };
        trace_time!(
            start,
            "query_time",
            ticks = result.ticks,
            branches = result.branches
        );
        result
    }

    fn trivial(self, key: VertexKey) -> PathResult {
        let id = self.topology.id_of(key).to_string();
        PathResult {
            mode: self.mode,
            from: id.clone(),
            to: id.clone(),
            found: true,
            vertices: vec![id],
            weight: 0,
            ticks: 0,
            branches: 0,
        }
    }

    fn seed(&mut self, source: VertexKey) -> VertexSlot {
        let slot = self.arena.primary(source);
        self.arena.vertex_mut(slot).enter(Trail::root());
        slot
    }

    fn run_shortest(mut self, source: VertexKey, destination: VertexKey) -> PathResult {
        let mut active = vec![self.seed(source)];

        loop {
            if let Some(&slot) = active
                .iter()
                .find(|slot| self.arena.vertex(**slot).key() == destination)
            {
                let trail = self.arena.vertex(slot).trail().cloned();
                return self.finish(source, destination, trail);
            }
            if active.is_empty() {
                return self.finish(source, destination, None);
            }

            self.ticks += 1;
            let mut next = Frontier::default();
            for slot in active {
                for reached in self.propagate(slot) {
                    next.push(reached);
                }
            }
            active = next.into_vec();
            trace!(tick = self.ticks, active = active.len(), "tick");
        }
    }

    fn run_longest(mut self, source: VertexKey, destination: VertexKey) -> PathResult {
        let mut active = vec![self.seed(source)];
        let mut best: Option<Trail> = None;

        while !active.is_empty() {
            self.ticks += 1;
            let mut next = Frontier::default();
            for slot in active {
                for reached in self.propagate(slot) {
                    let vertex = self.arena.vertex(reached);
                    if vertex.key() != destination {
                        next.push(reached);
                        continue;
                    }
                    // an arrival at the destination stops propagating
                    if let Some(trail) = vertex.trail() {
                        if best
                            .as_ref()
                            .is_none_or(|current| trail.weight() > current.weight())
                        {
                            best = Some(trail.clone());
                        }
                    }
                }
            }
            active = next.into_vec();
            trace!(
                tick = self.ticks,
                active = active.len(),
                forks = self.arena.fork_count(),
                best = best.as_ref().map(Trail::weight),
                "tick"
            );
        }

        self.finish(source, destination, best)
    }

    /// One vertex's share of a tick.
    ///
    /// Returns every vertex entered through a crossed edge, followed by the
    /// vertex itself while it still has live edges.
    fn propagate(&mut self, slot: VertexSlot) -> Vec<VertexSlot> {
        let mut reached = Vec::new();
        let live = self.arena.vertex(slot).live_edges().to_vec();

        for edge in live {
            if !self.arena.edge_mut(edge).tick() {
                continue;
            }
            self.arena.retire(edge);
            if let Some(target) = self.cross(edge, slot) {
                reached.push(target);
            }
        }

        if self.arena.vertex(slot).has_live_edges() {
            reached.push(slot);
        }
        reached
    }

    /// Carry the branch at `origin` over a crossed edge
    fn cross(&mut self, edge: EdgeSlot, origin: VertexSlot) -> Option<VertexSlot> {
        let topology = self.topology;
        let edge_key = self.arena.edge(edge).key();
        let template = topology.edge_template(edge_key);
        let origin_vertex = self.arena.vertex(origin);
        let far = template.far_end(origin_vertex.key());
        let primary = self.arena.primary(far);

        let decision = crossing(
            origin_vertex,
            self.arena.vertex(primary),
            template.weight(),
            self.mode,
        );
        match decision {
            Crossing::Reject => None,
            Crossing::Enter(trail) => {
                self.arena.vertex_mut(primary).enter(trail);
                Some(primary)
            }
            Crossing::Fork(trail) => {
                let fork = self.arena.fork(topology, far, edge_key);
                self.arena.vertex_mut(fork).enter(trail);
                Some(fork)
            }
        }
    }

    fn finish(
        self,
        source: VertexKey,
        destination: VertexKey,
        trail: Option<Trail>,
    ) -> PathResult {
        let from = self.topology.id_of(source).to_string();
        let to = self.topology.id_of(destination).to_string();
        let branches = self.arena.fork_count();

        let result = match trail {
            Some(trail) => {
                let mut vertices: Vec<String> = trail
                    .hops()
                    .iter()
                    .map(|key| self.topology.id_of(*key).to_string())
                    .collect();
                vertices.push(to.clone());
                PathResult {
                    mode: self.mode,
                    from,
                    to,
                    found: true,
                    vertices,
                    weight: trail.weight(),
                    ticks: self.ticks,
                    branches,
                }
            }
            None => PathResult {
                mode: self.mode,
                from,
                to,
                found: false,
                vertices: Vec::new(),
                weight: 0,
                ticks: self.ticks,
                branches,
            },
        };

        debug!(
            mode = %result.mode,
            from = %result.from,
            to = %result.to,
            found = result.found,
            weight = result.weight,
            ticks = result.ticks,
            branches = result.branches,
            "simulation_finished"
        );
        result
    }
}

#[cfg(test)]
mod tests;
