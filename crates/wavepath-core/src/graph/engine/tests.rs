use super::*;
use crate::config::{EdgeSpec, TopologyConfig};
use crate::error::WavepathError;
use crate::graph::{Endpoint, EndpointKind};

fn topology(edges: &[(&str, i64, &str)]) -> Topology {
    let specs: Vec<EdgeSpec> = edges.iter().map(|&e| EdgeSpec::from(e)).collect();
    Topology::build(&specs).unwrap()
}

fn demo() -> Topology {
    Topology::from_config(&TopologyConfig::default()).unwrap()
}

/// Test that the weight-3 detour beats the direct weight-4 edge
#[test]
fn test_shortest_prefers_lighter_detour() {
    let result = demo().shortest_path("A", "C").unwrap();

    assert!(result.found);
    assert_eq!(result.vertices, vec!["A", "B", "C"]);
    assert_eq!(result.weight, 3);
    assert_eq!(result.ticks, 3);
    assert_eq!(result.branches, 0);
}

#[test]
fn test_shortest_single_hop() {
    let result = demo().shortest_path("A", "B").unwrap();
    assert_eq!(result.vertices, vec!["A", "B"]);
    assert_eq!(result.weight, 1);
}

#[test]
fn test_same_endpoint_is_trivial_path() {
    let topology = demo();
    for result in [
        topology.shortest_path("B", "B").unwrap(),
        topology.longest_path("B", "B").unwrap(),
    ] {
        assert!(result.found);
        assert_eq!(result.vertices, vec!["B"]);
        assert_eq!(result.weight, 0);
        assert_eq!(result.ticks, 0);
    }
}

/// Test that an unreachable destination ends with "no path" instead of looping
#[test]
fn test_disconnected_pair_has_no_path() {
    let topology = topology(&[("A", 1, "B"), ("C", 1, "D")]);

    let shortest = topology.shortest_path("A", "D").unwrap();
    assert!(!shortest.found);
    assert!(shortest.vertices.is_empty());
    assert_eq!(shortest.weight, 0);

    let longest = topology.longest_path("A", "D").unwrap();
    assert!(!longest.found);
    assert!(longest.vertices.is_empty());
}

#[test]
fn test_longest_takes_cycle_over_direct_edge() {
    let topology = topology(&[("A", 2, "B"), ("B", 2, "C"), ("A", 1, "C")]);

    let longest = topology.longest_path("A", "C").unwrap();
    assert_eq!(longest.vertices, vec!["A", "B", "C"]);
    assert_eq!(longest.weight, 4);
    assert_eq!(longest.branches, 1);

    let shortest = topology.shortest_path("A", "C").unwrap();
    assert_eq!(shortest.vertices, vec!["A", "C"]);
    assert_eq!(shortest.weight, 1);
}

#[test]
fn test_longest_prefers_alternate_longer_route() {
    let topology = topology(&[
        ("A", 2, "B"),
        ("B", 2, "C"),
        ("A", 1, "C"),
        ("A", 3, "D"),
        ("D", 4, "C"),
    ]);

    let longest = topology.longest_path("A", "C").unwrap();
    assert_eq!(longest.vertices, vec!["A", "D", "C"]);
    assert_eq!(longest.weight, 7);
}

#[test]
fn test_diamond_shortest_and_longest_disagree() {
    let topology = topology(&[("A", 1, "B"), ("B", 1, "D"), ("A", 5, "C"), ("C", 5, "D")]);

    let shortest = topology.shortest_path("A", "D").unwrap();
    assert_eq!(shortest.vertices, vec!["A", "B", "D"]);
    assert_eq!(shortest.weight, 2);

    let longest = topology.longest_path("A", "D").unwrap();
    assert_eq!(longest.vertices, vec!["A", "C", "D"]);
    assert_eq!(longest.weight, 10);
}

/// Test that equal-weight routes resolve to the first one found
#[test]
fn test_longest_tie_keeps_first_found() {
    let topology = topology(&[("A", 1, "B"), ("B", 1, "D"), ("A", 1, "C"), ("C", 1, "D")]);

    let longest = topology.longest_path("A", "D").unwrap();
    assert_eq!(longest.vertices, vec!["A", "B", "D"]);
    assert_eq!(longest.weight, 2);
    assert_eq!(longest.branches, 1);
}

#[test]
fn test_shortest_tie_keeps_first_arrival() {
    let topology = topology(&[("A", 1, "B"), ("B", 1, "D"), ("A", 1, "C"), ("C", 1, "D")]);

    let shortest = topology.shortest_path("A", "D").unwrap();
    assert_eq!(shortest.vertices, vec!["A", "B", "D"]);
    assert_eq!(shortest.ticks, 2);
}

/// Test that a fork carries fresh copies of edges the primary is still spending
#[test]
fn test_fork_continues_with_fresh_edges() {
    let topology = topology(&[("A", 1, "B"), ("A", 1, "X"), ("B", 1, "X"), ("X", 5, "D")]);

    let longest = topology.longest_path("A", "D").unwrap();
    assert_eq!(longest.vertices, vec!["A", "B", "X", "D"]);
    assert_eq!(longest.weight, 7);
    assert_eq!(longest.branches, 2);
}

/// Test that an edge spent from both sides is lost to every branch
#[test]
fn test_longest_shared_edge_spent_from_both_sides() {
    let topology = topology(&[("A", 3, "B"), ("A", 1, "C"), ("B", 1, "C"), ("C", 1, "D")]);

    // A-B-C-D (weight 5) is a simple path, but A and B spend A-B from both
    // ends and the branch that finally crosses it is heading back to A.
    let longest = topology.longest_path("A", "D").unwrap();
    assert_eq!(longest.vertices, vec!["A", "C", "D"]);
    assert_eq!(longest.weight, 2);
}

#[test]
fn test_queries_do_not_disturb_each_other() {
    let topology = topology(&[("A", 2, "B"), ("B", 2, "C"), ("A", 1, "C")]);

    let first = topology.shortest_path("A", "C").unwrap();
    let longest = topology.longest_path("A", "C").unwrap();
    let second = topology.shortest_path("A", "C").unwrap();
    let longest_again = topology.longest_path("A", "C").unwrap();

    assert_eq!(first, second);
    assert_eq!(longest, longest_again);
}

#[test]
fn test_vertex_handles_match_ids() {
    let topology = demo();
    let a = topology.vertex("A").unwrap();
    let c = topology.vertex("C").unwrap();

    assert_eq!(
        topology.shortest_path(a, c).unwrap(),
        topology.shortest_path("A", "C").unwrap()
    );
    assert_eq!(
        topology.longest_path(&a, &c).unwrap(),
        topology.longest_path(String::from("A"), String::from("C")).unwrap()
    );
}

#[test]
fn test_mixed_endpoint_kinds_fail_without_side_effects() {
    let topology = demo();
    let c = topology.vertex("C").unwrap();

    let err = topology
        .shortest_path(Endpoint::from("A"), Endpoint::from(c))
        .unwrap_err();
    assert!(matches!(
        err,
        WavepathError::TypeMismatch {
            from: EndpointKind::Id,
            to: EndpointKind::Vertex
        }
    ));

    assert_eq!(topology.vertex_count(), 3);
    assert_eq!(topology.shortest_path("A", "C").unwrap().weight, 3);
}

#[test]
fn test_unknown_vertex_is_not_created() {
    let topology = demo();
    let err = topology.longest_path("A", "Z").unwrap_err();
    assert!(matches!(err, WavepathError::VertexNotFound { ref id } if id == "Z"));
    assert!(!topology.contains("Z"));
}

#[test]
fn test_path_by_mode() {
    let topology = demo();
    assert_eq!(
        topology.path(SearchMode::Longest, "A", "C").unwrap().weight,
        4
    );
    assert_eq!(
        topology.path(SearchMode::Shortest, "A", "C").unwrap().weight,
        3
    );
}

/// Test that one propagation step retires the crossed edge on both endpoints
#[test]
fn test_propagate_retires_crossed_edge() {
    let topology = demo();
    let mut simulation = Simulation::new(&topology, SearchMode::Shortest);
    let a = simulation.seed(topology.key_of("A").unwrap());
    let b = simulation.arena.primary(topology.key_of("B").unwrap());
    let a_b = simulation.arena.vertex(a).live_edges()[0];

    let reached = simulation.propagate(a);

    assert_eq!(reached, vec![b, a]);
    assert!(!simulation.arena.vertex(a).live_edges().contains(&a_b));
    assert!(!simulation.arena.vertex(b).live_edges().contains(&a_b));
    assert_eq!(
        simulation.arena.vertex(b).trail().map(Trail::weight),
        Some(1)
    );
}

#[test]
fn test_propagate_drops_exhausted_vertex() {
    let topology = topology(&[("A", 1, "B")]);
    let mut simulation = Simulation::new(&topology, SearchMode::Shortest);
    let a = simulation.seed(topology.key_of("A").unwrap());

    let reached = simulation.propagate(a);
    assert_eq!(reached.len(), 1);
    assert!(!simulation.arena.vertex(a).has_live_edges());
}
