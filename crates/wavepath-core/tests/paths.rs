//! Path queries checked against brute-force simple-path enumeration

use std::collections::HashMap;

use wavepath_core::config::{EdgeSpec, TopologyConfig};
use wavepath_core::graph::{PathResult, Topology};

fn fixtures() -> Vec<(&'static str, Vec<(&'static str, i64, &'static str)>)> {
    vec![
        ("demo", vec![("A", 1, "B"), ("A", 4, "C"), ("B", 2, "C")]),
        ("cycle", vec![("A", 2, "B"), ("B", 2, "C"), ("A", 1, "C")]),
        (
            "diamond",
            vec![("A", 1, "B"), ("B", 1, "D"), ("A", 5, "C"), ("C", 5, "D")],
        ),
        (
            "ring",
            vec![
                ("R1", 3, "R2"),
                ("R2", 1, "R3"),
                ("R3", 4, "R4"),
                ("R4", 1, "R5"),
                ("R5", 5, "R1"),
            ],
        ),
        (
            "mesh",
            vec![
                ("S", 2, "T"),
                ("S", 7, "U"),
                ("T", 3, "U"),
                ("T", 6, "V"),
                ("U", 1, "V"),
                ("U", 8, "W"),
                ("V", 2, "W"),
                ("W", 4, "X"),
                ("V", 9, "X"),
            ],
        ),
        (
            "islands",
            vec![("A", 1, "B"), ("B", 2, "C"), ("P", 1, "Q"), ("Q", 1, "R")],
        ),
    ]
}

fn build(edges: &[(&str, i64, &str)]) -> Topology {
    let config = TopologyConfig::from_edges(edges.iter().copied());
    Topology::from_config(&config).unwrap()
}

/// Weights keyed by unordered endpoint pair
fn weights(edges: &[(&str, i64, &str)]) -> HashMap<(String, String), u64> {
    let mut map = HashMap::new();
    for &(a, w, b) in edges {
        map.insert((a.to_string(), b.to_string()), w as u64);
        map.insert((b.to_string(), a.to_string()), w as u64);
    }
    map
}

/// Weights of every simple path from `from` to `to`
fn simple_path_weights(edges: &[(&str, i64, &str)], from: &str, to: &str) -> Vec<u64> {
    fn walk(
        adjacency: &HashMap<&str, Vec<(&str, u64)>>,
        current: &str,
        to: &str,
        visited: &mut Vec<String>,
        weight: u64,
        out: &mut Vec<u64>,
    ) {
        if current == to {
            out.push(weight);
            return;
        }
        for &(next, w) in adjacency.get(current).into_iter().flatten() {
            if visited.iter().any(|v| v == next) {
                continue;
            }
            visited.push(next.to_string());
            walk(adjacency, next, to, visited, weight + w, out);
            visited.pop();
        }
    }

    let mut adjacency: HashMap<&str, Vec<(&str, u64)>> = HashMap::new();
    for &(a, w, b) in edges {
        adjacency.entry(a).or_default().push((b, w as u64));
        adjacency.entry(b).or_default().push((a, w as u64));
    }

    let mut out = Vec::new();
    let mut visited = vec![from.to_string()];
    walk(&adjacency, from, to, &mut visited, 0, &mut out);
    out
}

fn assert_valid_path(result: &PathResult, edges: &[(&str, i64, &str)], label: &str) {
    let weights = weights(edges);
    assert_eq!(result.vertices.first(), Some(&result.from), "{label}");
    assert_eq!(result.vertices.last(), Some(&result.to), "{label}");

    let mut seen = result.vertices.clone();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), result.vertices.len(), "{label}: path repeats a vertex");

    let total: u64 = result
        .vertices
        .windows(2)
        .map(|pair| {
            weights
                .get(&(pair[0].clone(), pair[1].clone()))
                .copied()
                .unwrap_or_else(|| panic!("{label}: {} and {} are not adjacent", pair[0], pair[1]))
        })
        .sum();
    assert_eq!(total, result.weight, "{label}: weight mismatch");
}

#[test]
fn test_shortest_matches_minimum_simple_path() {
    for (name, edges) in fixtures() {
        let topology = build(&edges);
        let ids: Vec<String> = topology.vertex_ids().map(str::to_string).collect();

        for from in &ids {
            for to in ids.iter().filter(|to| *to != from) {
                let label = format!("{name} {from}->{to}");
                let result = topology.shortest_path(from.as_str(), to.as_str()).unwrap();
                let candidates = simple_path_weights(&edges, from, to);

                match candidates.iter().min() {
                    Some(&min) => {
                        assert!(result.found, "{label}");
                        assert_eq!(result.weight, min, "{label}");
                        assert_eq!(result.ticks, result.weight, "{label}");
                        assert_valid_path(&result, &edges, &label);
                    }
                    None => assert!(!result.found, "{label}"),
                }
            }
        }
    }
}

#[test]
fn test_longest_is_a_simple_path_within_bounds() {
    for (name, edges) in fixtures() {
        let topology = build(&edges);
        let ids: Vec<String> = topology.vertex_ids().map(str::to_string).collect();

        for from in &ids {
            for to in ids.iter().filter(|to| *to != from) {
                let label = format!("{name} {from}->{to}");
                let longest = topology.longest_path(from.as_str(), to.as_str()).unwrap();
                let shortest = topology.shortest_path(from.as_str(), to.as_str()).unwrap();
                let candidates = simple_path_weights(&edges, from, to);

                match candidates.iter().max() {
                    Some(&max) => {
                        assert!(longest.found, "{label}");
                        assert!(longest.weight <= max, "{label}");
                        assert!(longest.weight >= shortest.weight, "{label}");
                        assert_valid_path(&longest, &edges, &label);
                    }
                    None => {
                        assert!(!longest.found, "{label}");
                        assert_eq!(longest.branches, 0, "{label}");
                    }
                }
            }
        }
    }
}

/// Test that rebuilding from the same configuration reproduces every result
#[test]
fn test_rebuilt_topology_is_idempotent() {
    let config = TopologyConfig {
        edges: fixtures()
            .into_iter()
            .find(|(name, _)| *name == "mesh")
            .map(|(_, edges)| edges.into_iter().map(EdgeSpec::from).collect())
            .unwrap(),
    };

    let first = Topology::from_config(&config).unwrap();
    let second = Topology::from_config(&config).unwrap();

    for (from, to) in [("S", "X"), ("X", "S"), ("T", "W")] {
        assert_eq!(
            first.shortest_path(from, to).unwrap(),
            second.shortest_path(from, to).unwrap()
        );
        assert_eq!(
            first.longest_path(from, to).unwrap(),
            second.longest_path(from, to).unwrap()
        );
    }
}

#[test]
fn test_self_path_everywhere() {
    for (name, edges) in fixtures() {
        let topology = build(&edges);
        for id in topology.vertex_ids() {
            let shortest = topology.shortest_path(id, id).unwrap();
            let longest = topology.longest_path(id, id).unwrap();
            assert_eq!(shortest.vertices, vec![id.to_string()], "{name}");
            assert_eq!(longest.vertices, vec![id.to_string()], "{name}");
            assert_eq!(shortest.weight, 0, "{name}");
        }
    }
}
