//! Tests for strongly connected components and topological sort
//!
//! These tests verify:
//! - Kosaraju components partition the vertex set
//! - Topological order respects every edge
//! - Cycle detection

use std::collections::HashSet;

use algolab::graph::{strongly_connected_components, topological_sort};
use algolab::{AlgoError, Graph};

/// Three interlinked cycles: {A,B,C}, {D,E,F}, {G,H,I,J}
fn three_scc_graph() -> Graph<&'static str> {
    let mut graph = Graph::directed();
    for (from, to) in [
        ("A", "B"),
        ("B", "C"),
        ("C", "A"),
        ("B", "D"),
        ("D", "E"),
        ("E", "F"),
        ("F", "D"),
        ("G", "F"),
        ("G", "H"),
        ("H", "I"),
        ("I", "J"),
        ("J", "G"),
    ] {
        graph.add_edge(from, to, 1);
    }
    graph
}

fn dag() -> Graph<&'static str> {
    let mut graph = Graph::directed();
    for (from, to) in [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "D"),
        ("D", "E"),
        ("E", "F"),
        ("G", "E"),
    ] {
        graph.add_edge(from, to, 1);
    }
    graph
}

// =============================================================================
// Strongly Connected Component Tests
// =============================================================================

#[test]
fn test_scc_finds_the_three_cycles() {
    let graph = three_scc_graph();
    let components = strongly_connected_components(&graph);

    let mut normalized: Vec<Vec<&str>> = components
        .into_iter()
        .map(|mut component| {
            component.sort_unstable();
            component
        })
        .collect();
    normalized.sort();

    assert_eq!(
        normalized,
        vec![
            vec!["A", "B", "C"],
            vec!["D", "E", "F"],
            vec!["G", "H", "I", "J"],
        ]
    );
}

#[test]
fn test_scc_partitions_the_vertex_set() {
    let graph = three_scc_graph();
    let components = strongly_connected_components(&graph);

    let mut seen = HashSet::new();
    for component in &components {
        for vertex in component {
            assert!(seen.insert(*vertex), "vertex {vertex} in two components");
        }
    }
    assert_eq!(seen.len(), graph.vertex_count());
}

#[test]
fn test_scc_singletons_in_a_dag() {
    let graph = dag();
    let components = strongly_connected_components(&graph);

    assert_eq!(components.len(), graph.vertex_count());
    assert!(components.iter().all(|component| component.len() == 1));
}

#[test]
fn test_scc_on_empty_graph() {
    let graph: Graph<&str> = Graph::directed();
    assert!(strongly_connected_components(&graph).is_empty());
}

// =============================================================================
// Topological Sort Tests
// =============================================================================

#[test]
fn test_topological_order_respects_every_edge() {
    let graph = dag();
    let order = topological_sort(&graph).unwrap();

    assert_eq!(order.len(), graph.vertex_count());
    let position = |vertex: &str| order.iter().position(|v| *v == vertex).unwrap();
    for edge in graph.edges() {
        assert!(
            position(edge.from) < position(edge.to),
            "edge {} -> {} out of order",
            edge.from,
            edge.to
        );
    }
}

#[test]
fn test_topological_sort_detects_cycle() {
    let mut graph = Graph::directed();
    graph.add_edge("A", "B", 1);
    graph.add_edge("B", "C", 1);
    graph.add_edge("C", "A", 1);

    assert_eq!(
        topological_sort(&graph).unwrap_err(),
        AlgoError::CycleDetected
    );
}

#[test]
fn test_topological_sort_rejects_self_loop() {
    let mut graph = Graph::directed();
    graph.add_edge("A", "A", 1);

    assert_eq!(
        topological_sort(&graph).unwrap_err(),
        AlgoError::CycleDetected
    );
}

#[test]
fn test_topological_sort_on_disconnected_dag() {
    let mut graph = Graph::directed();
    graph.add_edge("A", "B", 1);
    graph.add_edge("C", "D", 1);

    let order = topological_sort(&graph).unwrap();
    assert_eq!(order.len(), 4);
}
