//! Components and ordering
//!
//! Kosaraju's strongly-connected-components algorithm and DFS-based
//! topological sort.
//!
//! ## Kosaraju in two passes
//! 1. DFS the graph, recording vertices in order of finishing time
//! 2. DFS the reversed graph in reverse finish order; each tree found is
//!    one strongly connected component

use std::collections::{HashMap, HashSet};

use crate::error::{AlgoError, Result};

use super::{Graph, Vertex};

/// Strongly connected components of a directed graph (Kosaraju)
///
/// O(V + E). Every vertex appears in exactly one component. Components are
/// listed in reverse topological order of the condensation.
pub fn strongly_connected_components<V: Vertex>(graph: &Graph<V>) -> Vec<Vec<V>> {
    // Pass 1: finish order on the original graph
    let mut visited = HashSet::new();
    let mut finish_order = Vec::new();
    for vertex in graph.vertices() {
        if !visited.contains(&vertex) {
            finish_visit(graph, &vertex, &mut visited, &mut finish_order);
        }
    }

    // Pass 2: collect trees on the reversed graph, latest finisher first
    let reversed = reverse_adjacency(graph);
    let mut visited = HashSet::new();
    let mut components = Vec::new();
    for vertex in finish_order.iter().rev() {
        if !visited.contains(vertex) {
            let mut component = Vec::new();
            collect_visit(&reversed, vertex, &mut visited, &mut component);
            components.push(component);
        }
    }

    components
}

/// Topological order of a directed acyclic graph
///
/// O(V + E). Every edge (u, v) places u before v in the result. A cycle is
/// an error.
pub fn topological_sort<V: Vertex>(graph: &Graph<V>) -> Result<Vec<V>> {
    let mut visited = HashSet::new();
    let mut in_progress = HashSet::new();
    let mut order = Vec::new();

    for vertex in graph.vertices() {
        if !visited.contains(&vertex) {
            sort_visit(graph, &vertex, &mut visited, &mut in_progress, &mut order)?;
        }
    }

    order.reverse();
    Ok(order)
}

// -------------------------------------------------------------------------
// DFS helpers
// -------------------------------------------------------------------------

fn finish_visit<V: Vertex>(
    graph: &Graph<V>,
    vertex: &V,
    visited: &mut HashSet<V>,
    finish_order: &mut Vec<V>,
) {
    visited.insert(vertex.clone());
    for (neighbor, _) in graph.neighbors(vertex) {
        if !visited.contains(neighbor) {
            finish_visit(graph, neighbor, visited, finish_order);
        }
    }
    finish_order.push(vertex.clone());
}

fn collect_visit<V: Vertex>(
    reversed: &HashMap<V, Vec<V>>,
    vertex: &V,
    visited: &mut HashSet<V>,
    component: &mut Vec<V>,
) {
    visited.insert(vertex.clone());
    component.push(vertex.clone());
    if let Some(neighbors) = reversed.get(vertex) {
        for neighbor in neighbors {
            if !visited.contains(neighbor) {
                collect_visit(reversed, neighbor, visited, component);
            }
        }
    }
}

fn sort_visit<V: Vertex>(
    graph: &Graph<V>,
    vertex: &V,
    visited: &mut HashSet<V>,
    in_progress: &mut HashSet<V>,
    order: &mut Vec<V>,
) -> Result<()> {
    visited.insert(vertex.clone());
    in_progress.insert(vertex.clone());

    for (neighbor, _) in graph.neighbors(vertex) {
        if in_progress.contains(neighbor) {
            // A back edge into the active DFS path
            return Err(AlgoError::CycleDetected);
        }
        if !visited.contains(neighbor) {
            sort_visit(graph, neighbor, visited, in_progress, order)?;
        }
    }

    in_progress.remove(vertex);
    order.push(vertex.clone());
    Ok(())
}

/// Adjacency of the graph with every edge direction flipped
fn reverse_adjacency<V: Vertex>(graph: &Graph<V>) -> HashMap<V, Vec<V>> {
    let mut reversed: HashMap<V, Vec<V>> = HashMap::new();
    for vertex in graph.vertices() {
        for (neighbor, _) in graph.neighbors(&vertex) {
            reversed
                .entry(neighbor.clone())
                .or_default()
                .push(vertex.clone());
        }
    }
    reversed
}
