//! Maximum flow
//!
//! Ford-Fulkerson with the Edmonds-Karp refinement: augmenting paths are
//! found with BFS over the residual network, which bounds the number of
//! augmentations polynomially.
//!
//! ## Residual network
//! Every edge (u, v) with capacity c starts with residual capacity c and an
//! implicit reverse edge (v, u) with residual capacity 0. Pushing f units
//! along (u, v) lowers its residual by f and raises (v, u) by f.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::error::{AlgoError, Result};

use super::{Edge, Graph, Vertex};

/// Outcome of a max-flow computation
#[derive(Debug, Clone)]
pub struct FlowResult<V> {
    /// Total flow pushed from source to sink
    pub max_flow: i64,
    /// Per-edge flow assignment; only edges carrying positive flow appear
    pub edge_flows: Vec<Edge<V>>,
}

/// Maximum flow from `source` to `sink` (Edmonds-Karp)
///
/// O(V * E^2). Edge weights are treated as capacities and must be positive.
/// `source` and `sink` must be distinct registered vertices.
pub fn max_flow<V: Vertex>(graph: &Graph<V>, source: &V, sink: &V) -> Result<FlowResult<V>> {
    if !graph.contains_vertex(source) {
        return Err(AlgoError::VertexNotFound(format!("{:?}", source)));
    }
    if !graph.contains_vertex(sink) {
        return Err(AlgoError::VertexNotFound(format!("{:?}", sink)));
    }
    if source == sink {
        return Err(AlgoError::InvalidInput(
            "source and sink must be distinct".to_string(),
        ));
    }

    // Residual capacities: forward edges at full capacity, reverse edges at 0
    let mut residual: HashMap<V, HashMap<V, i64>> = HashMap::new();
    for edge in graph.edges() {
        if edge.weight <= 0 {
            return Err(AlgoError::InvalidInput(format!(
                "capacity must be positive, got {} on {:?} -> {:?}",
                edge.weight, edge.from, edge.to
            )));
        }
        *residual
            .entry(edge.from.clone())
            .or_default()
            .entry(edge.to.clone())
            .or_insert(0) += edge.weight;
        residual
            .entry(edge.to.clone())
            .or_default()
            .entry(edge.from.clone())
            .or_insert(0);
    }

    let mut max_flow = 0;
    while let Some((path, bottleneck)) = augmenting_path(&residual, source, sink) {
        debug!("augmenting path of {} vertices, bottleneck {}", path.len(), bottleneck);
        for pair in path.windows(2) {
            let (u, v) = (&pair[0], &pair[1]);
            if let Some(forward) = residual.get_mut(u).and_then(|edges| edges.get_mut(v)) {
                *forward -= bottleneck;
            }
            if let Some(backward) = residual.get_mut(v).and_then(|edges| edges.get_mut(u)) {
                *backward += bottleneck;
            }
        }
        max_flow += bottleneck;
    }

    // Net flow on each original edge is its spent capacity
    let mut edge_flows = Vec::new();
    for edge in graph.edges() {
        let remaining = residual
            .get(&edge.from)
            .and_then(|edges| edges.get(&edge.to))
            .copied()
            .unwrap_or(edge.weight);
        let flow = edge.weight - remaining;
        if flow > 0 {
            edge_flows.push(Edge::new(edge.from.clone(), edge.to.clone(), flow));
        }
    }

    Ok(FlowResult {
        max_flow,
        edge_flows,
    })
}

/// BFS for a shortest augmenting path with spare residual capacity
///
/// Returns the path (source to sink inclusive) and its bottleneck capacity.
fn augmenting_path<V: Vertex>(
    residual: &HashMap<V, HashMap<V, i64>>,
    source: &V,
    sink: &V,
) -> Option<(Vec<V>, i64)> {
    let mut parent: HashMap<V, V> = HashMap::new();
    let mut best_capacity: HashMap<V, i64> = HashMap::new();
    let mut queue = VecDeque::new();

    best_capacity.insert(source.clone(), i64::MAX);
    queue.push_back(source.clone());

    while let Some(current) = queue.pop_front() {
        let Some(edges) = residual.get(&current) else {
            continue;
        };
        for (neighbor, &capacity) in edges {
            if capacity <= 0 || best_capacity.contains_key(neighbor) {
                continue;
            }
            let through = best_capacity
                .get(&current)
                .copied()
                .unwrap_or(i64::MAX)
                .min(capacity);
            best_capacity.insert(neighbor.clone(), through);
            parent.insert(neighbor.clone(), current.clone());

            if neighbor == sink {
                // Walk parents back to the source
                let mut path = vec![sink.clone()];
                let mut cur = sink;
                while let Some(prev) = parent.get(cur) {
                    path.push(prev.clone());
                    cur = prev;
                }
                path.reverse();
                return Some((path, through));
            }
            queue.push_back(neighbor.clone());
        }
    }

    None
}
