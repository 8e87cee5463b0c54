//! Shortest paths
//!
//! Dijkstra's algorithm over non-negative edge weights with a binary-heap
//! frontier and stale-entry skipping.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use crate::error::{AlgoError, Result};

use super::{Graph, Vertex};

/// Shortest distances and paths from a single source
#[derive(Debug, Clone)]
pub struct ShortestPaths<V: Vertex> {
    /// Source vertex the search started from
    pub source: V,
    /// Shortest known distance per reachable vertex
    pub distances: HashMap<V, i64>,
    /// Predecessor of each reached vertex on its shortest path
    predecessors: HashMap<V, V>,
}

impl<V: Vertex> ShortestPaths<V> {
    /// Shortest distance to `vertex`, `None` when unreachable
    pub fn distance(&self, vertex: &V) -> Option<i64> {
        self.distances.get(vertex).copied()
    }

    /// Shortest path from the source to `vertex`, endpoints included
    ///
    /// `None` when `vertex` is unreachable.
    pub fn path(&self, vertex: &V) -> Option<Vec<V>> {
        if !self.distances.contains_key(vertex) {
            return None;
        }
        let mut path = vec![vertex.clone()];
        let mut cur = vertex;
        while let Some(prev) = self.predecessors.get(cur) {
            path.push(prev.clone());
            cur = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's single-source shortest paths
///
/// O((V + E) log V). Every edge weight reachable by the search must be
/// non-negative; a negative weight is an error. An unknown source is an
/// error.
pub fn dijkstra<V: Vertex>(graph: &Graph<V>, source: &V) -> Result<ShortestPaths<V>> {
    if !graph.contains_vertex(source) {
        return Err(AlgoError::VertexNotFound(format!("{:?}", source)));
    }

    let mut distances: HashMap<V, i64> = HashMap::new();
    let mut predecessors: HashMap<V, V> = HashMap::new();
    let mut frontier: BinaryHeap<Reverse<(i64, V)>> = BinaryHeap::new();

    distances.insert(source.clone(), 0);
    frontier.push(Reverse((0, source.clone())));

    while let Some(Reverse((distance, vertex))) = frontier.pop() {
        // A vertex can be queued more than once; only its first (shortest)
        // extraction settles it.
        if distances.get(&vertex).is_some_and(|&best| distance > best) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(&vertex) {
            if *weight < 0 {
                return Err(AlgoError::NegativeWeight(*weight));
            }
            let candidate = distance + weight;
            let improved = distances
                .get(neighbor)
                .map_or(true, |&best| candidate < best);
            if improved {
                trace!(
                    "relax {:?} -> {:?}: distance {}",
                    vertex,
                    neighbor,
                    candidate
                );
                distances.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor.clone(), vertex.clone());
                frontier.push(Reverse((candidate, neighbor.clone())));
            }
        }
    }

    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
    })
}
