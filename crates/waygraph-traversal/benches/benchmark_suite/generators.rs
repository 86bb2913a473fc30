//! Deterministic graph generators for benchmarks.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use waygraph_core::{AdjacencyListGraph, Graph};

/// Path graph 0-1-2-...-(n-1).
pub fn chain(n: usize) -> AdjacencyListGraph {
    let mut g = AdjacencyListGraph::with_vertices(n);
    for v in 0..n - 1 {
        g.add_edge(v, v + 1);
    }
    g
}

/// Pseudo-random graph with roughly `degree` extra neighbors per vertex,
/// seeded deterministically so every run benches the same structure.
///
/// A chain backbone keeps the graph connected; the extra edges come from
/// hashing the (vertex, slot) pair.
pub fn random_graph(n: usize, degree: usize) -> AdjacencyListGraph {
    let mut g = chain(n);
    for v in 0..n {
        for slot in 0..degree {
            let mut hasher = DefaultHasher::new();
            (v, slot).hash(&mut hasher);
            let target = (hasher.finish() as usize) % n;
            if target != v {
                g.add_edge(v, target);
            }
        }
    }
    g
}
