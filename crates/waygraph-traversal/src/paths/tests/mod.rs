//! Tests for path discovery.


use waygraph_core::{AdjacencyListGraph, Graph};

/// Square with a chord: 0-1-2-3 plus the direct edge 0-3.
pub(crate) fn square_with_chord() -> AdjacencyListGraph {
    let mut g = AdjacencyListGraph::with_vertices(4);
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 3);
    g.add_edge(0, 3);
    g
}

/// Path graph 0-1-2-...-(n-1).
pub(crate) fn chain(n: usize) -> AdjacencyListGraph {
    let mut g = AdjacencyListGraph::with_vertices(n);
    for v in 0..n - 1 {
        g.add_edge(v, v + 1);
    }
    g
}

/// Complete graph on n vertices.
pub(crate) fn complete(n: usize) -> AdjacencyListGraph {
    let mut g = AdjacencyListGraph::with_vertices(n);
    for v1 in 0..n {
        for v2 in (v1 + 1)..n {
            g.add_edge(v1, v2);
        }
    }
    g
}
