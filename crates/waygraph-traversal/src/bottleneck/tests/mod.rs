//! Tests for bottleneck analysis.


use waygraph_core::{AdjacencyListGraph, Graph};

/// Path graph 0-1-2-...-(n-1): every interior vertex is indispensable.
pub(crate) fn chain(n: usize) -> AdjacencyListGraph {
    let mut g = AdjacencyListGraph::with_vertices(n);
    for v in 0..n - 1 {
        g.add_edge(v, v + 1);
    }
    g
}

/// Two parallel two-hop routes between 0 and 3: 0-1-3 and 0-2-3.
pub(crate) fn parallel_routes() -> AdjacencyListGraph {
    let mut g = AdjacencyListGraph::with_vertices(4);
    g.add_edge(0, 1);
    g.add_edge(1, 3);
    g.add_edge(0, 2);
    g.add_edge(2, 3);
    g
}
