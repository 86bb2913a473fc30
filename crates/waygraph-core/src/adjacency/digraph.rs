//! Directed adjacency-list graph.

use crate::error::GraphResult;
use crate::graph::Graph;
use crate::types::VertexId;

/// A directed graph stored as one successor list per vertex.
///
/// `add_edge(v1, v2)` records only the `v1 -> v2` direction;
/// `adjacencies(v)` enumerates successors.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    lists: Vec<Vec<VertexId>>,
    edges: usize,
}

impl Digraph {
    /// Create an empty digraph with no vertices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a digraph with `n` isolated vertices.
    #[must_use]
    pub fn with_vertices(n: usize) -> Self {
        Self {
            lists: vec![Vec::new(); n],
            edges: 0,
        }
    }

    fn ensure_vertex(&mut self, v: VertexId) {
        if v >= self.lists.len() {
            self.lists.resize_with(v + 1, Vec::new);
        }
    }
}

impl Graph for Digraph {
    fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn add_edge(&mut self, v1: VertexId, v2: VertexId) {
        self.ensure_vertex(v1);
        self.ensure_vertex(v2);
        self.lists[v1].push(v2);
        self.edges += 1;
    }

    fn remove_edge(&mut self, v1: VertexId, v2: VertexId) -> GraphResult<()> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        let before = self.lists[v1].len();
        self.lists[v1].retain(|&adj| adj != v2);
        self.edges -= before - self.lists[v1].len();
        Ok(())
    }

    fn adjacencies(&self, v: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.lists.get(v).into_iter().flatten().copied())
    }

    fn is_directed(&self) -> bool {
        true
    }
}
