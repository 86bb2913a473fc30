//! Lazy DFS iterator.

use waygraph_core::{Graph, GraphResult, VertexId};

/// Single-pass depth-first iterator over the vertices reachable from a
/// start vertex.
///
/// Each `next()` pops one vertex, schedules its not-yet-discovered neighbors
/// (marking them at discovery time so a shared neighbor of two frontier
/// vertices is scheduled once), and yields the popped vertex. The iterator
/// owns its stack and visited set; it is exhausted when the stack empties
/// and cannot be restarted. Request a fresh one to re-traverse.
pub struct DfsIter<'a, G: Graph + ?Sized> {
    graph: &'a G,
    stack: Vec<VertexId>,
    visited: Vec<bool>,
}

impl<'a, G: Graph + ?Sized> DfsIter<'a, G> {
    /// Create an iterator rooted at `from`.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexOutOfRange`](waygraph_core::GraphError) if `from`
    /// is not a vertex of the graph.
    pub fn new(graph: &'a G, from: VertexId) -> GraphResult<Self> {
        graph.check_vertex(from)?;
        let mut visited = vec![false; graph.vertex_count()];
        visited[from] = true;
        Ok(Self {
            graph,
            stack: vec![from],
            visited,
        })
    }
}

impl<G: Graph + ?Sized> Iterator for DfsIter<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        let current = self.stack.pop()?;
        for adj in self.graph.adjacencies(current) {
            if !self.visited[adj] {
                self.visited[adj] = true;
                self.stack.push(adj);
            }
        }
        Some(current)
    }
}
