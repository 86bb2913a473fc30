//! Lazy BFS iterator.

use std::collections::VecDeque;

use waygraph_core::{Graph, GraphResult, VertexId};

/// Single-pass breadth-first iterator over the vertices reachable from a
/// start vertex.
///
/// Each `next()` dequeues one vertex, schedules its not-yet-discovered
/// neighbors (marking them at discovery time), and yields the dequeued
/// vertex. Yield order matches [`bfs_visit`](super::bfs_visit) exactly. The
/// iterator owns its queue and visited set; it is exhausted when the queue
/// empties and cannot be restarted.
pub struct BfsIter<'a, G: Graph + ?Sized> {
    graph: &'a G,
    queue: VecDeque<VertexId>,
    visited: Vec<bool>,
}

impl<'a, G: Graph + ?Sized> BfsIter<'a, G> {
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
        let mut queue = VecDeque::new();
        queue.push_back(from);
        Ok(Self {
            graph,
            queue,
            visited,
        })
    }
}

impl<G: Graph + ?Sized> Iterator for BfsIter<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        let current = self.queue.pop_front()?;
        for adj in self.graph.adjacencies(current) {
            if !self.visited[adj] {
                self.visited[adj] = true;
                self.queue.push_back(adj);
            }
        }
        Some(current)
    }
}
