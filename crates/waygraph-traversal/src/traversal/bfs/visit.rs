//! Eager breadth-first visit.

use std::collections::VecDeque;

use waygraph_core::{Graph, GraphResult, VertexId};

/// Visit every vertex reachable from `from` in breadth-first order,
/// invoking `visitor` with each vertex exactly once (`from` included).
///
/// Neighbors are marked visited when enqueued, so a vertex adjacent to
/// several frontier vertices is scheduled only once. Visitation order is
/// non-decreasing in distance from `from`.
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`](waygraph_core::GraphError) if `from` is
/// not a vertex of the graph.
pub fn bfs_visit<G, F>(graph: &G, from: VertexId, mut visitor: F) -> GraphResult<()>
where
    G: Graph + ?Sized,
    F: FnMut(VertexId),
{
    graph.check_vertex(from)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    queue.push_back(from);
    visited[from] = true;
    let mut visit_count = 0usize;

    while let Some(current) = queue.pop_front() {
        visitor(current);
        visit_count += 1;
        for adj in graph.adjacencies(current) {
            if !visited[adj] {
                visited[adj] = true;
                queue.push_back(adj);
            }
        }
    }

    log::debug!("BFS complete: {} vertices from {}", visit_count, from);
    Ok(())
}
