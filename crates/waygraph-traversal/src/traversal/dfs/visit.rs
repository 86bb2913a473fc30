//! Eager depth-first visits.

use waygraph_core::{Graph, GraphResult, VertexId};

/// Visit every vertex reachable from `from` in recursive DFS pre-order,
/// invoking `visitor` with each vertex exactly once (`from` included).
///
/// Neighbors are explored in adjacency order; the call stack carries the
/// recursion, so stack depth is bounded by the longest simple path from
/// `from` (at most `vertex_count`).
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`](waygraph_core::GraphError) if `from` is
/// not a vertex of the graph.
pub fn dfs_visit<G, F>(graph: &G, from: VertexId, mut visitor: F) -> GraphResult<()>
where
    G: Graph + ?Sized,
    F: FnMut(VertexId),
{
    graph.check_vertex(from)?;
    let mut visited = vec![false; graph.vertex_count()];
    visit_recursive(graph, from, &mut visited, &mut visitor);
    Ok(())
}

/// Recursive helper carrying the visited set and visitor explicitly.
fn visit_recursive<G, F>(graph: &G, current: VertexId, visited: &mut [bool], visitor: &mut F)
where
    G: Graph + ?Sized,
    F: FnMut(VertexId),
{
    visitor(current);
    visited[current] = true;
    for adj in graph.adjacencies(current) {
        if !visited[adj] {
            visit_recursive(graph, adj, visited, visitor);
        }
    }
}

/// Visit every vertex reachable from `from` using an explicit stack,
/// invoking `visitor` with each vertex exactly once (`from` included).
///
/// Neighbors are marked visited when pushed, and visitation follows pop
/// order, which reverses the push order of each neighbor batch: siblings
/// come out in reverse adjacency order relative to [`dfs_visit`]. The
/// reachable set is identical.
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`](waygraph_core::GraphError) if `from` is
/// not a vertex of the graph.
pub fn dfs_visit_stack<G, F>(graph: &G, from: VertexId, mut visitor: F) -> GraphResult<()>
where
    G: Graph + ?Sized,
    F: FnMut(VertexId),
{
    graph.check_vertex(from)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![from];
    visited[from] = true;
    let mut visit_count = 0usize;

    while let Some(current) = stack.pop() {
        visitor(current);
        visit_count += 1;
        for adj in graph.adjacencies(current) {
            if !visited[adj] {
                visited[adj] = true;
                stack.push(adj);
            }
        }
    }

    log::debug!("stack DFS complete: {} vertices from {}", visit_count, from);
    Ok(())
}
