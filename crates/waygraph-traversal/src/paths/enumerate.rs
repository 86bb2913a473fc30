//! Exhaustive simple-path enumeration.

use waygraph_core::{Graph, GraphResult, VertexId};

use super::types::EnumerationLimits;

/// Find every simple path from `from` to `to`, in the order discovered by
/// depth-first backtracking over adjacency order.
///
/// Each returned path starts with `from`, ends with `to`, and repeats no
/// vertex. `from == to` yields the single-vertex path; an unreachable `to`
/// yields an empty collection. On dense graphs the path count grows
/// factorially with vertex count; use [`all_simple_paths_with`] to bound
/// the search.
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`](waygraph_core::GraphError) if `from` or
/// `to` is not a vertex of the graph.
pub fn all_simple_paths<G>(graph: &G, from: VertexId, to: VertexId) -> GraphResult<Vec<Vec<VertexId>>>
where
    G: Graph + ?Sized,
{
    all_simple_paths_with(graph, from, to, &EnumerationLimits::default())
}

/// [`all_simple_paths`] under the caps in `limits`.
///
/// The search stops cleanly once `max_paths` paths are recorded, and never
/// extends a partial path past `max_len` vertices.
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`](waygraph_core::GraphError) if `from` or
/// `to` is not a vertex of the graph.
pub fn all_simple_paths_with<G>(
    graph: &G,
    from: VertexId,
    to: VertexId,
    limits: &EnumerationLimits,
) -> GraphResult<Vec<Vec<VertexId>>>
where
    G: Graph + ?Sized,
{
    graph.check_vertex(from)?;
    graph.check_vertex(to)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut current = Vec::new();
    let mut found = Vec::new();
    extend_path(graph, from, to, limits, &mut visited, &mut current, &mut found);

    log::debug!(
        "path enumeration complete: {} paths from {} to {}",
        found.len(),
        from,
        to
    );
    Ok(found)
}

/// Backtracking step: extend the running path by `current`, record on
/// hitting the target, then undo the extension.
fn extend_path<G>(
    graph: &G,
    current: VertexId,
    to: VertexId,
    limits: &EnumerationLimits,
    visited: &mut [bool],
    path: &mut Vec<VertexId>,
    found: &mut Vec<Vec<VertexId>>,
) where
    G: Graph + ?Sized,
{
    if limits.max_paths.map_or(false, |max| found.len() >= max) {
        return;
    }

    visited[current] = true;
    path.push(current);

    if current == to {
        found.push(path.clone());
    } else if limits.max_len.map_or(true, |max| path.len() < max) {
        for adj in graph.adjacencies(current) {
            if !visited[adj] {
                extend_path(graph, adj, to, limits, visited, path, found);
            }
        }
    }

    path.pop();
    visited[current] = false;
}
