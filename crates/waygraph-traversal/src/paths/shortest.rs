//! BFS shortest path with optional vertex exclusion.

use std::collections::VecDeque;

use waygraph_core::{Graph, GraphResult, VertexId};

/// Compute one shortest path (by edge count) from `from` to `to`, optionally
/// treating `excluded` as removed from the graph.
///
/// Returns the path as vertex indices from `from` to `to` inclusive, or an
/// empty vector if `to` is unreachable under the exclusion. `from == to`
/// returns the single-vertex path.
///
/// The excluded vertex is pre-marked visited so it is never expanded, which
/// blocks every route through it. Excluding an endpoint is a no-op: the
/// source is seeded into the frontier unconditionally and the target is
/// recognized at discovery, before the visited check.
///
/// Among several shortest paths of equal length, the one returned is
/// whichever BFS discovers first under the graph's adjacency order.
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`](waygraph_core::GraphError) if `from`,
/// `to`, or `excluded` is not a vertex of the graph.
pub fn shortest_path<G>(
    graph: &G,
    from: VertexId,
    to: VertexId,
    excluded: Option<VertexId>,
) -> GraphResult<Vec<VertexId>>
where
    G: Graph + ?Sized,
{
    graph.check_vertex(from)?;
    graph.check_vertex(to)?;
    if let Some(v) = excluded {
        graph.check_vertex(v)?;
    }

    if from == to {
        return Ok(vec![from]);
    }

    let mut visited = vec![false; graph.vertex_count()];
    if let Some(v) = excluded {
        visited[v] = true;
    }
    let mut predecessor: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::new();
    queue.push_back(from);
    visited[from] = true;

    // Stop expanding the moment the target's predecessor is set.
    'search: while let Some(current) = queue.pop_front() {
        for adj in graph.adjacencies(current) {
            if adj == to {
                predecessor[to] = Some(current);
                break 'search;
            }
            if !visited[adj] {
                predecessor[adj] = Some(current);
                visited[adj] = true;
                queue.push_back(adj);
            }
        }
    }

    let mut path = Vec::new();
    if predecessor[to].is_some() {
        // Walk predecessors back from the target; the source has none.
        let mut current = to;
        loop {
            path.push(current);
            match predecessor[current] {
                Some(prev) => current = prev,
                None => break,
            }
        }
        path.reverse();
    }

    log::trace!(
        "shortest path {} -> {} (excluded {:?}): {} vertices",
        from,
        to,
        excluded,
        path.len()
    );
    Ok(path)
}
