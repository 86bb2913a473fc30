//! Vertices common to all shortest paths.

use std::collections::VecDeque;

use waygraph_core::{Graph, GraphResult, VertexId};

use super::types::CommonVertices;

/// Find the interior vertices shared by every shortest path from `from` to
/// `to`.
///
/// One BFS sweep records each vertex's distance from `from` and its full set
/// of shortest-path predecessors (every neighbor one layer closer to the
/// source). A backward sweep from `to` then marks the vertices lying on at
/// least one shortest path, and a forward pass counts the paths layer by
/// layer with saturating arithmetic; a count of two or more classifies the
/// same regardless of how astronomically many equal-length routes exist.
///
/// A vertex is on *every* shortest path exactly when it is the only
/// on-a-shortest-path vertex in its BFS layer: each shortest path crosses
/// each layer once, so a layer with two on-path vertices has a path through
/// each, avoiding the other. The shared vertices are reported in layer
/// order, which is the order they occur along any shortest path; the
/// endpoints, shared trivially, are not reported.
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`](waygraph_core::GraphError) if `from` or
/// `to` is not a vertex of the graph.
pub fn common_vertices<G>(graph: &G, from: VertexId, to: VertexId) -> GraphResult<CommonVertices>
where
    G: Graph + ?Sized,
{
    graph.check_vertex(from)?;
    graph.check_vertex(to)?;

    if from == to {
        // The trivial single-vertex path is the only shortest path.
        return Ok(CommonVertices::SinglePath);
    }

    let n = graph.vertex_count();
    let mut distance: Vec<Option<usize>> = vec![None; n];
    let mut predecessors: Vec<Vec<VertexId>> = vec![Vec::new(); n];
    let mut queue: VecDeque<(VertexId, usize)> = VecDeque::new();
    let mut target_distance: Option<usize> = None;

    distance[from] = Some(0);
    queue.push_back((from, 0));

    while let Some((current, dist)) = queue.pop_front() {
        // Vertices past the target's layer cannot start a shortest route.
        if target_distance.map_or(false, |td| dist + 1 > td) {
            continue;
        }

        for adj in graph.adjacencies(current) {
            match distance[adj] {
                None => {
                    distance[adj] = Some(dist + 1);
                    predecessors[adj].push(current);
                    if adj == to {
                        target_distance = Some(dist + 1);
                    } else {
                        queue.push_back((adj, dist + 1));
                    }
                }
                // A second route arriving at the same layer; parallel edges
                // from the same predecessor don't count twice.
                Some(d) if d == dist + 1 && !predecessors[adj].contains(&current) => {
                    predecessors[adj].push(current);
                }
                Some(_) => {}
            }
        }
    }

    let Some(target_distance) = target_distance else {
        return Ok(CommonVertices::Unreachable);
    };

    // Backward sweep: mark everything on at least one shortest path.
    let mut on_path = vec![false; n];
    on_path[to] = true;
    let mut stack = vec![to];
    while let Some(v) = stack.pop() {
        for &p in &predecessors[v] {
            if !on_path[p] {
                on_path[p] = true;
                stack.push(p);
            }
        }
    }

    // Group on-path vertices by layer for the counting pass and the
    // uniqueness test.
    let mut layers: Vec<Vec<VertexId>> = vec![Vec::new(); target_distance + 1];
    for v in 0..n {
        if on_path[v] {
            if let Some(d) = distance[v] {
                layers[d].push(v);
            }
        }
    }

    // Forward DP over layers: paths into a vertex = sum over predecessors.
    let mut path_count: Vec<u64> = vec![0; n];
    path_count[from] = 1;
    for layer in layers.iter().skip(1) {
        for &v in layer {
            let mut count = 0u64;
            for &p in &predecessors[v] {
                count = count.saturating_add(path_count[p]);
            }
            path_count[v] = count;
        }
    }

    log::debug!(
        "common-vertex analysis {} -> {}: {} shortest path(s) of length {}",
        from,
        to,
        path_count[to],
        target_distance
    );

    if path_count[to] <= 1 {
        return Ok(CommonVertices::SinglePath);
    }

    let mut shared = Vec::new();
    for layer in layers.iter().take(target_distance).skip(1) {
        if let [only] = layer[..] {
            shared.push(only);
        }
    }
    Ok(CommonVertices::Shared(shared))
}
