//! Cut vertices of the shortest route.

use waygraph_core::{Graph, GraphResult, VertexId};

use crate::paths::shortest_path;

use super::types::CutVertices;

/// Find the interior vertices indispensable to reaching `to` from `from`.
///
/// A baseline shortest route is computed first (queried target-to-source;
/// only its vertex *list* matters, and any one shortest route serves).
/// Each interior vertex of that route is then removed in turn and the
/// source-to-target query repeated: if no path survives the removal, the
/// vertex is a cut vertex for this pair. These are cut vertices relative to
/// the pair, not articulation points of the whole graph.
///
/// Cost is one BFS per interior vertex of the baseline route.
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`](waygraph_core::GraphError) if `from` or
/// `to` is not a vertex of the graph.
pub fn cut_vertices<G>(graph: &G, from: VertexId, to: VertexId) -> GraphResult<CutVertices>
where
    G: Graph + ?Sized,
{
    graph.check_vertex(from)?;
    graph.check_vertex(to)?;

    let baseline = shortest_path(graph, to, from, None)?;
    if baseline.is_empty() {
        return Ok(CutVertices::Unreachable);
    }

    // The baseline runs target-to-source; walk it reversed so the report
    // reads source-to-target. Endpoints are never candidates.
    let mut indispensable = Vec::new();
    for &v in baseline.iter().rev().skip(1).take(baseline.len().saturating_sub(2)) {
        if shortest_path(graph, from, to, Some(v))?.is_empty() {
            indispensable.push(v);
        }
    }

    log::debug!(
        "cut-vertex analysis {} -> {}: {} of {} interior vertices indispensable",
        from,
        to,
        indispensable.len(),
        baseline.len().saturating_sub(2)
    );

    if indispensable.is_empty() {
        Ok(CutVertices::NoCutVertex)
    } else {
        Ok(CutVertices::Found(indispensable))
    }
}
