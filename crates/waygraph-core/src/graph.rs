//! The abstract graph contract consumed by every traversal algorithm.
//!
//! Algorithms in `waygraph-traversal` are written against this trait rather
//! than a concrete representation, so any storage scheme (adjacency lists,
//! matrices, wrappers over external data) gets the full traversal and
//! path-analysis toolkit by implementing five methods.

use crate::error::{GraphError, GraphResult};
use crate::types::VertexId;

/// An unweighted graph over dense vertex indices.
///
/// Implementations must uphold one invariant: every index yielded by
/// [`adjacencies`](Graph::adjacencies) is `< vertex_count()`.
///
/// The iteration order of `adjacencies` is representation-defined. It must be
/// stable within a single call, but need not be sorted, and traversal results
/// that depend on neighbor order (DFS pre-order, shortest-path tie-breaking)
/// are only deterministic to the extent the representation's order is.
pub trait Graph {
    /// Number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Number of edges in the graph.
    ///
    /// Undirected representations count each edge once, not once per
    /// endpoint.
    fn edge_count(&self) -> usize;

    /// Add an edge between `v1` and `v2`.
    ///
    /// Representations grow their vertex table on demand, so `add_edge` also
    /// introduces any vertex index it has not seen yet. Parallel edges are
    /// permitted.
    fn add_edge(&mut self, v1: VertexId, v2: VertexId);

    /// Remove every edge between `v1` and `v2`.
    ///
    /// Removing between a pair with no edge is a no-op; a vertex outside the
    /// graph is a structural error.
    fn remove_edge(&mut self, v1: VertexId, v2: VertexId) -> GraphResult<()>;

    /// Lazy enumeration of the neighbors of `v`.
    ///
    /// A vertex outside the graph yields an empty sequence; range validation
    /// belongs to the algorithm entry points, not the neighbor scan.
    fn adjacencies(&self, v: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Whether edges are one-directional.
    ///
    /// Drives rendering (`->` vs `--`) in the DOT export; traversal
    /// algorithms never consult it; they follow whatever `adjacencies`
    /// yields.
    fn is_directed(&self) -> bool {
        false
    }

    /// Validate that `v` names a vertex of this graph.
    fn check_vertex(&self, v: VertexId) -> GraphResult<()> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Whether `v1` and `v2` are directly connected, by linear scan of
    /// `adjacencies(v1)`.
    fn is_adjacent(&self, v1: VertexId, v2: VertexId) -> GraphResult<bool> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        Ok(self.adjacencies(v1).any(|adj| adj == v2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal trait implementation over a fixed edge table, to exercise the
    /// provided methods independently of the shipped representations.
    struct FixedGraph {
        vertices: usize,
        edges: Vec<(VertexId, VertexId)>,
    }

    impl Graph for FixedGraph {
        fn vertex_count(&self) -> usize {
            self.vertices
        }

        fn edge_count(&self) -> usize {
            self.edges.len()
        }

        fn add_edge(&mut self, v1: VertexId, v2: VertexId) {
            self.vertices = self.vertices.max(v1.max(v2) + 1);
            self.edges.push((v1, v2));
        }

        fn remove_edge(&mut self, v1: VertexId, v2: VertexId) -> GraphResult<()> {
            self.check_vertex(v1)?;
            self.check_vertex(v2)?;
            self.edges.retain(|&(a, b)| (a, b) != (v1, v2));
            Ok(())
        }

        fn adjacencies(&self, v: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
            Box::new(
                self.edges
                    .iter()
                    .filter(move |&&(a, _)| a == v)
                    .map(|&(_, b)| b),
            )
        }
    }

    #[test]
    fn check_vertex_accepts_in_range() {
        let g = FixedGraph {
            vertices: 3,
            edges: vec![],
        };
        assert!(g.check_vertex(0).is_ok());
        assert!(g.check_vertex(2).is_ok());
    }

    #[test]
    fn check_vertex_rejects_out_of_range() {
        let g = FixedGraph {
            vertices: 3,
            edges: vec![],
        };
        assert_eq!(
            g.check_vertex(3),
            Err(GraphError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn is_adjacent_scans_neighbors() {
        let g = FixedGraph {
            vertices: 3,
            edges: vec![(0, 1), (1, 2)],
        };
        assert!(g.is_adjacent(0, 1).unwrap());
        assert!(!g.is_adjacent(0, 2).unwrap());
        // Directed table: adjacency is asymmetric here.
        assert!(!g.is_adjacent(1, 0).unwrap());
    }

    #[test]
    fn is_adjacent_validates_both_arguments() {
        let g = FixedGraph {
            vertices: 2,
            edges: vec![(0, 1)],
        };
        assert!(g.is_adjacent(0, 5).is_err());
        assert!(g.is_adjacent(5, 0).is_err());
    }

    #[test]
    fn directedness_defaults_to_false() {
        let g = FixedGraph {
            vertices: 1,
            edges: vec![],
        };
        assert!(!g.is_directed());
    }
}
