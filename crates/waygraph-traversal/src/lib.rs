//! Traversal and path-analysis engine for waygraph.
//!
//! Every algorithm in this crate is written against the
//! [`Graph`](waygraph_core::Graph) contract from `waygraph-core`, so any
//! representation implementing that trait gets the full toolkit.
//!
//! # Architecture
//!
//! - **traversal**: eager DFS (recursive and stack-based), eager BFS, and
//!   single-pass pull iterators for both
//! - **paths**: exhaustive simple-path enumeration and BFS shortest paths
//!   with optional vertex exclusion
//! - **bottleneck**: route analysis built on the shortest-path primitive:
//!   cut vertices of the shortest route and vertices common to all shortest
//!   paths
//! - **export**: DOT and edge-list text rendering
//!
//! All state is call-scoped: each invocation allocates its own visited set,
//! frontier, and predecessor table, and the library caches nothing across
//! calls. The graph must not be mutated for the duration of a single
//! traversal or analysis call.
//!
//! # Example
//!
//! ```
//! use waygraph_core::{AdjacencyListGraph, Graph, GraphResult};
//! use waygraph_traversal::paths::{all_simple_paths, shortest_path};
//!
//! fn example() -> GraphResult<()> {
//!     // A square with a chord: 0-1-2-3 plus the direct edge 0-3.
//!     let mut g = AdjacencyListGraph::with_vertices(4);
//!     g.add_edge(0, 1);
//!     g.add_edge(1, 2);
//!     g.add_edge(2, 3);
//!     g.add_edge(0, 3);
//!
//!     assert_eq!(shortest_path(&g, 0, 3, None)?, vec![0, 3]);
//!
//!     let all = all_simple_paths(&g, 0, 3)?;
//!     assert!(all.contains(&vec![0, 3]));
//!     assert!(all.contains(&vec![0, 1, 2, 3]));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod bottleneck;
pub mod export;
pub mod paths;
pub mod traversal;

// Re-exports for convenience
pub use bottleneck::{common_vertices, cut_vertices, CommonVertices, CutVertices};
pub use export::{to_dot, to_edge_list_text};
pub use paths::{all_simple_paths, all_simple_paths_with, shortest_path, EnumerationLimits};
pub use traversal::{bfs_visit, dfs_visit, dfs_visit_stack, BfsIter, DfsIter};

// Re-export core types for convenience
pub use waygraph_core::{Graph, GraphError, GraphResult, VertexId};
