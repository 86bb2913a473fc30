//! Core graph contract and in-memory representations for waygraph.
//!
//! This crate defines the abstraction every waygraph algorithm is written
//! against, plus the concrete adjacency-list representations shipped with the
//! library.
//!
//! # Architecture
//!
//! - **types**: vertex identity (`VertexId`, a dense index)
//! - **error**: structural error handling with `GraphError`
//! - **graph**: the `Graph` trait (vertex/edge counts, edge mutation, lazy
//!   neighbor enumeration)
//! - **adjacency**: `AdjacencyListGraph` (undirected) and `Digraph` (directed)
//!
//! Algorithms live in the `waygraph-traversal` crate; anything implementing
//! [`Graph`] gets them for free.
//!
//! # Example
//!
//! ```
//! use waygraph_core::{AdjacencyListGraph, Graph, GraphResult};
//!
//! fn example() -> GraphResult<()> {
//!     let mut g = AdjacencyListGraph::with_vertices(3);
//!     g.add_edge(0, 1);
//!     g.add_edge(1, 2);
//!     assert_eq!(g.vertex_count(), 3);
//!     assert!(g.is_adjacent(0, 1)?);
//!     assert!(!g.is_adjacent(0, 2)?);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod adjacency;
pub mod error;
pub mod graph;
pub mod types;

// Re-exports for convenience
pub use adjacency::{AdjacencyListGraph, Digraph};
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use types::VertexId;
