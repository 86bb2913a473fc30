//! Error types for graph operations.
//!
//! Structural misuse (a vertex index outside the graph) fails fast through
//! [`GraphError`]. Reachability outcomes (no path between two vertices) are
//! ordinary data and travel through the normal result channel as empty
//! collections or tagged outcome enums, never as errors.

use thiserror::Error;

use crate::types::VertexId;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex argument was outside `[0, vertex_count)`.
    ///
    /// Out-of-range indices are never clamped or ignored; every public entry
    /// point validates its vertex arguments before doing any work.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: VertexId,
        /// The graph's vertex count at the time of the call.
        vertex_count: usize,
    },
}
