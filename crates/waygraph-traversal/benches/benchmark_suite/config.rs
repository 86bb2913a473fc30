//! Shared benchmark configuration.

/// Vertex counts to sweep for traversal benchmarks.
pub const GRAPH_SIZES: &[usize] = &[100, 1_000, 10_000];

/// Average neighbors per vertex for the random-ish graphs.
pub const SPARSE_DEGREE: usize = 2;
pub const DENSE_DEGREE: usize = 8;
