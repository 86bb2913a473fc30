//! Benchmark suite for the waygraph traversal engine.
//!
//! Covers the hot paths:
//! - eager BFS and stack DFS visits
//! - lazy iterator traversal
//! - BFS shortest path with and without exclusion
//! - cut-vertex analysis
//!
//! Run with `cargo bench --package waygraph-traversal`.

mod config;
mod generators;
mod paths_benches;
mod traversal_benches;

use criterion::{criterion_group, criterion_main};

criterion_group!(
    benches,
    traversal_benches::bench_bfs_visit,
    traversal_benches::bench_dfs_visit_stack,
    traversal_benches::bench_lazy_iteration,
    paths_benches::bench_shortest_path,
    paths_benches::bench_cut_vertices,
);
criterion_main!(benches);
