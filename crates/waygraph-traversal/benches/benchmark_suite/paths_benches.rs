//! Path-analysis benchmarks.

use criterion::{black_box, BenchmarkId, Criterion};

use waygraph_traversal::{cut_vertices, shortest_path};

use super::config;
use super::generators::{chain, random_graph};

pub fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for &n in config::GRAPH_SIZES {
        let g = random_graph(n, config::SPARSE_DEGREE);
        group.bench_with_input(BenchmarkId::new("sparse", n), &n, |b, _| {
            b.iter(|| shortest_path(black_box(&g), black_box(0), black_box(n - 1), None).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("sparse_excluded", n), &n, |b, _| {
            b.iter(|| {
                shortest_path(black_box(&g), black_box(0), black_box(n - 1), Some(n / 2)).unwrap()
            })
        });
    }
    group.finish();
}

pub fn bench_cut_vertices(c: &mut Criterion) {
    let mut group = c.benchmark_group("cut_vertices");
    // Chains are the worst case: every interior vertex triggers a re-query.
    for &n in &[100usize, 1_000] {
        let g = chain(n);
        group.bench_with_input(BenchmarkId::new("chain", n), &n, |b, _| {
            b.iter(|| cut_vertices(black_box(&g), black_box(0), black_box(n - 1)).unwrap())
        });
    }
    group.finish();
}
