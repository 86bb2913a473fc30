//! Traversal benchmarks.

use criterion::{black_box, BenchmarkId, Criterion};

use waygraph_traversal::{bfs_visit, dfs_visit_stack, BfsIter};

use super::config;
use super::generators::random_graph;

pub fn bench_bfs_visit(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs_visit");
    for &n in config::GRAPH_SIZES {
        let g = random_graph(n, config::SPARSE_DEGREE);
        group.bench_with_input(BenchmarkId::new("sparse", n), &n, |b, _| {
            b.iter(|| {
                let mut count = 0usize;
                bfs_visit(black_box(&g), black_box(0), |_| count += 1).unwrap();
                count
            })
        });
    }
    group.finish();
}

pub fn bench_dfs_visit_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs_visit_stack");
    for &n in config::GRAPH_SIZES {
        let g = random_graph(n, config::SPARSE_DEGREE);
        group.bench_with_input(BenchmarkId::new("sparse", n), &n, |b, _| {
            b.iter(|| {
                let mut count = 0usize;
                dfs_visit_stack(black_box(&g), black_box(0), |_| count += 1).unwrap();
                count
            })
        });
    }
    group.finish();
}

pub fn bench_lazy_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_bfs_iter");
    for &n in config::GRAPH_SIZES {
        let g = random_graph(n, config::DENSE_DEGREE);
        group.bench_with_input(BenchmarkId::new("dense", n), &n, |b, _| {
            b.iter(|| BfsIter::new(black_box(&g), black_box(0)).unwrap().count())
        });
    }
    group.finish();
}
