//! Benchmarks for graph loading and cycle detection
//!
//! Checks that load, in-degree scans and cycle detection stay linear on
//! long dependency chains and dense layered graphs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphscope::graph::Graph;

/// Edge lines for a chain `n0 -> n1 -> ... -> n(len)`, optionally closed
fn chain_lines(len: usize, closed: bool) -> Vec<String> {
    let mut lines: Vec<String> = (0..len).map(|i| format!("n{} n{}", i, i + 1)).collect();
    if closed {
        lines.push(format!("n{} n0", len));
    }
    lines
}

/// Edge lines for `layers` layers of `width` vertices, each vertex linked
/// to every vertex of the next layer
fn layered_lines(layers: usize, width: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(layers * width * width);
    for layer in 0..layers.saturating_sub(1) {
        for a in 0..width {
            for b in 0..width {
                lines.push(format!("l{}v{} l{}v{}", layer, a, layer + 1, b));
            }
        }
    }
    lines
}

/// Benchmark loading edge lines into a graph
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for size in [1_000, 10_000, 100_000].iter() {
        let lines = chain_lines(*size, false);

        group.bench_with_input(BenchmarkId::new("chain", size), &lines, |b, lines| {
            b.iter(|| black_box(Graph::load(Some("D"), lines)));
        });
    }

    group.finish();
}

/// Benchmark cycle detection on acyclic and cyclic chains
fn bench_detect_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_cycle");

    for size in [1_000, 10_000, 100_000].iter() {
        let acyclic = Graph::load(Some("D"), chain_lines(*size, false));
        let cyclic = Graph::load(Some("D"), chain_lines(*size, true));

        group.bench_with_input(BenchmarkId::new("acyclic_chain", size), &acyclic, |b, g| {
            b.iter(|| black_box(g.detect_cycle()));
        });
        group.bench_with_input(BenchmarkId::new("cyclic_chain", size), &cyclic, |b, g| {
            b.iter(|| black_box(g.detect_cycle()));
        });
    }

    for layers in [10, 50].iter() {
        let graph = Graph::load(Some("D"), layered_lines(*layers, 20));

        group.bench_with_input(BenchmarkId::new("layered_w20", layers), &graph, |b, g| {
            b.iter(|| black_box(g.detect_cycle()));
        });
    }

    group.finish();
}

/// Benchmark the full-scan degree query
fn bench_degree(c: &mut Criterion) {
    let mut group = c.benchmark_group("degree");

    for layers in [10, 50].iter() {
        let graph = Graph::load(Some("D"), layered_lines(*layers, 20));

        group.bench_with_input(BenchmarkId::new("layered_w20", layers), &graph, |b, g| {
            b.iter(|| black_box(g.degree("l5v5")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_detect_cycle, bench_degree);
criterion_main!(benches);
