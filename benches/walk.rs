//! Benchmarks for walking and rendering large module graphs
//!
//! Synthetic graphs approximate a big Go monorepo: many modules, several
//! versions each, every module depending on a handful of lower ones.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use modscope::export::{export_to_string, ExportFormat};
use modscope::graph::{walk, EdgeIndex};
use modscope::parser::{ModuleAndVersion, ModuleName, Relationship};

/// Create `modules` modules with `versions` versions each. Module `i` depends
/// on up to `fan_out` modules below it, so `m0` is depended on by everything.
fn create_relationships(modules: usize, versions: usize, fan_out: usize) -> Vec<Relationship> {
    let mut relationships = Vec::with_capacity(modules * versions * fan_out);

    for i in 1..modules {
        for v in 0..versions {
            let downstream = ModuleAndVersion::new(format!("m{}", i), format!("v0.{}.0", v));
            for step in 1..=fan_out.min(i) {
                let upstream = ModuleAndVersion::new(
                    format!("m{}", i - step),
                    format!("v0.{}.0", (v + step) % versions),
                );
                relationships.push(Relationship::new(downstream.clone(), upstream));
            }
        }
    }

    relationships
}

/// Benchmark index construction
fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [100, 500, 1000, 2000].iter() {
        let relationships = create_relationships(*size, 3, 4);

        group.bench_with_input(BenchmarkId::new("modules", size), size, |b, _| {
            b.iter(|| black_box(EdgeIndex::build(&relationships)));
        });
    }

    group.finish();
}

/// Benchmark the reachability walk from the most depended-on module
fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");
    let focus = ModuleName::from("m0");

    for size in [100, 500, 1000, 2000, 5000].iter() {
        let index = EdgeIndex::build(&create_relationships(*size, 3, 4));

        group.bench_with_input(BenchmarkId::new("modules", size), size, |b, _| {
            b.iter(|| black_box(walk(&focus, &index)));
        });
    }

    group.finish();
}

/// Benchmark DOT rendering of a walked graph
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_dot");
    let focus = ModuleName::from("m0");

    for size in [100, 500, 1000, 2000].iter() {
        let graph = walk(&focus, &EdgeIndex::build(&create_relationships(*size, 3, 4)));

        group.bench_with_input(BenchmarkId::new("modules", size), size, |b, _| {
            b.iter(|| black_box(export_to_string(ExportFormat::Dot, &graph)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_index, bench_walk, bench_render);
criterion_main!(benches);
