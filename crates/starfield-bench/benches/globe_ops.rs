//! Criterion benchmarks for globe tree construction and search.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use starfield_arena::{Alignment, Arena};
use starfield_bench::{reference_catalog, reference_queries, stress_catalog};
use starfield_core::{Position, Section};
use starfield_globe::GlobeTree;

/// Benchmark: build a tree over the 10K reference catalog.
fn bench_build_reference(c: &mut Criterion) {
    let catalog = reference_catalog(42);
    c.bench_function("globe_build_10k", |b| {
        b.iter(|| {
            let arena = Arena::identity(Alignment::Eight);
            let tree = GlobeTree::new_root(&arena, &catalog);
            black_box(tree.size());
        });
    });
}

/// Benchmark: section searches of increasing width over 100K objects.
fn bench_search_stress(c: &mut Criterion) {
    let catalog = stress_catalog(42);
    let arena = Arena::identity(Alignment::Eight);
    let tree = GlobeTree::new_root(&arena, &catalog);
    let mut scratch = Arena::identity(Alignment::Eight);

    let mut group = c.benchmark_group("globe_search_100k");
    for (name, query) in reference_queries() {
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(tree.search(&scratch, &query).len());
                scratch.clear();
            });
        });
    }
    group.bench_function("full_sky", |b| {
        b.iter(|| {
            black_box(tree.search(&scratch, &Section::FULL_SKY).len());
            scratch.clear();
        });
    });
    group.finish();
}

/// Benchmark: point lookups over 100K objects.
fn bench_search_point(c: &mut Criterion) {
    let catalog = stress_catalog(7);
    let arena = Arena::identity(Alignment::Eight);
    let tree = GlobeTree::new_root(&arena, &catalog);
    let mut scratch = Arena::identity(Alignment::Eight);

    c.bench_function("globe_search_point_100k", |b| {
        let mut ra = 0.0;
        b.iter(|| {
            ra = (ra + 7.3) % 360.0;
            black_box(tree.search_point(&scratch, Position::new(ra, 12.5)).len());
            scratch.clear();
        });
    });
}

criterion_group!(
    benches,
    bench_build_reference,
    bench_search_stress,
    bench_search_point
);
criterion_main!(benches);
