//! Criterion micro-benchmarks for arena allocation and reset.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use starfield_arena::{Alignment, Arena, ArenaConfig, SystemAllocator};

/// Benchmark: 10K small allocations from a fresh arena.
fn bench_arena_alloc_small_10k(c: &mut Criterion) {
    c.bench_function("arena_alloc_small_10k", |b| {
        b.iter_batched(
            || Arena::identity(Alignment::Eight),
            |arena| {
                for i in 0..10_000usize {
                    black_box(arena.alloc(16 + i % 48));
                }
                arena
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: alternating small and oversized allocations, with and
/// without retaining under-filled blocks.
fn bench_arena_alloc_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("arena_alloc_mixed");
    for retain in [false, true] {
        let name = if retain { "retain" } else { "replace" };
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let config = ArenaConfig {
                        retain_underfilled: retain,
                        ..ArenaConfig::default()
                    };
                    Arena::with_config(config, SystemAllocator).unwrap()
                },
                |arena| {
                    for i in 0..1_000usize {
                        let size = if i % 50 == 0 { 8192 } else { 24 };
                        black_box(arena.alloc(size));
                    }
                    arena
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark: fill several blocks, then clear.
fn bench_arena_clear(c: &mut Criterion) {
    let mut arena = Arena::identity(Alignment::Eight);
    c.bench_function("arena_fill_clear", |b| {
        b.iter(|| {
            for _ in 0..64 {
                black_box(arena.alloc_bytes(1024));
            }
            arena.clear();
        });
    });
}

criterion_group!(
    benches,
    bench_arena_alloc_small_10k,
    bench_arena_alloc_mixed,
    bench_arena_clear
);
criterion_main!(benches);
