//! Criterion micro-benchmarks for incremental site opening.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use seep_bench::shuffled_sites;
use seep_grid::SiteGrid;

/// Benchmark: open every site of a 200x200 grid in random order.
fn bench_open_all_200(c: &mut Criterion) {
    let sites = shuffled_sites(200, 3);

    c.bench_function("open_all_200", |b| {
        b.iter(|| {
            let mut grid = SiteGrid::new(200).unwrap();
            for &site in &sites {
                grid.open(site).unwrap();
            }
            black_box(grid.percolates());
        });
    });
}

/// Benchmark: is_full() on all 40K sites of a half-open 200x200 grid.
fn bench_is_full_200(c: &mut Criterion) {
    let sites = shuffled_sites(200, 5);
    let mut grid = SiteGrid::new(200).unwrap();
    for &site in &sites[..sites.len() / 2] {
        grid.open(site).unwrap();
    }

    c.bench_function("is_full_200", |b| {
        b.iter(|| {
            for &site in &sites {
                black_box(grid.is_full(site).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_open_all_200, bench_is_full_200);
criterion_main!(benches);
