//! Criterion benchmarks for polygon tiling and cell-set assembly.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use terrane_bench::district;
use terrane_grid::{cells_to_polygon, tile_polygon, Geohash, TileMode};

/// Benchmark: tile a ~4 km district at precision 6 and 7, both modes.
fn bench_tile_district(c: &mut Criterion) {
    let region = district(32, 0.02, 42);
    let mut group = c.benchmark_group("tile_district");
    for precision in [6, 7] {
        for mode in [TileMode::Interior, TileMode::Covering] {
            group.bench_function(format!("{mode}_p{precision}"), |b| {
                b.iter(|| {
                    let cells = tile_polygon(&Geohash, &region, precision, mode).unwrap();
                    black_box(cells);
                });
            });
        }
    }
    group.finish();
}

/// Benchmark: merge a precision-7 covering back into a polygon.
fn bench_assemble_district(c: &mut Criterion) {
    let region = district(32, 0.02, 42);
    let cells = tile_polygon(&Geohash, &region, 7, TileMode::Covering).unwrap();

    c.bench_function("assemble_district_p7", |b| {
        b.iter(|| {
            let merged = cells_to_polygon(&Geohash, &cells).unwrap();
            black_box(merged);
        });
    });
}

criterion_group!(benches, bench_tile_district, bench_assemble_district);
criterion_main!(benches);
