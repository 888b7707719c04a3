// crates/geotz-core/benches/benchmarks.rs

use criterion::{criterion_group, criterion_main, Criterion};
use geotz_core::{
    Point, TimeZoneResolver, Zone, ZoneStore, COARSE_RESOLUTION_DEG, FINE_RESOLUTION_DEG,
};
use std::hint::black_box;

fn square_zone(lat0: f32, lon0: f32, size: f32, id: &str) -> Zone {
    let ring = vec![
        Point {
            lat: lat0,
            lon: lon0,
        },
        Point {
            lat: lat0,
            lon: lon0 + size,
        },
        Point {
            lat: lat0 + size,
            lon: lon0 + size,
        },
        Point {
            lat: lat0 + size,
            lon: lon0,
        },
    ];
    Zone::new(
        vec![ring],
        vec![
            ("TimezoneIdPrefix".into(), "Bench/".into()),
            ("TimezoneId".into(), id.into()),
        ],
    )
}

/// A 10x10 grid of one-degree zones covering lat 40..50, lon 0..10.
fn grid_store(resolution: f32) -> ZoneStore {
    let mut zones = Vec::with_capacity(100);
    for row in 0..10 {
        for col in 0..10 {
            zones.push(square_zone(
                40.0 + row as f32,
                col as f32,
                1.0,
                &format!("Cell{}_{}", row, col),
            ));
        }
    }
    ZoneStore::new(resolution, zones)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let resolver = TimeZoneResolver::from_sources(
        grid_store(COARSE_RESOLUTION_DEG),
        grid_store(FINE_RESOLUTION_DEG),
    );

    // Interior point: coarse store answers alone.
    c.bench_function("lookup interior", |b| {
        b.iter(|| resolver.lookup(black_box(44.5), black_box(4.5)))
    });

    // Point 0.004 degrees from a cell edge: every query escalates.
    c.bench_function("lookup near boundary", |b| {
        b.iter(|| resolver.lookup(black_box(44.5), black_box(4.004)))
    });

    // Point outside the grid: the full probe pattern runs and misses.
    c.bench_function("simple exhausted probes", |b| {
        b.iter(|| resolver.simple(black_box(20.0), black_box(-40.0)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
