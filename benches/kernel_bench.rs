// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use waqt_core::prelude::*;

fn chittagong() -> Coordinates {
    Coordinates::new(22.3569, 91.7832)
}

fn north_america_params() -> Parameters {
    Configuration::new()
        .method(Method::NorthAmerica)
        .madhab(Madhab::Hanafi)
        .build()
        .unwrap()
}

fn bench_cold_cache(c: &mut Criterion) {
    let coordinates = chittagong();
    let params = north_america_params();

    c.bench_function("compute_prayer_times/cold_cache", |b| {
        b.iter(|| {
            let mut engine = PrayerEngine::new();
            black_box(engine.compute(coordinates, &params, black_box(1_547_424_000_000.0)).unwrap());
        });
    });
}

fn bench_warm_cache(c: &mut Criterion) {
    let coordinates = chittagong();
    let params = north_america_params();
    let mut engine = PrayerEngine::new();
    // Prime the engine's caches for this location/date before timing subsequent calls.
    engine.compute(coordinates, &params, 1_547_424_000_000.0).unwrap();

    c.bench_function("compute_prayer_times/warm_cache", |b| {
        b.iter(|| {
            black_box(engine.compute(coordinates, &params, black_box(1_547_424_000_000.0)).unwrap());
        });
    });
}

fn bench_consecutive_days(c: &mut Criterion) {
    let coordinates = chittagong();
    let params = north_america_params();

    let mut group = c.benchmark_group("compute_prayer_times/consecutive_days");
    for days in [1_u32, 7, 30] {
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            b.iter(|| {
                let mut engine = PrayerEngine::new();
                for day in 0..days {
                    let date_ms = 1_547_424_000_000.0 + f64::from(day) * 86_400_000.0;
                    black_box(engine.compute(coordinates, &params, date_ms).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_qibla(c: &mut Criterion) {
    let coordinates = chittagong();

    c.bench_function("compute_qibla", |b| {
        b.iter(|| black_box(compute_qibla(black_box(coordinates))));
    });
}

criterion_group!(benches, bench_cold_cache, bench_warm_cache, bench_consecutive_days, bench_qibla);
criterion_main!(benches);
