mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gravity_contact::prelude::{GravityConfig, GravityContactModel, LinearScanIndex};

fn contact_build_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("contact/build");

    for &n in &[256usize, 1024, 4096, 16384] {
        let population = common::unit_square_population(n, 0xC0FFEE ^ n as u64);
        // Keep the expected neighbor count roughly constant as density grows.
        let config = GravityConfig::new().with_max_distance((16.0 / n as f64).sqrt());
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::new("kd_tree", n), &n, |b, _| {
            b.iter(|| {
                let model = GravityContactModel::try_new(&population, config).unwrap();
                black_box(model.summary().links);
            });
        });

        if n <= 4096 {
            group.bench_with_input(BenchmarkId::new("linear_scan", n), &n, |b, _| {
                b.iter(|| {
                    let model = GravityContactModel::build_with_index::<LinearScanIndex<usize>>(
                        &population,
                        config,
                    )
                    .unwrap();
                    black_box(model.summary().links);
                });
            });
        }
    }

    group.finish();
}

fn contact_default_radius_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("contact/build_default_radius");

    for &n in &[256usize, 1024, 2048] {
        let population = common::unit_square_population(n, 0xFACE ^ n as u64);
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let model =
                    GravityContactModel::try_new(&population, GravityConfig::default()).unwrap();
                black_box(model.total_gravity().len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = contact_build_benches, contact_default_radius_benches
}
criterion_main!(benches);
