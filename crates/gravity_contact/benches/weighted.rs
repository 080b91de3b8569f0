mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gravity_contact::prelude::{pick_weighted_index, GravityConfig, GravityContactModel};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn weighted_pick_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted/pick_index");

    for &n in &[8usize, 64, 256, 1024, 4096] {
        let weights: Vec<f64> = (0..n).map(|i| 0.25 + (i % 7) as f64 / 7.0).collect();
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
            b.iter(|| {
                let pick = pick_weighted_index(&weights, &mut rng);
                black_box(pick.ok());
            });
        });
    }

    group.finish();
}

fn weighted_model_sampling_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted/model");
    let n = 4096usize;
    let population = common::unit_square_population(n, 0xBADC0DE);
    let model = GravityContactModel::try_new(
        &population,
        GravityConfig::new().with_max_distance(0.05),
    )
    .unwrap();

    group.bench_function("sample_individual", |b| {
        let mut rng = StdRng::seed_from_u64(0x0);
        b.iter(|| {
            let picked = model.sample_individual(&mut rng);
            black_box(picked.is_ok());
        });
    });

    group.bench_function("sample_contact", |b| {
        let mut rng = StdRng::seed_from_u64(0x1);
        b.iter(|| {
            let contact = model.sample_contact(&mut rng);
            black_box(contact.is_ok());
        });
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = weighted_pick_benches, weighted_model_sampling_benches
}
criterion_main!(benches);
