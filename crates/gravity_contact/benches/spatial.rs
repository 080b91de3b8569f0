mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gravity_contact::spatial::{KdTree, LinearScanIndex, SpatialIndex};

const SIZES: [usize; 4] = [256, 1024, 4096, 16384];
const RADII: [f64; 3] = [0.01, 0.05, 0.25];

fn tagged(count: usize, seed: u64) -> Vec<(glam::DVec2, usize)> {
    common::unit_square_points(count, seed)
        .into_iter()
        .enumerate()
        .map(|(i, p)| (p, i))
        .collect()
}

fn spatial_build_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial/build");

    for &n in &SIZES {
        let points = tagged(n, 0xA11CE ^ n as u64);
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::new("kd_tree", n), &n, |b, _| {
            b.iter(|| {
                let tree = KdTree::new(points.clone());
                black_box(tree.len());
            });
        });
    }

    group.finish();
}

fn spatial_query_benches(c: &mut Criterion) {
    let n = 4096usize;
    let points = tagged(n, 0xBEEF);
    let queries: Vec<_> = points.iter().step_by(16).map(|(p, _)| *p).collect();
    let tree = KdTree::new(points.clone());
    let scan = LinearScanIndex::new(points);

    for &radius in &RADII {
        let mut group = c.benchmark_group(format!("spatial/query/radius_{radius:.2}"));
        group.throughput(common::elements_throughput(queries.len()));

        group.bench_function("kd_tree", |b| {
            b.iter(|| {
                let mut hits = 0;
                for q in &queries {
                    hits += tree.nearest(*q, n, radius).len();
                }
                black_box(hits);
            });
        });

        group.bench_function("linear_scan", |b| {
            b.iter(|| {
                let mut hits = 0;
                for q in &queries {
                    hits += scan.nearest(*q, n, radius).len();
                }
                black_box(hits);
            });
        });

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = spatial_build_benches, spatial_query_benches
}
criterion_main!(benches);
