#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use glam::DVec2;
use gravity_contact::prelude::{Individual, Population};
use gravity_contact::weighted::rand01;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Uniform points in the unit square.
pub fn unit_square_points(count: usize, seed: u64) -> Vec<DVec2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| DVec2::new(rand01(&mut rng), rand01(&mut rng)))
        .collect()
}

pub fn unit_square_population(count: usize, seed: u64) -> Population<Individual<u32>> {
    let members: Vec<Individual<u32>> = unit_square_points(count, seed)
        .into_iter()
        .enumerate()
        .map(|(i, p)| Individual::at(i as u32, p))
        .collect();
    Population::new(members).expect("generated ids are unique")
}
