#![forbid(unsafe_code)]

use glam::DVec2;
use gravity_contact::prelude::{Individual, Population, Result};
pub use gravity_contact::weighted::rand01;
use rand::RngCore;

/// Installs a `fmt` subscriber honoring `RUST_LOG` (defaults to `info`).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// `count` individuals spread uniformly over `[0, extent.x) x [0, extent.y)`.
pub fn uniform_population(
    count: usize,
    extent: DVec2,
    rng: &mut impl RngCore,
) -> Result<Population<Individual<u32>>> {
    let members: Vec<Individual<u32>> = (0..count as u32)
        .map(|i| Individual::new(i, rand01(rng) * extent.x, rand01(rng) * extent.y))
        .collect();
    Population::new(members)
}

/// Individuals grouped around `centers`, each within `spread` of its center.
pub fn clustered_population(
    centers: &[DVec2],
    per_cluster: usize,
    spread: f64,
    rng: &mut impl RngCore,
) -> Result<Population<Individual<u32>>> {
    let mut members: Vec<Individual<u32>> = Vec::with_capacity(centers.len() * per_cluster);
    for center in centers {
        for _ in 0..per_cluster {
            let angle = rand01(rng) * std::f64::consts::TAU;
            let r = spread * rand01(rng).sqrt();
            let id = members.len() as u32;
            members.push(Individual::at(
                id,
                *center + DVec2::new(angle.cos(), angle.sin()) * r,
            ));
        }
    }
    Population::new(members)
}
