use std::collections::HashSet;

use glam::DVec2;
use gravity_contact::prelude::*;
use gravity_contact_examples::{clustered_population, init_tracing, rand01};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

// Chance that a sampled contact with an infected individual transmits.
const TRANSMISSION: f64 = 0.3;
const CONTACTS_PER_STEP: usize = 200;
const STEPS: usize = 40;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(1234);
    let centers = [
        DVec2::new(0.0, 0.0),
        DVec2::new(0.6, 0.1),
        DVec2::new(0.3, 0.8),
    ];
    let population = clustered_population(&centers, 300, 0.2, &mut rng)?;
    let config = GravityConfig::new()
        .with_max_distance(0.08)
        .with_exponent(-2.0);
    let model = GravityContactModel::try_new(&population, config)?;

    let patient_zero = model.sample_individual(&mut rng)?;
    let mut infected: HashSet<u32> = HashSet::from([patient_zero.id]);
    info!("Patient zero: {}.", patient_zero.id);

    for step in 1..=STEPS {
        let mut newly = Vec::new();
        for _ in 0..CONTACTS_PER_STEP {
            let (a, b) = model.sample_contact(&mut rng)?;
            let (a_inf, b_inf) = (infected.contains(&a.id), infected.contains(&b.id));
            if a_inf != b_inf && rand01(&mut rng) < TRANSMISSION {
                newly.push(if a_inf { b.id } else { a.id });
            }
        }
        infected.extend(newly);
        println!("step {step:>2}: {:>4} infected", infected.len());
    }

    let share = infected.len() as f64 / population.len() as f64;
    println!("final attack rate: {:.1}%", share * 100.0);

    Ok(())
}
