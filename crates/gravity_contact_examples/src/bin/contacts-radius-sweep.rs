use glam::DVec2;
use gravity_contact::prelude::*;
use gravity_contact_examples::{init_tracing, uniform_population};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(7);
    let population = uniform_population(2000, DVec2::new(10.0, 10.0), &mut rng)?;

    println!("radius | links | isolated | mean neighbors | max neighbors");
    for radius in [0.05, 0.1, 0.25, 0.5] {
        let config = GravityConfig::new().with_max_distance(radius);
        let model = GravityContactModel::try_new(&population, config)?;
        let s = model.summary();
        println!(
            "{radius:>6.2} | {:>5} | {:>8} | {:>14.2} | {:>13}",
            s.links,
            s.isolated,
            s.mean_neighbors(),
            s.max_neighbors
        );
    }

    Ok(())
}
