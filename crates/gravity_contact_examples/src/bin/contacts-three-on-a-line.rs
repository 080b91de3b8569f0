use gravity_contact::prelude::*;
use gravity_contact_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // C is 0.3 from B and 0.4 from A, outside the default 0.25 contact radius.
    let population = Population::<Individual>::new(vec![
        Individual::new("A", 0.0, 0.0),
        Individual::new("B", 0.1, 0.0),
        Individual::new("C", 0.4, 0.0),
    ])?;

    let model = GravityContactModel::try_new(&population, GravityConfig::default())?;

    for (member, total) in population.iter().zip(model.total_gravity()) {
        let links: Vec<String> = model
            .neighbors(&member.id)?
            .map(|(id, g)| format!("{id} (gravity {g:.1})"))
            .collect();
        println!("{}: total {total:.1} -> [{}]", member.id, links.join(", "));
    }

    let mut rng = StdRng::seed_from_u64(2025);
    let (source, target) = model.sample_contact(&mut rng)?;
    println!("sampled contact: {} -> {}", source.id, target.id);

    match model.sample_neighbor(&"C".to_string(), &mut rng) {
        Ok(n) => println!("C met {}", n.id),
        Err(err) => println!("C has nobody to meet: {err}"),
    }

    Ok(())
}
