//! `critter feed` — serve one meal.

use std::path::Path;

use colored::Colorize;

use super::{load_sim, open_store, persist};

pub fn run(dir: Option<&Path>) -> Result<(), String> {
    let store = open_store(dir)?;
    let mut sim = load_sim(&store)?;

    match sim.feed() {
        Some(meal) => {
            persist(&store, &sim)?;
            println!(
                "  {} devoured a {} {}",
                sim.identity().name.bold(),
                meal.to_string().green(),
                format!("(hunger {:.0}, happiness {:.0})", sim.state().hunger, sim.state().happiness)
                    .dimmed()
            );
        }
        None if sim.state().asleep => {
            persist(&store, &sim)?;
            println!("  {} is asleep. Let them rest.", sim.identity().name.bold());
        }
        None => {
            persist(&store, &sim)?;
            println!("  {} isn't hungry right now.", sim.identity().name.bold());
        }
    }
    Ok(())
}
