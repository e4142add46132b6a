//! `critter status` — reconcile, persist, and print the pet's stats.

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use critter_core::Mood;

use super::{load_sim, open_store, persist};

pub fn run(dir: Option<&Path>) -> Result<(), String> {
    let store = open_store(dir)?;
    let sim = load_sim(&store)?;
    persist(&store, &sim)?;

    let state = sim.state();
    let mood = sim.mood();

    println!(
        "  {} the {} {}",
        sim.identity().name.bold(),
        sim.identity().kind,
        format!("({} days old)", state.age_days).dimmed()
    );
    println!("  {}", mood.status_line(state));
    println!();

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["stat", "value"]);
    table.add_row(vec!["hunger".to_string(), format!("{:.0} / 100", state.hunger)]);
    table.add_row(vec![
        "happiness".to_string(),
        format!("{:.0} / 100", state.happiness),
    ]);
    table.add_row(vec!["mood".to_string(), mood.to_string()]);
    table.add_row(vec![
        "droppings".to_string(),
        state.droppings.to_string(),
    ]);
    println!("{table}");

    if mood == Mood::Sad {
        println!();
        println!("  {}", "Your pet needs some care!".yellow());
    }
    Ok(())
}
