//! `critter clean` — tidy the lawn.

use std::path::Path;

use colored::Colorize;

use super::{load_sim, open_store, persist};

pub fn run(dir: Option<&Path>) -> Result<(), String> {
    let store = open_store(dir)?;
    let mut sim = load_sim(&store)?;

    let cleaned = sim.clean_lawn();
    persist(&store, &sim)?;

    if cleaned == 0 {
        println!("  The lawn is already spotless.");
    } else {
        println!(
            "  Cleaned {} dropping{} {}",
            cleaned,
            if cleaned == 1 { "" } else { "s" },
            format!("(happiness {:.0})", sim.state().happiness).dimmed()
        );
    }
    Ok(())
}
