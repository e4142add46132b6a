//! `critter choose` — adopt a new pet.

use std::path::Path;

use colored::Colorize;

use critter_core::clock::now_ms;
use critter_core::{PetConfig, PetIdentity, PetSimulation};

use super::{open_store, persist};

pub fn run(dir: Option<&Path>, kind: &str, name: &str) -> Result<(), String> {
    let store = open_store(dir)?;
    let now = now_ms();

    if critter_store::load_pet(&store, now)
        .map_err(|e| e.to_string())?
        .is_some()
    {
        return Err("you already have a pet. Run `critter reset` to start over".into());
    }

    let kind = kind.parse().map_err(|e: critter_core::PetError| e.to_string())?;
    let identity = PetIdentity::new(kind, name).map_err(|e| e.to_string())?;
    let sim = PetSimulation::adopt(identity, PetConfig::default(), now);
    persist(&store, &sim)?;

    println!(
        "  Adopted {} the {}! {}",
        sim.identity().name.bold(),
        sim.identity().kind,
        "Take good care of them.".dimmed()
    );
    Ok(())
}
