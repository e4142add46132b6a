//! Subcommand implementations.

pub mod choose;
pub mod clean;
pub mod feed;
pub mod play;
pub mod reset;
pub mod status;
pub mod watch;

use std::path::Path;

use critter_core::clock::now_ms;
use critter_core::{PetConfig, PetSimulation};
use critter_store::FileStore;

/// Open the save store at `dir`, or the platform default.
pub fn open_store(dir: Option<&Path>) -> Result<FileStore, String> {
    match dir {
        Some(d) => FileStore::open(d),
        None => FileStore::open_default(),
    }
    .map_err(|e| e.to_string())
}

/// Load the persisted pet and reconcile it against the current time.
///
/// Errors with a hint when no pet has been adopted yet.
pub fn load_sim(store: &FileStore) -> Result<PetSimulation, String> {
    let now = now_ms();
    let (identity, state) = critter_store::load_pet(store, now)
        .map_err(|e| e.to_string())?
        .ok_or("no pet yet. Adopt one with: critter choose <kind> <name>")?;
    Ok(PetSimulation::resume(
        identity,
        Some(state),
        PetConfig::default().with_seed(now as u64),
        now,
    ))
}

/// Persist the simulation's current identity and state.
pub fn persist(store: &FileStore, sim: &PetSimulation) -> Result<(), String> {
    critter_store::save_pet(store, sim.identity(), sim.state()).map_err(|e| e.to_string())
}
