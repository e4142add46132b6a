//! `critter watch` — live interactive care session.

use std::path::Path;

use super::{load_sim, open_store};
use crate::tui;

pub fn run(dir: Option<&Path>) -> Result<(), String> {
    let store = open_store(dir)?;
    let sim = load_sim(&store)?;
    tui::run(store, sim)
}
