//! `critter play` — direct play, optionally followed by a mini-game.

use std::path::Path;

use colored::Colorize;

use crate::GameChoice;
use crate::minigame;

use super::{load_sim, open_store, persist};

pub fn run(dir: Option<&Path>, game: Option<GameChoice>) -> Result<(), String> {
    let store = open_store(dir)?;
    let mut sim = load_sim(&store)?;

    if !sim.play() {
        persist(&store, &sim)?;
        println!("  {} is asleep. Try again after 7:00.", sim.identity().name.bold());
        return Ok(());
    }

    if let Some(choice) = game {
        let outcome = minigame::run(choice)?;
        let bonus = sim.apply_minigame_outcome(outcome.final_score, outcome.stopped);
        if outcome.stopped {
            println!(
                "  Stopped early at {} points. {}",
                outcome.final_score,
                "No bonus this time.".dimmed()
            );
        } else {
            println!(
                "  Game over at {} points: {} cheers {}!",
                outcome.final_score,
                format!("+{bonus:.0}").green().bold(),
                sim.identity().name.bold()
            );
        }
    } else {
        println!(
            "  {} played with you {}",
            sim.identity().name.bold(),
            format!("(happiness {:.0})", sim.state().happiness).dimmed()
        );
    }

    persist(&store, &sim)?;
    Ok(())
}
