//! `critter reset` — delete the pet and its save data.

use std::io::{self, BufRead, Write};
use std::path::Path;

use super::open_store;

pub fn run(dir: Option<&Path>, force: bool) -> Result<(), String> {
    let store = open_store(dir)?;

    if !force {
        print!("Really say goodbye to your pet? [y/N] ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|e| e.to_string())?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Kept your pet.");
            return Ok(());
        }
    }

    critter_store::erase(&store).map_err(|e| e.to_string())?;
    println!("Save data removed.");
    Ok(())
}
