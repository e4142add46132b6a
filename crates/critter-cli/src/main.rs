//! CLI frontend for the critter virtual pet.

mod commands;
mod minigame;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "critter",
    about = "critter — a terminal virtual pet",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Which mini-game to launch from `play`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum GameChoice {
    /// Hop over a scrolling obstacle.
    Jump,
    /// Flap through pipe gaps.
    Pipes,
}

#[derive(Subcommand)]
enum Commands {
    /// Adopt a new pet
    Choose {
        /// Pet kind: cat, dog, or dragon
        kind: String,

        /// The pet's name
        name: String,

        /// Save directory (default: platform data dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Show the pet's current stats and mood
    Status {
        /// Save directory (default: platform data dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Feed the pet one meal
    Feed {
        /// Save directory (default: platform data dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Play with the pet, optionally through a mini-game
    Play {
        /// Launch an arcade mini-game and apply its score
        #[arg(short, long, value_enum)]
        game: Option<GameChoice>,

        /// Save directory (default: platform data dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Clean up after the pet
    Clean {
        /// Save directory (default: platform data dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Watch and care for the pet live (interactive)
    Watch {
        /// Save directory (default: platform data dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Delete the pet and its save data
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,

        /// Save directory (default: platform data dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Choose { kind, name, dir } => commands::choose::run(dir.as_deref(), &kind, &name),
        Commands::Status { dir } => commands::status::run(dir.as_deref()),
        Commands::Feed { dir } => commands::feed::run(dir.as_deref()),
        Commands::Play { game, dir } => commands::play::run(dir.as_deref(), game),
        Commands::Clean { dir } => commands::clean::run(dir.as_deref()),
        Commands::Watch { dir } => commands::watch::run(dir.as_deref()),
        Commands::Reset { force, dir } => commands::reset::run(dir.as_deref(), force),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
