//! Continuous-time virtual pet simulation.
//!
//! Models a pet whose hunger and happiness decay against wall-clock time,
//! with two decay scales: coarse whole-minute reconciliation for time spent
//! offline, and fine per-second decay while a live session ticks. Care
//! actions (feeding from a weighted meal table, playing), mini-game outcome
//! application, a day/night sleep window, and a cosmetic lawn-cleaning
//! mechanic round out the behavioral surface. Persistence and rendering live
//! in sibling crates; this one only computes.

/// Wall-clock helpers: sleep window, elapsed-time math.
pub mod clock;
/// Simulation configuration: all rates and thresholds in one place.
pub mod config;
/// Error types for the simulation core.
pub mod error;
/// Simulation events and the bounded event log.
pub mod event;
/// Weighted meal outcomes for feeding.
pub mod meal;
/// Mood classification and sprite frame sequencing.
pub mod mood;
/// The simulation orchestrator.
pub mod sim;
/// Pet identity and numeric state.
pub mod state;

pub use config::PetConfig;
pub use error::{PetError, PetResult};
pub use event::{EventLog, PetEvent, PetEventKind};
pub use meal::{Meal, MealTable};
pub use mood::{FrameCycle, FrameDescriptor, Mood};
pub use sim::PetSimulation;
pub use state::{PetIdentity, PetKind, PetState};
