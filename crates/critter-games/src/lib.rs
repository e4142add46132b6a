//! Arcade mini-game physics for critter.
//!
//! Two small per-frame state machines — a gravity-jump runner and a
//! flappy-pipes clone — with no IO and no timing of their own. A front end
//! drives `step()` at its frame cadence, forwards input, and reads back a
//! [`MiniGameOutcome`] when the session ends. Only that outcome crosses
//! into the pet simulation.

/// The gravity-jump mini-game.
pub mod jump;
/// Session outcome and lifecycle types.
pub mod outcome;
/// The flappy-pipes mini-game.
pub mod pipes;

pub use jump::JumpGame;
pub use outcome::{GamePhase, MiniGameOutcome};
pub use pipes::PipesGame;
