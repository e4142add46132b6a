//! The only thing a mini-game reports back to the simulation.

/// How a mini-game session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniGameOutcome {
    /// Score at the end of the session.
    pub final_score: u32,
    /// True when the player quit instead of crashing; a stopped session
    /// earns no stat bonus.
    pub stopped: bool,
}

/// Shared session lifecycle for both games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first input.
    Ready,
    /// Physics running.
    Playing,
    /// Finished, by crash or manual stop.
    Over,
}
