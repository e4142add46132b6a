//! The gravity-jump mini-game.
//!
//! A runner at a fixed x position hops over a single obstacle that scrolls
//! in from the right, slightly faster after each clear. One frame =
//! one [`JumpGame::step`]; all units are abstract field cells, the renderer
//! scales them however it likes.

use crate::outcome::{GamePhase, MiniGameOutcome};

/// Playfield width in cells.
pub const FIELD_WIDTH: f64 = 80.0;

/// Runner's fixed x position.
pub const RUNNER_X: f64 = 10.0;

/// Obstacle width and height in cells.
pub const OBSTACLE_SIZE: f64 = 3.0;

const GRAVITY: f64 = 0.35;
const JUMP_VELOCITY: f64 = 2.6;
const BASE_SPEED: f64 = 0.9;
const SPEED_RAMP: f64 = 0.06;
const MAX_SPEED: f64 = 2.4;

/// State of one gravity-jump session.
#[derive(Debug, Clone)]
pub struct JumpGame {
    /// Runner's height above the ground (0 = on the ground).
    altitude: f64,
    velocity: f64,
    obstacle_x: f64,
    obstacle_cleared: bool,
    speed: f64,
    score: u32,
    phase: GamePhase,
    stopped: bool,
}

impl Default for JumpGame {
    fn default() -> Self {
        Self::new()
    }
}

impl JumpGame {
    /// A fresh session, waiting for the first jump.
    pub fn new() -> Self {
        Self {
            altitude: 0.0,
            velocity: 0.0,
            obstacle_x: FIELD_WIDTH,
            obstacle_cleared: false,
            speed: BASE_SPEED,
            score: 0,
            phase: GamePhase::Ready,
            stopped: false,
        }
    }

    /// Jump. Starts the session from `Ready`; while playing, only a grounded
    /// runner can jump again.
    pub fn jump(&mut self) {
        match self.phase {
            GamePhase::Ready => {
                self.phase = GamePhase::Playing;
                self.velocity = JUMP_VELOCITY;
            }
            GamePhase::Playing if self.altitude == 0.0 => {
                self.velocity = JUMP_VELOCITY;
            }
            _ => {}
        }
    }

    /// Quit the session early. Distinguished from a crash: no bonus.
    pub fn stop(&mut self) {
        if self.phase != GamePhase::Over {
            self.phase = GamePhase::Over;
            self.stopped = true;
        }
    }

    /// Advance one frame. Returns `false` once the session is over.
    pub fn step(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return self.phase == GamePhase::Ready;
        }

        // Runner physics
        self.velocity -= GRAVITY;
        self.altitude = (self.altitude + self.velocity).max(0.0);
        if self.altitude == 0.0 && self.velocity < 0.0 {
            self.velocity = 0.0;
        }

        // Obstacle scroll
        self.obstacle_x -= self.speed;

        if self.collides() {
            self.phase = GamePhase::Over;
            return false;
        }

        // Score once the obstacle is fully behind the runner
        if !self.obstacle_cleared && self.obstacle_x + OBSTACLE_SIZE < RUNNER_X {
            self.obstacle_cleared = true;
            self.score += 1;
            self.speed = (self.speed + SPEED_RAMP).min(MAX_SPEED);
        }

        // Respawn off the left edge
        if self.obstacle_x + OBSTACLE_SIZE < 0.0 {
            self.obstacle_x = FIELD_WIDTH;
            self.obstacle_cleared = false;
        }

        true
    }

    fn collides(&self) -> bool {
        let overlap_x =
            self.obstacle_x < RUNNER_X + 1.0 && self.obstacle_x + OBSTACLE_SIZE > RUNNER_X;
        overlap_x && self.altitude < OBSTACLE_SIZE
    }

    /// Runner altitude above the ground.
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Obstacle's left edge x position.
    pub fn obstacle_x(&self) -> f64 {
        self.obstacle_x
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current session phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether the session has ended.
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Final report for the simulation.
    pub fn outcome(&self) -> MiniGameOutcome {
        MiniGameOutcome {
            final_score: self.score,
            stopped: self.stopped,
        }
    }
}
