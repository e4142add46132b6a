//! Pet identity and numeric state.
//!
//! Hunger and happiness are clamped to `0.0..=100.0` after every mutation;
//! callers never see an out-of-range value. Hunger counts upward toward
//! starving (0 = fully fed), happiness counts downward toward miserable
//! (100 = delighted).

use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::PetError;

/// Upper bound for hunger and happiness.
pub const STAT_MAX: f64 = 100.0;

/// The kinds of pet a player can adopt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetKind {
    /// A cat.
    Cat,
    /// A dog.
    Dog,
    /// A dragon.
    Dragon,
}

impl std::fmt::Display for PetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cat => write!(f, "cat"),
            Self::Dog => write!(f, "dog"),
            Self::Dragon => write!(f, "dragon"),
        }
    }
}

impl std::str::FromStr for PetKind {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cat" => Ok(Self::Cat),
            "dog" => Ok(Self::Dog),
            "dragon" => Ok(Self::Dragon),
            other => Err(PetError::UnknownKind(other.to_string())),
        }
    }
}

/// Who the pet is: chosen once at adoption, never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetIdentity {
    /// The pet's kind.
    pub kind: PetKind,
    /// The pet's given name.
    pub name: String,
}

impl PetIdentity {
    /// Create an identity, rejecting empty names.
    pub fn new(kind: PetKind, name: impl Into<String>) -> Result<Self, PetError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PetError::EmptyName);
        }
        Ok(Self { kind, name })
    }
}

/// The pet's numeric state, advanced by ticks and reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct PetState {
    /// 0 = fully fed, 100 = starving.
    pub hunger: f64,
    /// 0 = miserable, 100 = delighted.
    pub happiness: f64,
    /// Derived from the local wall-clock hour each tick.
    pub asleep: bool,
    /// Epoch ms of the last persisted tick; baseline for reconciliation.
    pub last_update: i64,
    /// Epoch ms of first creation. Immutable once set.
    pub birth: i64,
    /// Whole days since birth. Monotonically non-decreasing.
    pub age_days: u32,
    /// Uncleaned droppings on the lawn.
    pub droppings: u32,
}

impl PetState {
    /// A newborn pet: fed, delighted, age zero, born at `now`.
    pub fn newborn(now: i64) -> Self {
        Self {
            hunger: 0.0,
            happiness: STAT_MAX,
            asleep: clock::is_sleep_hour(clock::local_hour(now)),
            last_update: now,
            birth: now,
            age_days: 0,
            droppings: 0,
        }
    }

    /// Add to hunger, clamping to `0..=100`.
    pub fn add_hunger(&mut self, amount: f64) {
        self.hunger = (self.hunger + amount).clamp(0.0, STAT_MAX);
    }

    /// Add to happiness, clamping to `0..=100`.
    pub fn add_happiness(&mut self, amount: f64) {
        self.happiness = (self.happiness + amount).clamp(0.0, STAT_MAX);
    }

    /// Advance `age_days` to the whole-day count since birth.
    ///
    /// Never moves backwards, even if `now` precedes the last observed day
    /// boundary (clock adjustments).
    pub fn advance_age(&mut self, now: i64) {
        let total = clock::elapsed_days(self.birth, now);
        if total > self.age_days {
            self.age_days = total;
        }
    }
}
