//! Meal outcomes for feeding.
//!
//! The original picked a feed animation through a series of independent
//! probability checks whose branches could overlap. Here the outcome is a
//! single weighted roll against a cumulative table: one sample decides both
//! the hunger delta and the animation cue.

use rand::Rng;
use rand::rngs::StdRng;

/// What the pet was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meal {
    /// A quick bite: -15 hunger.
    Snack,
    /// A regular meal: -20 hunger.
    Regular,
    /// A lavish spread: -25 hunger.
    Feast,
}

impl Meal {
    /// How much hunger this meal removes.
    pub fn hunger_delta(self) -> f64 {
        match self {
            Self::Snack => 15.0,
            Self::Regular => 20.0,
            Self::Feast => 25.0,
        }
    }

    /// Name of the eating animation the presentation layer should cue.
    pub fn animation_cue(self) -> &'static str {
        match self {
            Self::Snack => "nibble",
            Self::Regular => "munch",
            Self::Feast => "devour",
        }
    }
}

impl std::fmt::Display for Meal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snack => write!(f, "snack"),
            Self::Regular => write!(f, "meal"),
            Self::Feast => write!(f, "feast"),
        }
    }
}

/// A weighted meal table, sampled once per feeding.
#[derive(Debug, Clone)]
pub struct MealTable {
    entries: Vec<(u32, Meal)>,
    total_weight: u32,
}

impl Default for MealTable {
    fn default() -> Self {
        // Plain meals are the common case; feasts are rare treats.
        Self::new(vec![
            (30, Meal::Snack),
            (50, Meal::Regular),
            (20, Meal::Feast),
        ])
    }
}

impl MealTable {
    /// Build a table from `(weight, meal)` pairs. Zero-weight entries are
    /// unreachable; an all-zero table falls back to a regular meal.
    pub fn new(entries: Vec<(u32, Meal)>) -> Self {
        let total_weight = entries.iter().map(|(w, _)| w).sum();
        Self {
            entries,
            total_weight,
        }
    }

    /// Draw one meal from the table.
    pub fn sample(&self, rng: &mut StdRng) -> Meal {
        if self.total_weight == 0 {
            return Meal::Regular;
        }
        let roll = rng.random_range(0..self.total_weight);
        let mut cumulative = 0;
        for (weight, meal) in &self.entries {
            cumulative += weight;
            if roll < cumulative {
                return *meal;
            }
        }
        // Unreachable: roll < total_weight and weights sum to total_weight.
        Meal::Regular
    }
}
