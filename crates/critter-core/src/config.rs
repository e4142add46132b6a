//! Configuration for the pet simulation.
//!
//! All decay rates, thresholds, and bonuses live here so there is exactly
//! one authoritative rate model. The defaults reproduce the observed
//! behavior: coarse offline decay counted in whole minutes, fine per-second
//! decay while live, and the most generous mini-game reward cap.

/// Tunable rates and thresholds for a simulation run.
#[derive(Debug, Clone)]
pub struct PetConfig {
    /// Minutes of offline time per +1 hunger during reconciliation.
    pub offline_hunger_minutes: i64,
    /// Minutes of offline time per -1 happiness during reconciliation.
    pub offline_happiness_minutes: i64,
    /// Hunger gained per live tick while awake.
    pub hunger_per_tick: f64,
    /// Happiness lost per live tick while awake.
    pub happiness_per_tick: f64,
    /// Feeding is a no-op at or below this hunger level.
    pub satiety_floor: f64,
    /// Happiness gained by any successful feeding.
    pub feed_happiness: f64,
    /// Happiness gained directly by playing. Kept small; mini-games are the
    /// primary happiness source.
    pub play_bonus: f64,
    /// Hunger cost of playing.
    pub play_hunger_cost: f64,
    /// Ceiling on the stat bonus from one mini-game session.
    pub minigame_cap: f64,
    /// Awake ticks between dropping rolls.
    pub dropping_interval_ticks: u32,
    /// A dropping spawns with probability 1-in-`dropping_one_in`.
    pub dropping_one_in: u32,
    /// Happiness gained per cleaned dropping.
    pub clean_bonus: f64,
    /// RNG seed for deterministic meal and dropping rolls.
    pub seed: u64,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            offline_hunger_minutes: 3,
            offline_happiness_minutes: 5,
            hunger_per_tick: 0.05,
            happiness_per_tick: 0.03,
            satiety_floor: 1.0,
            feed_happiness: 5.0,
            play_bonus: 5.0,
            play_hunger_cost: 5.0,
            minigame_cap: 20.0,
            dropping_interval_ticks: 60,
            dropping_one_in: 3,
            clean_bonus: 10.0,
            seed: 42,
            max_events: 200,
        }
    }
}

impl PetConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the satiety floor below which feeding is rejected.
    pub fn with_satiety_floor(mut self, floor: f64) -> Self {
        self.satiety_floor = floor.clamp(0.0, 100.0);
        self
    }

    /// Set the mini-game bonus cap.
    pub fn with_minigame_cap(mut self, cap: f64) -> Self {
        self.minigame_cap = cap.max(0.0);
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rates() {
        let cfg = PetConfig::default();
        assert_eq!(cfg.offline_hunger_minutes, 3);
        assert_eq!(cfg.offline_happiness_minutes, 5);
        assert!((cfg.hunger_per_tick - 0.05).abs() < f64::EPSILON);
        assert!((cfg.happiness_per_tick - 0.03).abs() < f64::EPSILON);
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn builder_chain() {
        let cfg = PetConfig::default()
            .with_seed(7)
            .with_satiety_floor(0.0)
            .with_minigame_cap(5.0)
            .with_max_events(10);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.satiety_floor, 0.0);
        assert_eq!(cfg.minigame_cap, 5.0);
        assert_eq!(cfg.max_events, 10);
    }

    #[test]
    fn floor_and_cap_clamped() {
        let cfg = PetConfig::default().with_satiety_floor(500.0);
        assert_eq!(cfg.satiety_floor, 100.0);
        let cfg = PetConfig::default().with_minigame_cap(-3.0);
        assert_eq!(cfg.minigame_cap, 0.0);
    }
}
