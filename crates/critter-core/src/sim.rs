//! The pet simulation orchestrator.
//!
//! Owns the pet's state, configuration, RNG, and event log, and exposes the
//! whole behavioral surface: offline reconciliation, the live one-second
//! tick, care actions, mini-game outcome application, and lawn cleaning.
//! Every operation is total; invalid actions (feeding a sleeping pet) are
//! silent no-ops rather than errors.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clock;
use crate::config::PetConfig;
use crate::event::{EventLog, PetEvent, PetEventKind};
use crate::meal::{Meal, MealTable};
use crate::mood::Mood;
use crate::state::{PetIdentity, PetState};

/// Hunger level above which the pet is considered critically hungry.
const HUNGER_CRITICAL: f64 = 70.0;

/// Happiness level below which the pet is considered critically unhappy.
const HAPPINESS_CRITICAL: f64 = 40.0;

/// The top-level simulation: one pet, advanced against wall-clock time.
pub struct PetSimulation {
    identity: PetIdentity,
    state: PetState,
    config: PetConfig,
    meals: MealTable,
    rng: StdRng,
    events: EventLog,
    tick_count: u64,
    awake_ticks: u32,
}

impl std::fmt::Debug for PetSimulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PetSimulation")
            .field("name", &self.identity.name)
            .field("tick", &self.tick_count)
            .field("hunger", &self.state.hunger)
            .field("happiness", &self.state.happiness)
            .finish()
    }
}

impl PetSimulation {
    /// Adopt a brand-new pet at `now`.
    pub fn adopt(identity: PetIdentity, config: PetConfig, now: i64) -> Self {
        let state = PetState::newborn(now);
        Self::from_parts(identity, state, config)
    }

    /// Resume a persisted pet, applying offline reconciliation against `now`.
    pub fn resume(
        identity: PetIdentity,
        persisted: Option<PetState>,
        config: PetConfig,
        now: i64,
    ) -> Self {
        let state = Self::reconcile_on_load(persisted, &config, now);
        Self::from_parts(identity, state, config)
    }

    fn from_parts(identity: PetIdentity, state: PetState, config: PetConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let events = EventLog::new(config.max_events);
        Self {
            identity,
            state,
            config,
            meals: MealTable::default(),
            rng,
            events,
            tick_count: 0,
            awake_ticks: 0,
        }
    }

    /// Catch up a possibly-absent persisted state with coarse offline decay.
    ///
    /// Absent (or previously discarded as corrupt) state yields a newborn.
    /// Otherwise hunger rises one point per `offline_hunger_minutes` whole
    /// minutes elapsed and happiness falls one point per
    /// `offline_happiness_minutes`, both clamped. `last_update` is refreshed
    /// to `now`, which makes an immediate second call a no-op: the elapsed
    /// time recomputes as zero.
    pub fn reconcile_on_load(persisted: Option<PetState>, config: &PetConfig, now: i64) -> PetState {
        let mut state = match persisted {
            Some(s) => s,
            None => return PetState::newborn(now),
        };

        let minutes = clock::elapsed_minutes(state.last_update, now);
        state.add_hunger((minutes / config.offline_hunger_minutes) as f64);
        state.add_happiness(-((minutes / config.offline_happiness_minutes) as f64));
        state.asleep = clock::is_sleep_hour(clock::local_hour(now));
        state.advance_age(now);
        state.last_update = now;
        state
    }

    /// Advance the simulation by one live second.
    ///
    /// Order matters: the sleep flag is recomputed first so decay and the
    /// dropping scheduler see the current window; age and `last_update` are
    /// settled afterwards.
    pub fn tick(&mut self, now: i64) {
        self.tick_count += 1;

        let asleep = clock::is_sleep_hour(clock::local_hour(now));
        if asleep != self.state.asleep {
            self.state.asleep = asleep;
            if asleep {
                self.emit(PetEventKind::FellAsleep, format!("{} fell asleep", self.identity.name));
            } else {
                self.emit(PetEventKind::WokeUp, format!("{} woke up", self.identity.name));
            }
        }

        if !asleep {
            let prev_hunger = self.state.hunger;
            let prev_happiness = self.state.happiness;
            self.state.add_hunger(self.config.hunger_per_tick);
            self.state.add_happiness(-self.config.happiness_per_tick);

            if prev_hunger <= HUNGER_CRITICAL && self.state.hunger > HUNGER_CRITICAL {
                self.emit(
                    PetEventKind::HungerCritical,
                    format!("{} is getting very hungry", self.identity.name),
                );
            }
            if prev_happiness >= HAPPINESS_CRITICAL && self.state.happiness < HAPPINESS_CRITICAL {
                self.emit(
                    PetEventKind::HappinessCritical,
                    format!("{} needs attention", self.identity.name),
                );
            }

            self.roll_dropping();
        }

        let prev_age = self.state.age_days;
        self.state.advance_age(now);
        if self.state.age_days > prev_age {
            let age = self.state.age_days;
            self.emit(
                PetEventKind::Birthday { age_days: age },
                format!("{} is now {age} days old", self.identity.name),
            );
        }

        self.state.last_update = now;
    }

    /// Every `dropping_interval_ticks` awake ticks, roll for a new dropping.
    fn roll_dropping(&mut self) {
        self.awake_ticks += 1;
        if self.awake_ticks < self.config.dropping_interval_ticks {
            return;
        }
        self.awake_ticks = 0;
        if self.rng.random_range(0..self.config.dropping_one_in.max(1)) == 0 {
            self.state.droppings += 1;
            self.emit(
                PetEventKind::DroppingSpawned,
                format!("{} left a mess on the lawn", self.identity.name),
            );
        }
    }

    /// Feed the pet. Returns the sampled meal, or `None` when the action was
    /// rejected (asleep, or hunger already at the satiety floor).
    pub fn feed(&mut self) -> Option<Meal> {
        if self.state.asleep || self.state.hunger <= self.config.satiety_floor {
            return None;
        }
        let meal = self.meals.sample(&mut self.rng);
        self.state.add_hunger(-meal.hunger_delta());
        self.state.add_happiness(self.config.feed_happiness);
        self.emit(
            PetEventKind::Fed { meal },
            format!("{} enjoyed a {meal}", self.identity.name),
        );
        Some(meal)
    }

    /// Play with the pet. Returns `false` when the pet is asleep.
    ///
    /// The direct bonus is small; the real happiness payoff comes from a
    /// mini-game session reported through [`Self::apply_minigame_outcome`].
    pub fn play(&mut self) -> bool {
        if self.state.asleep {
            return false;
        }
        self.state.add_happiness(self.config.play_bonus);
        self.state.add_hunger(self.config.play_hunger_cost);
        self.emit(
            PetEventKind::Played,
            format!("{} played with you", self.identity.name),
        );
        true
    }

    /// Apply a finished mini-game session to the pet's stats.
    ///
    /// A naturally ended session grants `min(cap, score * 2)` to both bars
    /// (toward full); a manually stopped one grants nothing. Returns the
    /// bonus that was applied.
    pub fn apply_minigame_outcome(&mut self, final_score: u32, stopped: bool) -> f64 {
        let bonus = if stopped {
            0.0
        } else {
            (f64::from(final_score) * 2.0).min(self.config.minigame_cap)
        };
        if bonus > 0.0 {
            self.state.add_hunger(bonus);
            self.state.add_happiness(bonus);
        }
        self.emit(
            PetEventKind::MiniGameEnded {
                score: final_score,
                bonus,
                stopped,
            },
            if stopped {
                format!("game stopped early, no reward for {}", self.identity.name)
            } else {
                format!("{} scored {final_score}, +{bonus:.0} cheer", self.identity.name)
            },
        );
        bonus
    }

    /// Clean every dropping from the lawn, granting the cleanup bonus per
    /// dropping. Returns how many were removed; zero is a no-op.
    pub fn clean_lawn(&mut self) -> u32 {
        let count = self.state.droppings;
        if count == 0 {
            return 0;
        }
        self.state.droppings = 0;
        for _ in 0..count {
            self.state.add_happiness(self.config.clean_bonus);
        }
        self.emit(
            PetEventKind::LawnCleaned { count },
            format!("cleaned up after {}", self.identity.name),
        );
        count
    }

    fn emit(&mut self, kind: PetEventKind, description: String) {
        self.events
            .push(PetEvent::new(self.tick_count, kind, description));
    }

    /// The pet's identity.
    pub fn identity(&self) -> &PetIdentity {
        &self.identity
    }

    /// The current state.
    pub fn state(&self) -> &PetState {
        &self.state
    }

    /// The active configuration.
    pub fn config(&self) -> &PetConfig {
        &self.config
    }

    /// The event log for this session.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Current displayed mood.
    pub fn mood(&self) -> Mood {
        Mood::classify(&self.state)
    }

    /// Number of live ticks this session.
    pub fn current_tick(&self) -> u64 {
        self.tick_count
    }

    /// Extract identity and state for persistence, consuming the simulation.
    pub fn into_parts(self) -> (PetIdentity, PetState) {
        (self.identity, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{DAY_MS, MINUTE_MS};
    use crate::state::PetKind;
    use chrono::{Local, TimeZone, Timelike};

    fn identity() -> PetIdentity {
        PetIdentity::new(PetKind::Cat, "Miso").unwrap()
    }

    /// Epoch ms for today at the given local hour, so sleep-window tests are
    /// independent of the machine's timezone.
    fn at_local_hour(hour: u32) -> i64 {
        Local::now()
            .with_hour(hour)
            .and_then(|dt| dt.with_minute(0))
            .and_then(|dt| dt.with_second(0))
            .map(|dt| dt.timestamp_millis())
            .unwrap_or_else(|| Local.timestamp_millis_opt(0).unwrap().timestamp_millis())
    }

    fn awake_sim() -> PetSimulation {
        let mut sim = PetSimulation::adopt(identity(), PetConfig::default(), at_local_hour(12));
        sim.state.asleep = false;
        sim
    }

    #[test]
    fn reconcile_absent_yields_newborn() {
        let now = at_local_hour(12);
        let state = PetSimulation::reconcile_on_load(None, &PetConfig::default(), now);
        assert_eq!(state.hunger, 0.0);
        assert_eq!(state.happiness, 100.0);
        assert_eq!(state.birth, now);
        assert_eq!(state.age_days, 0);
    }

    #[test]
    fn reconcile_ten_minutes_matches_coarse_rates() {
        let now = at_local_hour(12);
        let persisted = PetState {
            hunger: 50.0,
            happiness: 50.0,
            last_update: now - 10 * MINUTE_MS,
            ..PetState::newborn(now - 10 * MINUTE_MS)
        };
        let state =
            PetSimulation::reconcile_on_load(Some(persisted), &PetConfig::default(), now);
        // +floor(10/3) hunger, -floor(10/5) happiness
        assert_eq!(state.hunger, 53.0);
        assert_eq!(state.happiness, 48.0);
        assert_eq!(state.last_update, now);
    }

    #[test]
    fn reconcile_is_idempotent_at_fixed_now() {
        let now = at_local_hour(12);
        let persisted = PetState {
            hunger: 50.0,
            happiness: 50.0,
            last_update: now - 47 * MINUTE_MS,
            ..PetState::newborn(now - 47 * MINUTE_MS)
        };
        let config = PetConfig::default();
        let once = PetSimulation::reconcile_on_load(Some(persisted), &config, now);
        let twice = PetSimulation::reconcile_on_load(Some(once.clone()), &config, now);
        assert_eq!(once, twice);
    }

    #[test]
    fn reconcile_clamps_long_absence() {
        let now = at_local_hour(12);
        let persisted = PetState {
            hunger: 90.0,
            happiness: 5.0,
            last_update: now - 300 * MINUTE_MS,
            ..PetState::newborn(now - 300 * MINUTE_MS)
        };
        let state =
            PetSimulation::reconcile_on_load(Some(persisted), &PetConfig::default(), now);
        assert_eq!(state.hunger, 100.0);
        assert_eq!(state.happiness, 0.0);
    }

    #[test]
    fn reconcile_advances_age() {
        let now = at_local_hour(12);
        let persisted = PetState {
            last_update: now - 2 * DAY_MS,
            birth: now - 2 * DAY_MS,
            ..PetState::newborn(now - 2 * DAY_MS)
        };
        let state =
            PetSimulation::reconcile_on_load(Some(persisted), &PetConfig::default(), now);
        assert_eq!(state.age_days, 2);
    }

    #[test]
    fn awake_tick_applies_fine_decay() {
        let mut sim = awake_sim();
        let noon = at_local_hour(12);
        sim.tick(noon + 1_000);
        assert!((sim.state().hunger - 0.05).abs() < 1e-9);
        assert!((sim.state().happiness - 99.97).abs() < 1e-9);
        assert_eq!(sim.state().last_update, noon + 1_000);
    }

    #[test]
    fn asleep_tick_skips_decay() {
        let night = at_local_hour(23);
        let mut sim = PetSimulation::adopt(identity(), PetConfig::default(), night);
        sim.tick(night + 1_000);
        assert!(sim.state().asleep);
        assert_eq!(sim.state().hunger, 0.0);
        assert_eq!(sim.state().happiness, 100.0);
    }

    #[test]
    fn stats_stay_in_range_over_many_ticks() {
        let mut sim = awake_sim();
        let noon = at_local_hour(12);
        for i in 0..5_000 {
            sim.tick(noon + i * 1_000);
            assert!((0.0..=100.0).contains(&sim.state().hunger));
            assert!((0.0..=100.0).contains(&sim.state().happiness));
        }
    }

    #[test]
    fn age_monotone_across_ticks() {
        let mut sim = awake_sim();
        let noon = at_local_hour(12);
        let mut last_age = 0;
        for day in 0..5 {
            sim.tick(noon + day * DAY_MS);
            assert!(sim.state().age_days >= last_age);
            last_age = sim.state().age_days;
        }
        assert_eq!(last_age, 4);
    }

    #[test]
    fn birthday_emits_event() {
        let mut sim = awake_sim();
        let noon = at_local_hour(12);
        sim.tick(noon + DAY_MS);
        assert!(sim
            .events()
            .events()
            .iter()
            .any(|e| matches!(e.kind, PetEventKind::Birthday { age_days: 1 })));
    }

    #[test]
    fn feed_reduces_hunger_by_table_delta() {
        let mut sim = awake_sim();
        sim.state.hunger = 30.0;
        sim.state.happiness = 50.0;
        let meal = sim.feed().expect("awake and hungry, feed must succeed");
        let expected = 30.0 - meal.hunger_delta();
        assert_eq!(sim.state().hunger, expected.max(0.0));
        assert_eq!(sim.state().happiness, 55.0);
    }

    #[test]
    fn feed_clamps_at_zero() {
        let mut sim = awake_sim();
        sim.state.hunger = 2.0;
        sim.feed().expect("above the floor");
        assert_eq!(sim.state().hunger, 0.0);
    }

    #[test]
    fn feed_rejected_while_asleep() {
        let night = at_local_hour(23);
        let mut sim = PetSimulation::adopt(identity(), PetConfig::default(), night);
        sim.state.hunger = 50.0;
        let before = sim.state().clone();
        assert!(sim.feed().is_none());
        assert_eq!(*sim.state(), before);
    }

    #[test]
    fn feed_rejected_at_satiety_floor() {
        let mut sim = awake_sim();
        sim.state.hunger = 1.0; // default floor is 1.0
        assert!(sim.feed().is_none());
        assert_eq!(sim.state().hunger, 1.0);
    }

    #[test]
    fn play_bumps_happiness_and_costs_hunger() {
        let mut sim = awake_sim();
        sim.state.happiness = 50.0;
        assert!(sim.play());
        assert_eq!(sim.state().happiness, 55.0);
        assert_eq!(sim.state().hunger, 5.0);
    }

    #[test]
    fn play_rejected_while_asleep() {
        let night = at_local_hour(23);
        let mut sim = PetSimulation::adopt(identity(), PetConfig::default(), night);
        assert!(!sim.play());
    }

    #[test]
    fn minigame_natural_end_caps_bonus() {
        let mut sim = awake_sim();
        sim.state.hunger = 50.0;
        sim.state.happiness = 50.0;
        let bonus = sim.apply_minigame_outcome(10, false);
        assert_eq!(bonus, 20.0); // min(20, 10*2)
        assert_eq!(sim.state().hunger, 70.0);
        assert_eq!(sim.state().happiness, 70.0);
    }

    #[test]
    fn minigame_small_score_uncapped() {
        let mut sim = awake_sim();
        sim.state.happiness = 50.0;
        let bonus = sim.apply_minigame_outcome(3, false);
        assert_eq!(bonus, 6.0);
        assert_eq!(sim.state().happiness, 56.0);
    }

    #[test]
    fn minigame_manual_stop_grants_nothing() {
        let mut sim = awake_sim();
        sim.state.hunger = 50.0;
        sim.state.happiness = 50.0;
        let bonus = sim.apply_minigame_outcome(99, true);
        assert_eq!(bonus, 0.0);
        assert_eq!(sim.state().hunger, 50.0);
        assert_eq!(sim.state().happiness, 50.0);
    }

    #[test]
    fn clean_lawn_grants_bonus_per_dropping() {
        let mut sim = awake_sim();
        sim.state.happiness = 50.0;
        sim.state.droppings = 2;
        assert_eq!(sim.clean_lawn(), 2);
        assert_eq!(sim.state().droppings, 0);
        assert_eq!(sim.state().happiness, 70.0);
    }

    #[test]
    fn clean_empty_lawn_is_noop() {
        let mut sim = awake_sim();
        let before = sim.state().clone();
        assert_eq!(sim.clean_lawn(), 0);
        assert_eq!(*sim.state(), before);
        assert!(sim.events().is_empty());
    }

    #[test]
    fn droppings_roll_every_interval() {
        let config = PetConfig {
            dropping_one_in: 1, // certain spawn on every roll
            ..PetConfig::default()
        };
        let noon = at_local_hour(12);
        let mut sim = PetSimulation::adopt(identity(), config, noon);
        sim.state.asleep = false;
        for i in 1..=120 {
            sim.tick(noon + i * 1_000);
        }
        assert_eq!(sim.state().droppings, 2);
    }

    #[test]
    fn deterministic_meals_for_fixed_seed() {
        let run = || {
            let mut sim = awake_sim();
            sim.state.hunger = 100.0;
            let mut meals = Vec::new();
            for _ in 0..5 {
                sim.state.hunger = 100.0;
                meals.push(sim.feed().unwrap());
            }
            meals
        };
        assert_eq!(run(), run());
    }
}
