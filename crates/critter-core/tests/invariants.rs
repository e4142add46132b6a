//! Property tests for the simulation's clamping and idempotence guarantees.

use critter_core::clock::MINUTE_MS;
use critter_core::{PetConfig, PetIdentity, PetKind, PetSimulation, PetState};
use proptest::prelude::*;

fn arbitrary_state() -> impl Strategy<Value = PetState> {
    (
        0.0..=100.0f64,
        0.0..=100.0f64,
        0i64..=1_000_000_000,
        0u32..=10_000,
    )
        .prop_map(|(hunger, happiness, last_update, age_days)| PetState {
            hunger,
            happiness,
            asleep: false,
            last_update,
            birth: 0,
            age_days,
            droppings: 0,
        })
}

proptest! {
    #[test]
    fn reconcile_keeps_stats_in_range(state in arbitrary_state(), gap_minutes in 0i64..=100_000) {
        let now = state.last_update + gap_minutes * MINUTE_MS;
        let out = PetSimulation::reconcile_on_load(Some(state), &PetConfig::default(), now);
        prop_assert!((0.0..=100.0).contains(&out.hunger));
        prop_assert!((0.0..=100.0).contains(&out.happiness));
        prop_assert_eq!(out.last_update, now);
    }

    #[test]
    fn reconcile_twice_changes_nothing(state in arbitrary_state(), gap_minutes in 0i64..=100_000) {
        let now = state.last_update + gap_minutes * MINUTE_MS;
        let config = PetConfig::default();
        let once = PetSimulation::reconcile_on_load(Some(state), &config, now);
        let twice = PetSimulation::reconcile_on_load(Some(once.clone()), &config, now);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn ticking_never_escapes_range(state in arbitrary_state(), steps in 1u64..500) {
        let identity = PetIdentity::new(PetKind::Dog, "Prop").unwrap();
        let now = state.last_update;
        let mut sim = PetSimulation::resume(identity, Some(state), PetConfig::default(), now);
        for i in 1..=steps {
            sim.tick(now + (i as i64) * 1_000);
            prop_assert!((0.0..=100.0).contains(&sim.state().hunger));
            prop_assert!((0.0..=100.0).contains(&sim.state().happiness));
        }
    }

    #[test]
    fn age_is_monotone(state in arbitrary_state(), gaps in prop::collection::vec(0i64..=2_000_000_000, 1..20)) {
        let identity = PetIdentity::new(PetKind::Dragon, "Prop").unwrap();
        let mut now = state.last_update;
        let mut sim = PetSimulation::resume(identity, Some(state), PetConfig::default(), now);
        let mut last_age = sim.state().age_days;
        for gap in gaps {
            now += gap;
            sim.tick(now);
            prop_assert!(sim.state().age_days >= last_age);
            last_age = sim.state().age_days;
        }
    }
}
