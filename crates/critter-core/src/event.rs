//! Simulation events and the bounded event log.

use crate::meal::Meal;

/// What kind of simulation event occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum PetEventKind {
    /// The pet entered the sleep window.
    FellAsleep,
    /// The pet left the sleep window.
    WokeUp,
    /// Hunger crossed the critical threshold upward.
    HungerCritical,
    /// Happiness crossed the critical threshold downward.
    HappinessCritical,
    /// The pet was fed.
    Fed {
        /// The meal that was served.
        meal: Meal,
    },
    /// The pet played with its keeper.
    Played,
    /// A mini-game session ended and its outcome was applied.
    MiniGameEnded {
        /// Final score of the session.
        score: u32,
        /// Stat bonus granted (0 for a manual stop).
        bonus: f64,
        /// Whether the session was stopped manually.
        stopped: bool,
    },
    /// A dropping appeared on the lawn.
    DroppingSpawned,
    /// The lawn was cleaned.
    LawnCleaned {
        /// Number of droppings removed.
        count: u32,
    },
    /// The pet's age advanced by at least one whole day.
    Birthday {
        /// New age in whole days.
        age_days: u32,
    },
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone)]
pub struct PetEvent {
    /// The live tick when this event occurred.
    pub tick: u64,
    /// The specific kind of event.
    pub kind: PetEventKind,
    /// A human-readable description.
    pub description: String,
}

impl PetEvent {
    /// Create a new event.
    pub fn new(tick: u64, kind: PetEventKind, description: impl Into<String>) -> Self {
        Self {
            tick,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a simulation session.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<PetEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new log with the given capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest if the log exceeds its capacity.
    pub fn push(&mut self, event: PetEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[PetEvent] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_query() {
        let mut log = EventLog::new(0);
        log.push(PetEvent::new(1, PetEventKind::Played, "played fetch"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.events()[0].tick, 1);
        assert!(!log.is_empty());
    }

    #[test]
    fn capacity_trims_oldest() {
        let mut log = EventLog::new(2);
        for i in 0..5 {
            log.push(PetEvent::new(i, PetEventKind::Played, "test"));
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[0].tick, 3);
        assert_eq!(log.events()[1].tick, 4);
    }

    #[test]
    fn unlimited_capacity() {
        let mut log = EventLog::new(0);
        for i in 0..1000 {
            log.push(PetEvent::new(i, PetEventKind::DroppingSpawned, "test"));
        }
        assert_eq!(log.len(), 1000);
    }

    #[test]
    fn clear_empties_log() {
        let mut log = EventLog::new(0);
        log.push(PetEvent::new(0, PetEventKind::WokeUp, "awake"));
        log.clear();
        assert!(log.is_empty());
    }
}
