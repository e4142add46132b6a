//! Mood classification and sprite frame sequencing.
//!
//! The display layer consumes a [`Mood`] plus a [`FrameCycle`] and owns its
//! own cadence; nothing here touches simulation time.

use crate::state::PetState;

/// The pet's displayed mood, derived from its stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    /// Inside the sleep window.
    Sleepy,
    /// Happiness below 40 or hunger above 70.
    Sad,
    /// Happiness below 60 or hunger above 50.
    Neutral,
    /// Everything else.
    Happy,
}

impl Mood {
    /// Classify a state into a mood tier. Sleep dominates; then the sad and
    /// neutral tiers; happy is the residual.
    pub fn classify(state: &PetState) -> Self {
        if state.asleep {
            Self::Sleepy
        } else if state.happiness < 40.0 || state.hunger > 70.0 {
            Self::Sad
        } else if state.happiness < 60.0 || state.hunger > 50.0 {
            Self::Neutral
        } else {
            Self::Happy
        }
    }

    /// Sprite folder name for this mood.
    pub fn sprite_name(self) -> &'static str {
        match self {
            Self::Sleepy => "sleepy",
            Self::Sad => "sad",
            Self::Neutral => "neutral",
            Self::Happy => "happy",
        }
    }

    /// Status line shown next to the pet.
    pub fn status_line(self, state: &PetState) -> &'static str {
        match self {
            Self::Sleepy => "Sleeping...",
            _ if state.hunger > 70.0 => "Hungry!",
            Self::Sad => "Needs attention",
            Self::Neutral => "Doing okay",
            _ => "Happy!",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sprite_name())
    }
}

/// A single sprite frame to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDescriptor {
    /// Sprite folder name (mood).
    pub sprite: &'static str,
    /// Frame index within the sprite, starting at 0.
    pub index: u8,
}

/// A finite, restartable sequence of animation frames for one mood.
///
/// Replaces the original's chained delayed callbacks: the presentation layer
/// pulls frames at whatever cadence it likes and can restart the cycle at
/// any point.
#[derive(Debug, Clone)]
pub struct FrameCycle {
    sprite: &'static str,
    frames: u16,
    repeats: u16,
    position: usize,
}

impl FrameCycle {
    /// Two-frame cycle for a mood, repeated `repeats` times.
    pub fn for_mood(mood: Mood, repeats: u16) -> Self {
        Self {
            sprite: mood.sprite_name(),
            frames: 2,
            repeats,
            position: 0,
        }
    }

    /// Rewind to the first frame.
    pub fn restart(&mut self) {
        self.position = 0;
    }

    /// Total number of frames the cycle will yield.
    pub fn len(&self) -> usize {
        self.frames as usize * self.repeats as usize
    }

    /// Whether the cycle yields no frames.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for FrameCycle {
    type Item = FrameDescriptor;

    fn next(&mut self) -> Option<FrameDescriptor> {
        if self.position >= self.len() {
            return None;
        }
        let frame = FrameDescriptor {
            sprite: self.sprite,
            index: (self.position % self.frames as usize) as u8,
        };
        self.position += 1;
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PetState;

    fn state(hunger: f64, happiness: f64, asleep: bool) -> PetState {
        PetState {
            hunger,
            happiness,
            asleep,
            ..PetState::newborn(0)
        }
    }

    #[test]
    fn sleep_dominates_mood() {
        assert_eq!(Mood::classify(&state(100.0, 0.0, true)), Mood::Sleepy);
    }

    #[test]
    fn mood_tiers() {
        assert_eq!(Mood::classify(&state(0.0, 30.0, false)), Mood::Sad);
        assert_eq!(Mood::classify(&state(80.0, 100.0, false)), Mood::Sad);
        assert_eq!(Mood::classify(&state(0.0, 50.0, false)), Mood::Neutral);
        assert_eq!(Mood::classify(&state(60.0, 100.0, false)), Mood::Neutral);
        assert_eq!(Mood::classify(&state(10.0, 90.0, false)), Mood::Happy);
    }

    #[test]
    fn status_lines() {
        let s = state(80.0, 90.0, false);
        assert_eq!(Mood::classify(&s).status_line(&s), "Hungry!");
        let s = state(0.0, 10.0, false);
        assert_eq!(Mood::classify(&s).status_line(&s), "Needs attention");
        let s = state(0.0, 100.0, true);
        assert_eq!(Mood::classify(&s).status_line(&s), "Sleeping...");
    }

    #[test]
    fn frame_cycle_alternates_and_ends() {
        let cycle = FrameCycle::for_mood(Mood::Happy, 2);
        let frames: Vec<_> = cycle.collect();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].index, 0);
        assert_eq!(frames[1].index, 1);
        assert_eq!(frames[2].index, 0);
        assert_eq!(frames[3].index, 1);
        assert!(frames.iter().all(|f| f.sprite == "happy"));
    }

    #[test]
    fn frame_cycle_restarts() {
        let mut cycle = FrameCycle::for_mood(Mood::Sad, 1);
        assert_eq!(cycle.next().unwrap().index, 0);
        assert_eq!(cycle.next().unwrap().index, 1);
        assert!(cycle.next().is_none());
        cycle.restart();
        assert_eq!(cycle.next().unwrap().index, 0);
    }
}
