// Difficulty progression: gravity grows stronger every few points

use super::state::GameState;
use crate::config::GameConfig;

/// Escalation rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Subtracted from gravity on each level up
    pub gravity_step: f32,
    /// Level up whenever the score is a positive multiple of this
    pub every: u32,
}

impl Difficulty {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            gravity_step: config.gravity_step,
            every: config.level_up_every,
        }
    }

    /// Whether reaching `score` triggers a level up
    pub fn should_escalate(&self, score: u32) -> bool {
        self.every > 0 && score > 0 && score % self.every == 0
    }

    /// Level up if the current score calls for it; returns whether it did
    pub fn apply(&self, state: &mut GameState) -> bool {
        if !self.should_escalate(state.score) {
            return false;
        }
        state.gravity -= self.gravity_step;
        state.level += 1;
        true
    }
}
