// Game state and the session phase derived from it

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Not running; waiting for a start
    Idle,
    /// Counting down before the first asteroid; holds the current digit
    Countdown(u32),
    /// Asteroids are falling
    Active,
}

/// Score, level and difficulty of the current session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub score: u32,
    /// Starts at 1, goes up on every level up
    pub level: u32,
    /// Vertical gravity in m/s², negative
    pub gravity: f32,
    pub running: bool,
    /// Counts down to 0 before play begins
    pub countdown: u32,
}

impl GameState {
    pub fn new(initial_gravity: f32, countdown_start: u32) -> Self {
        Self {
            score: 0,
            level: 1,
            gravity: initial_gravity,
            running: false,
            countdown: countdown_start,
        }
    }

    /// Put the state back to the beginning of a round and mark it running
    pub fn restart(&mut self, initial_gravity: f32, countdown_start: u32) {
        *self = Self {
            running: true,
            ..Self::new(initial_gravity, countdown_start)
        };
    }

    pub fn phase(&self) -> Phase {
        match (self.running, self.countdown) {
            (false, _) => Phase::Idle,
            (true, 0) => Phase::Active,
            (true, n) => Phase::Countdown(n),
        }
    }

    /// Text for the score label
    pub fn score_text(&self) -> String {
        format!("score: {} level: {}", self.score, self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(-3.0, 3);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_phases() {
        let mut state = GameState::new(-3.0, 3);
        state.restart(-3.0, 3);
        assert_eq!(state.phase(), Phase::Countdown(3));

        state.countdown = 0;
        assert_eq!(state.phase(), Phase::Active);

        state.running = false;
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut state = GameState::new(-3.0, 3);
        state.score = 12;
        state.level = 3;
        state.gravity = -4.0;
        state.countdown = 0;

        state.restart(-3.0, 3);
        assert_eq!(state, GameState {
            score: 0,
            level: 1,
            gravity: -3.0,
            running: true,
            countdown: 3,
        });
    }

    #[test]
    fn test_score_text() {
        let mut state = GameState::new(-3.0, 3);
        state.score = 7;
        state.level = 2;
        assert_eq!(state.score_text(), "score: 7 level: 2");
    }
}
