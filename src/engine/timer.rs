// Repeating timer driven by the fixed update

/// Fires once every `interval` seconds of simulated time until cancelled
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval: f32,
    elapsed: f32,
    active: bool,
}

impl RepeatingTimer {
    /// Start a timer that first fires after one full interval
    pub fn start(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            active: true,
        }
    }

    /// Advance by `dt` seconds, returns how many times the timer fired
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.active || self.interval <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }

    /// Stop the timer; it never fires again
    pub fn invalidate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_every_interval() {
        let mut timer = RepeatingTimer::start(1.0);
        assert_eq!(timer.advance(0.5), 0);
        assert_eq!(timer.advance(0.5), 1);
        assert_eq!(timer.advance(2.25), 2);
        assert_eq!(timer.advance(0.75), 1);
    }

    #[test]
    fn test_fixed_steps_add_up() {
        let mut timer = RepeatingTimer::start(1.0);
        let fired: u32 = (0..181).map(|_| timer.advance(1.0 / 60.0)).sum();
        assert_eq!(fired, 3);
    }

    #[test]
    fn test_invalidated_timer_is_silent() {
        let mut timer = RepeatingTimer::start(1.0);
        timer.invalidate();
        assert_eq!(timer.advance(10.0), 0);
    }
}
