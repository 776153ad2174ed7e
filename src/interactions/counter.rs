// SPDX-License-Identifier: MPL-2.0
//! Interval-driven numeric count-up animation.
//!
//! A [`Counter`] interpolates a displayed value from zero to a target over a
//! fixed duration, advancing by a constant increment per animation tick and
//! snapping to the exact target on the final step. Sessions are owned state:
//! restarting replaces the running animation and [`Counter::cancel`] freezes
//! the display, so stale timers can never fight over the same read-out.

use std::time::Duration;

/// Animation tick period the increment is derived from.
pub const TICK: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Default)]
pub struct Counter {
    target: f64,
    current: f64,
    increment: f64,
    running: bool,
}

impl Counter {
    /// Creates a counter resting at the given value, without animating.
    #[must_use]
    pub fn at(value: f64) -> Self {
        Self {
            target: value,
            current: value,
            increment: 0.0,
            running: false,
        }
    }

    /// Starts counting up from zero, replacing any running animation.
    ///
    /// Targets that are zero or negative cannot produce a positive
    /// increment; they complete immediately at the target value.
    pub fn start(&mut self, target: f64, duration: Duration) {
        self.target = target;
        if target <= 0.0 || duration < TICK {
            self.current = target;
            self.increment = 0.0;
            self.running = false;
            return;
        }

        let ticks = duration.as_millis() as f64 / TICK.as_millis() as f64;
        self.current = 0.0;
        self.increment = target / ticks;
        self.running = true;
    }

    /// Advances one animation tick. Returns `true` while the value is still
    /// changing; once the target is reached the counter stops itself.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
            self.running = false;
        }
        true
    }

    /// Freezes the animation at the currently displayed value.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Displayed value: floored while animating, exact once settled.
    #[must_use]
    pub fn display_value(&self) -> i64 {
        self.current.floor() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(counter: &mut Counter, max_ticks: u32) -> u32 {
        let mut ticks = 0;
        while counter.is_running() && ticks < max_ticks {
            counter.tick();
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn reaches_exact_target_and_stops() {
        let mut counter = Counter::default();
        counter.start(100.0, Duration::from_millis(160));

        let ticks = run_to_completion(&mut counter, 1000);
        assert_eq!(counter.display_value(), 100);
        assert!(!counter.is_running());
        // 160ms / 16ms = 10 increments of 10 each.
        assert_eq!(ticks, 10);

        // Further ticks change nothing.
        assert!(!counter.tick());
        assert_eq!(counter.display_value(), 100);
    }

    #[test]
    fn intermediate_values_are_floored() {
        let mut counter = Counter::default();
        counter.start(10.0, Duration::from_millis(480));

        counter.tick();
        // One tick of 10/30 per tick floors to zero.
        assert_eq!(counter.display_value(), 0);
        assert!(counter.is_running());
    }

    #[test]
    fn zero_target_completes_immediately() {
        let mut counter = Counter::default();
        counter.start(0.0, Duration::from_millis(2000));
        assert!(!counter.is_running());
        assert_eq!(counter.display_value(), 0);
    }

    #[test]
    fn negative_target_completes_immediately() {
        let mut counter = Counter::default();
        counter.start(-25.0, Duration::from_millis(2000));
        assert!(!counter.is_running());
        assert_eq!(counter.display_value(), -25);
    }

    #[test]
    fn sub_tick_duration_snaps_to_target() {
        let mut counter = Counter::default();
        counter.start(42.0, Duration::from_millis(5));
        assert!(!counter.is_running());
        assert_eq!(counter.display_value(), 42);
    }

    #[test]
    fn restart_replaces_running_animation() {
        let mut counter = Counter::default();
        counter.start(100.0, Duration::from_millis(160));
        counter.tick();
        counter.tick();

        counter.start(50.0, Duration::from_millis(160));
        assert_eq!(counter.display_value(), 0);

        run_to_completion(&mut counter, 1000);
        assert_eq!(counter.display_value(), 50);
    }

    #[test]
    fn cancel_freezes_current_value() {
        let mut counter = Counter::default();
        counter.start(100.0, Duration::from_millis(160));
        counter.tick();
        let frozen = counter.display_value();

        counter.cancel();
        assert!(!counter.is_running());
        assert!(!counter.tick());
        assert_eq!(counter.display_value(), frozen);
    }

    #[test]
    fn at_rests_without_animating() {
        let counter = Counter::at(118.0);
        assert!(!counter.is_running());
        assert_eq!(counter.display_value(), 118);
    }
}
