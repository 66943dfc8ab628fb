//! Gating the simulation tick on elapsed time.
//!
//! Frames arrive as fast as the window presents them; the snake should only
//! move once its tick interval has passed. [`TickScheduler`] keeps the time
//! of the last tick and answers "is a tick due now?" for a caller-supplied
//! clock reading, so it never reads a clock itself.

use std::time::Duration;

/// Remembers when the last tick fired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickScheduler {
    last_tick: Duration,
}

impl TickScheduler {
    /// A scheduler whose last tick was at `start`.
    pub fn new(start: Duration) -> Self {
        TickScheduler { last_tick: start }
    }

    /// Whether at least `interval_secs` have passed since the last tick.
    /// If so the scheduler is re-armed at `now`.
    pub fn is_due(&mut self, now: Duration, interval_secs: f64) -> bool {
        let elapsed = now.saturating_sub(self.last_tick);
        if elapsed.as_secs_f64() >= interval_secs {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    /// When the last tick fired.
    pub fn last_tick(&self) -> Duration {
        self.last_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_once_interval_has_elapsed() {
        let mut sched = TickScheduler::default();
        assert!(!sched.is_due(ms(50), 0.1));
        assert!(sched.is_due(ms(100), 0.1));
        assert_eq!(sched.last_tick(), ms(100));
        assert!(!sched.is_due(ms(150), 0.1));
        assert!(sched.is_due(ms(230), 0.1));
    }

    #[test]
    fn rearms_at_call_time_not_at_schedule() {
        let mut sched = TickScheduler::new(ms(0));
        // A late frame does not cause catch-up ticks.
        assert!(sched.is_due(ms(500), 0.1));
        assert!(!sched.is_due(ms(550), 0.1));
    }

    #[test]
    fn shorter_interval_fires_sooner() {
        let mut slow = TickScheduler::default();
        let mut fast = TickScheduler::default();
        assert!(!slow.is_due(ms(20), 0.1));
        assert!(fast.is_due(ms(20), 0.01));
    }

    #[test]
    fn clock_going_backwards_does_not_fire() {
        let mut sched = TickScheduler::new(ms(1000));
        assert!(!sched.is_due(ms(10), 0.1));
    }
}
