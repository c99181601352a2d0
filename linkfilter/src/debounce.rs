//! Single pending deadline, driven by the host event loop's clock.
//!
//! The host passes `Instant`s in: key handling schedules, `fire` checks.
//! Hosts typically use [`Debounce::deadline`] as the timeout of their event
//! poll so the pass runs as soon as the quiet period ends.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct Debounce {
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending deadline with `now + delay`.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = now.checked_add(delay);
        log::trace!("[debounce] scheduled in {delay:?}");
    }

    /// Drop the pending deadline. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has elapsed at `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_deadline() {
        let start = Instant::now();
        let mut timer = Debounce::new();
        timer.schedule(start, Duration::from_millis(300));

        assert!(!timer.fire(start + Duration::from_millis(299)));
        assert!(timer.fire(start + Duration::from_millis(300)));
        assert!(!timer.fire(start + Duration::from_millis(301)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn rescheduling_replaces_deadline() {
        let start = Instant::now();
        let mut timer = Debounce::new();
        timer.schedule(start, Duration::from_millis(300));
        timer.schedule(start + Duration::from_millis(200), Duration::from_millis(300));

        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(500)));
        assert!(!timer.fire(start + Duration::from_millis(300)));
        assert!(timer.fire(start + Duration::from_millis(500)));
    }

    #[test]
    fn zero_delay_fires_immediately() {
        let now = Instant::now();
        let mut timer = Debounce::new();
        timer.schedule(now, Duration::ZERO);
        assert!(timer.fire(now));
    }

    #[test]
    fn cancel_clears_pending() {
        let now = Instant::now();
        let mut timer = Debounce::new();
        assert!(!timer.cancel());
        timer.schedule(now, Duration::from_millis(10));
        assert!(timer.cancel());
        assert!(!timer.fire(now + Duration::from_secs(1)));
    }
}
