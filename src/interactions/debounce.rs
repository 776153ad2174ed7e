// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debouncing for bursty inputs.
//!
//! A [`Debouncer`] coalesces a burst of calls into a single trailing
//! delivery: each call replaces the pending value and re-arms the quiet
//! window, and only once the window elapses without further calls does
//! [`Debouncer::poll`] yield the most recent value. There is no leading-edge
//! delivery and no upper bound on how long a steady stream of calls can
//! postpone the trailing one.
//!
//! Each `Debouncer` value is an independent binding with at most one pending
//! delivery; call sites that must not interfere with each other use separate
//! instances.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Records a call, replacing any pending value and restarting the quiet
    /// window from `now`.
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.wait));
    }

    /// Yields the pending value once the quiet window has elapsed.
    ///
    /// Returns `None` while the window is still open or when nothing is
    /// pending. A yielded value clears the binding.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Drops any pending delivery without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_millis(300);

    #[test]
    fn burst_yields_single_trailing_value() {
        let mut debouncer = Debouncer::new(WAIT);
        let start = Instant::now();

        // Five calls, 100ms apart: only the fifth survives.
        for i in 0..5u32 {
            let at = start + Duration::from_millis(100 * u64::from(i));
            debouncer.call(i, at);
            assert_eq!(debouncer.poll(at), None);
        }

        let last_call = start + Duration::from_millis(400);
        assert_eq!(debouncer.poll(last_call + Duration::from_millis(299)), None);
        assert_eq!(
            debouncer.poll(last_call + Duration::from_millis(300)),
            Some(4)
        );
    }

    #[test]
    fn yield_clears_pending() {
        let mut debouncer = Debouncer::new(WAIT);
        let start = Instant::now();
        debouncer.call("a", start);

        assert_eq!(debouncer.poll(start + WAIT), Some("a"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + WAIT * 2), None);
    }

    #[test]
    fn no_leading_edge() {
        let mut debouncer = Debouncer::new(WAIT);
        let start = Instant::now();
        debouncer.call(1, start);
        assert_eq!(debouncer.poll(start), None);
    }

    #[test]
    fn each_call_rearms_the_window() {
        let mut debouncer = Debouncer::new(WAIT);
        let start = Instant::now();
        debouncer.call(1, start);
        debouncer.call(2, start + Duration::from_millis(299));

        // The first deadline has passed, but the second call replaced it.
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(599)), Some(2));
    }

    #[test]
    fn cancel_drops_pending_value() {
        let mut debouncer = Debouncer::new(WAIT);
        let start = Instant::now();
        debouncer.call(1, start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + WAIT), None);
    }

    #[test]
    fn bindings_are_independent() {
        let start = Instant::now();
        let mut first = Debouncer::new(WAIT);
        let mut second = Debouncer::new(WAIT);
        first.call(1, start);
        second.call(2, start + Duration::from_millis(200));

        assert_eq!(first.poll(start + WAIT), Some(1));
        assert_eq!(second.poll(start + WAIT), None);
        assert_eq!(second.poll(start + Duration::from_millis(500)), Some(2));
    }
}
