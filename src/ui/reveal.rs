// SPDX-License-Identifier: MPL-2.0
//! Fire-once scroll reveal.
//!
//! A [`Reveal`] arms an element's entrance animation the first time it
//! scrolls into view and never again: once triggered, the observation is
//! dropped, so later scrolling cannot replay the entrance.

use crate::ui::design_tokens::motion;
use std::time::Instant;

/// Fraction of the element that must be visible to trigger.
const VISIBILITY_THRESHOLD: f32 = 0.1;

/// Margin subtracted from the viewport bottom, so elements reveal slightly
/// before they are flush with the edge.
const BOTTOM_MARGIN: f32 = 50.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Reveal {
    revealed_at: Option<Instant>,
}

impl Reveal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks visibility against the current viewport and arms the entrance
    /// on the first intersection. `element_top` and `element_height` are in
    /// content coordinates; `scroll_offset` and `viewport_height` describe
    /// the visible window.
    pub fn observe(
        &mut self,
        element_top: f32,
        element_height: f32,
        scroll_offset: f32,
        viewport_height: f32,
        now: Instant,
    ) {
        if self.revealed_at.is_some() {
            return;
        }

        let viewport_bottom = scroll_offset + viewport_height - BOTTOM_MARGIN;
        let required = element_top + element_height * VISIBILITY_THRESHOLD;
        if viewport_bottom >= required {
            self.revealed_at = Some(now);
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Entrance progress in `[0, 1]`; zero while unrevealed.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.revealed_at {
            None => 0.0,
            Some(at) => {
                let elapsed = now.saturating_duration_since(at);
                (elapsed.as_secs_f32() / motion::ENTRANCE.as_secs_f32()).min(1.0)
            }
        }
    }

    /// Whether the entrance animation is still playing.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.revealed_at
            .is_some_and(|at| now.saturating_duration_since(at) < motion::ENTRANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn hidden_element_stays_unrevealed() {
        let mut reveal = Reveal::new();
        // Element starts at y=1000, viewport shows 0..600.
        reveal.observe(1000.0, 100.0, 0.0, 600.0, Instant::now());
        assert!(!reveal.is_revealed());
        assert_eq!(reveal.progress(Instant::now()), 0.0);
    }

    #[test]
    fn scrolling_into_view_triggers_once() {
        let mut reveal = Reveal::new();
        let now = Instant::now();

        reveal.observe(1000.0, 100.0, 500.0, 600.0, now);
        assert!(reveal.is_revealed());

        // Scrolling away and back does not re-arm the entrance.
        let first = reveal.revealed_at;
        reveal.observe(1000.0, 100.0, 0.0, 600.0, now + Duration::from_secs(1));
        reveal.observe(1000.0, 100.0, 500.0, 600.0, now + Duration::from_secs(2));
        assert_eq!(reveal.revealed_at, first);
    }

    #[test]
    fn bottom_margin_delays_the_trigger() {
        let mut reveal = Reveal::new();
        // Element top exactly at the viewport bottom: margin keeps it hidden.
        reveal.observe(600.0, 100.0, 0.0, 600.0, Instant::now());
        assert!(!reveal.is_revealed());
    }

    #[test]
    fn progress_ramps_after_reveal() {
        let mut reveal = Reveal::new();
        let now = Instant::now();
        reveal.observe(0.0, 100.0, 0.0, 600.0, now);

        assert!(reveal.is_animating(now));
        assert_eq!(reveal.progress(now + motion::ENTRANCE), 1.0);
        assert!(!reveal.is_animating(now + motion::ENTRANCE));
    }
}
