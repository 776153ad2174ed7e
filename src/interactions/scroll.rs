// SPDX-License-Identifier: MPL-2.0
//! Eased scrolling toward a target offset.

use std::time::{Duration, Instant};

/// Duration of a smooth-scroll glide.
pub const SCROLL_DURATION: Duration = Duration::from_millis(400);

/// An in-flight smooth scroll from one vertical offset to another.
///
/// The application samples [`ScrollAnimation::offset`] on each animation
/// tick and applies it to the scrollable, dropping the animation once
/// [`ScrollAnimation::is_finished`] reports completion.
#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    #[must_use]
    pub fn start(from: f32, to: f32, now: Instant) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration: SCROLL_DURATION,
        }
    }

    /// Current offset along the cubic ease-out curve.
    #[must_use]
    pub fn offset(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }
}
