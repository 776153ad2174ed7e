// SPDX-License-Identifier: MPL-2.0
//! Press ripple overlay.
//!
//! A ripple is a transient circle that expands and fades from the press
//! point of its host element. Each host owns one [`RippleState`]: a new
//! press replaces whatever ripple was still showing, and an undisturbed
//! ripple evicts itself once its animation window has elapsed, so stale
//! circles never pile up.

use crate::ui::design_tokens::{motion, opacity};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use std::time::Instant;

/// An active ripple on a host element.
#[derive(Debug, Clone)]
pub struct Ripple {
    center: Point,
    diameter: f32,
    started_at: Instant,
}

impl Ripple {
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    /// Animation progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / motion::RIPPLE.as_secs_f32()).min(1.0)
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= motion::RIPPLE
    }
}

/// Per-element ripple slot.
#[derive(Debug, Clone, Default)]
pub struct RippleState {
    active: Option<Ripple>,
}

impl RippleState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press at `point` within a host of the given size, replacing
    /// any ripple still showing. The circle is sized to the larger host
    /// dimension so it always covers the element when fully expanded.
    pub fn press(&mut self, point: Point, host: Size) {
        self.active = Some(Ripple {
            center: point,
            diameter: host.width.max(host.height),
            started_at: Instant::now(),
        });
    }

    /// Evicts an expired ripple. Returns `true` while one is still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(ripple) = &self.active {
            if ripple.is_expired(now) {
                self.active = None;
            }
        }
        self.active.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<&Ripple> {
        self.active.as_ref()
    }

    /// Renders the overlay canvas for a host of the given size.
    pub fn view<Message: 'static>(&self, host: Size, now: Instant) -> Element<'_, Message> {
        Canvas::new(RippleOverlay {
            ripple: self.active.clone(),
            now,
        })
        .width(Length::Fixed(host.width))
        .height(Length::Fixed(host.height))
        .into()
    }
}

/// Draw-only canvas program for the expanding circle.
struct RippleOverlay {
    ripple: Option<Ripple>,
    now: Instant,
}

impl<Message> canvas::Program<Message> for RippleOverlay {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some(ripple) = &self.ripple else {
            return Vec::new();
        };

        let progress = ripple.progress(self.now);
        let radius = (ripple.diameter() / 2.0) * progress;
        let alpha = opacity::RIPPLE_PEAK * (1.0 - progress);

        let mut frame = Frame::new(renderer, bounds.size());
        let circle = Path::circle(ripple.center(), radius);
        frame.fill(
            &circle,
            Color {
                a: alpha,
                ..Color::WHITE
            },
        );

        vec![frame.into_geometry()]
    }
}
