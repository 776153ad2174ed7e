// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen: animated stat tiles and summary actions.
//!
//! Stat figures count up from zero when the screen is entered, tiles stagger
//! their entrance, and the refresh button carries a press ripple. With
//! reduced motion enabled, counters rest directly at their targets and no
//! entrance plays.

use crate::i18n::fluent::I18n;
use crate::interactions::format::group_digits;
use crate::interactions::Counter;
use crate::ui::design_tokens::{motion, sizing, spacing, typography};
use crate::ui::ripple::RippleState;
use crate::ui::styles;
use iced::widget::{button, mouse_area, text, Column, Container, Row, Stack};
use iced::{alignment, Element, Length, Point, Size, Theme};
use std::time::Instant;

/// Stat tiles shown on the dashboard: label key and target figure.
pub const STATS: [(&str, f64); 4] = [
    ("dashboard-stat-pickups", 12847.0),
    ("dashboard-stat-tonnage", 3204.0),
    ("dashboard-stat-routes", 42.0),
    ("dashboard-stat-requests", 118.0),
];

/// Size of the refresh button, used by the ripple overlay.
const REFRESH_SIZE: Size = Size::new(170.0, sizing::BUTTON_HEIGHT);

#[derive(Debug, Clone)]
pub enum Message {
    /// Restart the count-up animations.
    Refresh,
    /// Cursor position over the refresh button, in button coordinates.
    RefreshCursorMoved(Point),
    CopySummary,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user asked for the stats summary on the clipboard.
    CopySummary,
}

#[derive(Debug)]
pub struct State {
    counters: [Counter; 4],
    refresh_ripple: RippleState,
    ripple_cursor: Point,
    entered_at: Option<Instant>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            counters: std::array::from_fn(|i| Counter::at(STATS[i].1)),
            refresh_ripple: RippleState::new(),
            ripple_cursor: Point::new(REFRESH_SIZE.width / 2.0, REFRESH_SIZE.height / 2.0),
            entered_at: None,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the screen becomes active: arms the entrance stagger and
    /// the count-up animations.
    pub fn enter(&mut self, now: Instant, reduced_motion: bool) {
        self.entered_at = Some(now);
        self.start_counters(reduced_motion);
    }

    fn start_counters(&mut self, reduced_motion: bool) {
        for (counter, (_, target)) in self.counters.iter_mut().zip(STATS) {
            if reduced_motion {
                *counter = Counter::at(target);
            } else {
                counter.start(target, motion::COUNTER);
            }
        }
    }

    pub fn update(&mut self, message: Message, reduced_motion: bool) -> Event {
        match message {
            Message::Refresh => {
                if !reduced_motion {
                    self.refresh_ripple.press(self.ripple_cursor, REFRESH_SIZE);
                }
                self.start_counters(reduced_motion);
                Event::None
            }
            Message::RefreshCursorMoved(position) => {
                self.ripple_cursor = position;
                Event::None
            }
            Message::CopySummary => Event::CopySummary,
        }
    }

    /// Advances counters and the ripple on each animation tick.
    pub fn tick(&mut self, now: Instant) {
        for counter in &mut self.counters {
            counter.tick();
        }
        self.refresh_ripple.tick(now);
    }

    #[must_use]
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.counters.iter().any(Counter::is_running)
            || self.refresh_ripple.active().is_some()
            || self.entrance_window_open(now)
    }

    fn entrance_window_open(&self, now: Instant) -> bool {
        self.entered_at.is_some_and(|at| {
            now.saturating_duration_since(at)
                < motion::ENTRANCE + motion::STAGGER_STEP * (STATS.len() as u32)
        })
    }

    /// Current figures, for the clipboard summary.
    #[must_use]
    pub fn figures(&self) -> [i64; 4] {
        std::array::from_fn(|i| self.counters[i].display_value())
    }

    /// Entrance opacity of the tile at `index`, honoring the stagger.
    fn tile_opacity(&self, index: usize, now: Instant) -> f32 {
        let Some(entered) = self.entered_at else {
            return 1.0;
        };
        let delay = motion::STAGGER_STEP * (index as u32);
        let since = now.saturating_duration_since(entered);
        let Some(local) = since.checked_sub(delay) else {
            return 0.0;
        };
        (local.as_secs_f32() / motion::ENTRANCE.as_secs_f32()).min(1.0)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
        let title = text(i18n.tr("dashboard-title")).size(typography::TITLE);

        let mut tiles = Row::new().spacing(spacing::MD);
        for (index, (label_key, _)) in STATS.into_iter().enumerate() {
            tiles = tiles.push(self.view_tile(i18n, index, label_key, now));
        }

        let refresh = self.view_refresh(i18n, now);

        let copy_summary = button(
            text(i18n.tr("dashboard-copy-summary")).size(typography::BODY),
        )
        .on_press(Message::CopySummary)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::ghost);

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(refresh)
            .push(copy_summary);

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(title)
            .push(tiles)
            .push(actions)
            .into()
    }

    fn view_tile<'a>(
        &'a self,
        i18n: &'a I18n,
        index: usize,
        label_key: &'static str,
        now: Instant,
    ) -> Element<'a, Message> {
        let alpha = self.tile_opacity(index, now);

        let value = text(group_digits(self.counters[index].display_value()))
            .size(typography::STAT_VALUE)
            .style(move |theme: &Theme| text::Style {
                color: Some(iced::Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            });

        let label = text(i18n.tr(label_key))
            .size(typography::BODY_SM)
            .style(move |theme: &Theme| text::Style {
                color: Some(iced::Color {
                    a: alpha,
                    ..theme.extended_palette().background.strong.text
                }),
            });

        let content = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(value)
            .push(label);

        let tile = Container::new(content)
            .width(Length::Fixed(sizing::STAT_TILE_WIDTH))
            .height(Length::Fixed(sizing::STAT_TILE_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::card);

        // Hover popover with the figure's provenance.
        let detail = Column::new()
            .spacing(spacing::XXS)
            .push(text(i18n.tr(label_key)).size(typography::BODY_SM))
            .push(text(i18n.tr("dashboard-stat-detail")).size(typography::CAPTION));

        styles::tooltip::rich(tile, detail, styles::tooltip::Position::Bottom).into()
    }

    fn view_refresh<'a>(&'a self, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
        let label = Container::new(text(i18n.tr("dashboard-refresh")).size(typography::BODY))
            .width(Length::Fixed(REFRESH_SIZE.width))
            .height(Length::Fixed(REFRESH_SIZE.height))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        // The ripple canvas sits over the label but ignores pointer events,
        // so the button still receives the press.
        let content = Stack::new()
            .push(label)
            .push(self.refresh_ripple.view(REFRESH_SIZE, now));

        let refresh_button = button(content)
            .on_press(Message::Refresh)
            .padding(0.0)
            .style(styles::button::primary);

        mouse_area(refresh_button)
            .on_move(Message::RefreshCursorMoved)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_starts_all_counters() {
        let mut state = State::new();
        state.enter(Instant::now(), false);
        assert!(state.has_active_animations(Instant::now()));

        // Run every counter to completion.
        for _ in 0..200 {
            state.tick(Instant::now());
        }
        assert_eq!(state.figures(), [12847, 3204, 42, 118]);
    }

    #[test]
    fn reduced_motion_skips_the_count_up() {
        let mut state = State::new();
        state.enter(Instant::now(), true);
        assert_eq!(state.figures(), [12847, 3204, 42, 118]);
    }

    #[test]
    fn refresh_restarts_counters_and_presses_the_ripple() {
        let mut state = State::new();
        state.enter(Instant::now(), false);
        for _ in 0..200 {
            state.tick(Instant::now());
        }

        let _ = state.update(Message::Refresh, false);
        assert_eq!(state.figures()[0], 0);
        assert!(state.refresh_ripple.active().is_some());
    }

    #[test]
    fn reduced_motion_refresh_skips_the_ripple() {
        let mut state = State::new();
        let _ = state.update(Message::Refresh, true);
        assert!(state.refresh_ripple.active().is_none());
        assert_eq!(state.figures(), [12847, 3204, 42, 118]);
    }

    #[test]
    fn tile_opacity_staggers_by_index() {
        let mut state = State::new();
        let now = Instant::now();
        state.enter(now, false);

        let at = now + motion::STAGGER_STEP;
        // First tile has been fading for a full stagger step; the second
        // starts just now; the third is still waiting.
        assert!(state.tile_opacity(0, at) > 0.0);
        assert_eq!(state.tile_opacity(2, at), 0.0);
    }

    #[test]
    fn copy_summary_bubbles_up() {
        let mut state = State::new();
        assert!(matches!(
            state.update(Message::CopySummary, false),
            Event::CopySummary
        ));
    }
}
