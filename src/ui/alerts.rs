// SPDX-License-Identifier: MPL-2.0
//! Auto-hiding page alerts.
//!
//! Alerts are the banner counterpart to toasts: they announce page-level
//! information (schedule changes, maintenance notes) inline at the top of a
//! screen, animate in on creation, and close themselves after a fixed linger
//! window via a short fade-out. The user can close them earlier with the
//! dismiss button; both paths end with the entry removed from the stack.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{motion, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Severity;
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Unique identifier for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(u64);

impl AlertId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct Alert {
    id: AlertId,
    severity: Severity,
    message_key: String,
    created_at: Instant,
    closing_since: Option<Instant>,
}

impl Alert {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: AlertId::new(),
            severity,
            message_key: message_key.into(),
            created_at: Instant::now(),
            closing_since: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    fn begin_close(&mut self, now: Instant) {
        if self.closing_since.is_none() {
            self.closing_since = Some(now);
        }
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.closing_since.is_some()
    }

    fn close_finished(&self, now: Instant) -> bool {
        self.closing_since.is_some_and(|since| {
            now.saturating_duration_since(since) >= motion::HIDE_TRANSITION
        })
    }

    /// Entrance then fade-out opacity, mirroring the toast ramp.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.closing_since {
            None => {
                let age = now.saturating_duration_since(self.created_at);
                (age.as_secs_f32() / motion::ENTRANCE.as_secs_f32()).min(1.0)
            }
            Some(since) => {
                let fading = now.saturating_duration_since(since);
                (1.0 - fading.as_secs_f32() / motion::HIDE_TRANSITION.as_secs_f32()).max(0.0)
            }
        }
    }
}

/// The set of live alerts on the current screen.
#[derive(Debug, Default)]
pub struct Stack {
    alerts: Vec<Alert>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(AlertId),
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    pub fn dismiss(&mut self, id: AlertId, now: Instant) {
        if let Some(alert) = self.alerts.iter_mut().find(|a| a.id() == id) {
            alert.begin_close(now);
        }
    }

    /// Advances lingering and fading alerts; finished ones are removed.
    pub fn tick(&mut self, now: Instant) {
        for alert in &mut self.alerts {
            let lingered =
                now.saturating_duration_since(alert.created_at) >= motion::ALERT_LINGER;
            if !alert.is_closing() && lingered {
                alert.begin_close(now);
            }
        }
        self.alerts.retain(|alert| !alert.close_finished(now));
    }

    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => self.dismiss(*id, now),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

/// Renders the alert banners, newest last.
pub fn view<'a>(stack: &'a Stack, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    let banners: Vec<Element<'a, Message>> = stack
        .iter()
        .map(|alert| view_banner(alert, i18n, now))
        .collect();

    Column::with_children(banners)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .into()
}

fn view_banner<'a>(alert: &'a Alert, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    let alpha = alert.opacity(now);
    let accent = alert.severity.color();

    let message = text(i18n.tr(alert.message_key()))
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(Color {
                a: alpha,
                ..theme.palette().text
            }),
        });

    let dismiss = button(icons::sized(icons::CROSS, sizing::ICON_SM))
        .on_press(Message::Dismiss(alert.id()))
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(message).width(Length::Fill))
        .push(dismiss);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ALERT_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: 0.12 * alpha,
                ..accent
            })),
            border: iced::Border {
                color: Color { a: alpha, ..accent },
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn alert_lingers_then_closes_itself() {
        let mut stack = Stack::new();
        let alert = Alert::new(Severity::Info, "alert-welcome");
        let created = alert.created_at();
        stack.push(alert);

        stack.tick(created + Duration::from_secs(4));
        assert_eq!(stack.len(), 1);
        assert!(!stack.iter().next().unwrap().is_closing());

        let linger_end = created + motion::ALERT_LINGER;
        stack.tick(linger_end);
        assert!(stack.iter().next().unwrap().is_closing());

        stack.tick(linger_end + motion::HIDE_TRANSITION);
        assert!(stack.is_empty());
    }

    #[test]
    fn manual_dismiss_takes_the_same_fade_path() {
        let mut stack = Stack::new();
        let alert = Alert::new(Severity::Warning, "alert-welcome");
        let id = alert.id();
        let created = alert.created_at();
        stack.push(alert);

        stack.dismiss(id, created + Duration::from_secs(1));
        assert!(stack.iter().next().unwrap().is_closing());

        stack.tick(created + Duration::from_secs(1) + motion::HIDE_TRANSITION);
        assert!(stack.is_empty());
    }

    #[test]
    fn alert_ids_are_unique() {
        let a = Alert::new(Severity::Info, "x");
        let b = Alert::new(Severity::Info, "x");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn opacity_ramps_in() {
        let alert = Alert::new(Severity::Info, "alert-welcome");
        let created = alert.created_at();
        assert_eq!(alert.opacity(created), 0.0);
        assert_eq!(alert.opacity(created + Duration::from_secs(2)), 1.0);
    }
}
