// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts appear as small cards with severity-colored accents and a dismiss
//! button, stacked in the top-right corner in call order.

use super::manager::{Manager, Message};
use super::notification::Toast;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Renders a single toast.
fn view<'a>(toast: &'a Toast, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    let severity = toast.severity();
    let accent_color = severity.color();
    let alpha = toast.opacity(now);

    let message_text = if toast.message_args().is_empty() {
        i18n.tr(toast.message_key())
    } else {
        let args: Vec<(&str, &str)> = toast
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(toast.message_key(), &args)
    };

    let icon_widget = icons::sized(severity.icon(), sizing::ICON_MD).style(move |_: &Theme| {
        text::Style {
            color: Some(Color {
                a: alpha,
                ..accent_color
            }),
        }
    });

    let message_widget = text(message_text)
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(Color {
                a: alpha,
                ..theme.palette().text
            }),
        });

    let dismiss_button = button(icons::sized(icons::CROSS, sizing::ICON_SM))
        .on_press(Message::Dismiss(toast.id()))
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    // Layout: [icon] [message] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon_widget).padding(spacing::XXS))
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha))
        .into()
}

/// Renders the overlay with every live toast, stacked top-right.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> = manager
        .visible()
        .map(|toast| view(toast, i18n, now))
        .collect();

    if toasts.is_empty() {
        // An empty container that takes no space
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }
}

/// Style function for the toast card.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = Severity::Success.color();
        let style = toast_container_style(&theme, accent, 1.0);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn overlay_renders_without_panicking() {
        let mut manager = Manager::new();
        manager.push(Toast::success("toast-copy-success"));
        manager.push(Toast::error("toast-copy-error"));
        let i18n = I18n::default();

        let _ = view_overlay(&manager, &i18n, Instant::now());
    }
}
