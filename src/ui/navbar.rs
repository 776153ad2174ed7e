// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Hosts the screen tabs and the scroll elevation effect: once the content
//! below has scrolled past a small threshold, the bar picks up a shadow and
//! a stronger background so it reads as floating above the content.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Container, Row};
use iced::{alignment, Element, Length, Theme};

/// Scroll offset (px) past which the bar becomes elevated.
pub const SCROLL_THRESHOLD: f32 = 50.0;

/// Navigation tabs, one per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Records,
    Submit,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Records, Tab::Submit, Tab::Settings];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Dashboard => "nav-dashboard",
            Tab::Records => "nav-records",
            Tab::Submit => "nav-submit",
            Tab::Settings => "nav-settings",
        }
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Tab),
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Tab,
    pub elevated: bool,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut tabs = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    for tab in Tab::ALL {
        let label = text(ctx.i18n.tr(tab.label_key())).size(typography::BODY);
        let mut tab_button = button(label).padding([spacing::XS, spacing::MD]);

        if tab == ctx.active {
            tab_button = tab_button.style(styles::button::primary);
        } else {
            tab_button = tab_button
                .style(styles::button::ghost)
                .on_press(Message::Navigate(tab));
        }

        tabs = tabs.push(tab_button);
    }

    let brand = text(ctx.i18n.tr("window-title")).size(typography::SUBTITLE);

    let content = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(brand)
        .push(tabs);

    let elevated = ctx.elevated;
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .style(move |theme: &Theme| styles::container::navbar(theme, elevated))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_has_a_distinct_label_key() {
        let keys: Vec<_> = Tab::ALL.iter().map(|t| t.label_key()).collect();
        let mut deduped = keys.clone();
        deduped.dedup();
        assert_eq!(keys.len(), 4);
        assert_eq!(keys, deduped);
    }

    #[test]
    fn navbar_renders_without_panicking() {
        let i18n = I18n::default();
        let _ = view(ViewContext {
            i18n: &i18n,
            active: Tab::Dashboard,
            elevated: true,
        });
    }
}
