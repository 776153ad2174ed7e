// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: navbar, alerts, the active screen, and the toast
//! overlay stacked above everything.

use super::{App, Message, Screen};
use crate::ui::design_tokens::spacing;
use crate::ui::{alerts, navbar, notifications};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let now = Instant::now();

    let elevated = app.screen == Screen::Records && app.records.navbar_elevated();
    let navbar = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        active: app.screen.tab(),
        elevated,
    })
    .map(Message::Navbar);

    let alerts_view = if app.alerts.is_empty() {
        None
    } else {
        Some(
            Container::new(alerts::view(&app.alerts, &app.i18n, now).map(Message::Alert))
                .padding([spacing::XS, spacing::LG]),
        )
    };

    let content: Element<'_, Message> = match app.screen {
        Screen::Dashboard => app.dashboard.view(&app.i18n, now).map(Message::Dashboard),
        Screen::Records => app.records.view(&app.i18n, now).map(Message::Records),
        Screen::Submit => app.submit_form.view(&app.i18n, now).map(Message::SubmitForm),
        Screen::Settings => app
            .settings
            .view(&app.i18n, &app.config)
            .map(Message::Settings),
    };

    let mut base = Column::new().push(navbar);
    if let Some(alerts_view) = alerts_view {
        base = base.push(alerts_view);
    }
    base = base.push(content);

    let toast_overlay =
        notifications::view_overlay(&app.notifications, &app.i18n, now).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(toast_overlay)
        .into()
}
