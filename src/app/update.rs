// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Cross-cutting effects live here: component events are translated into
//! toasts, clipboard tasks, confirm dialogs, and config persistence, so the
//! screen components stay free of application policy.

use super::{dialogs, App, Message};
use crate::config;
use crate::interactions::format::group_digits;
use crate::ui::image_preview::SUPPORTED_EXTENSIONS;
use crate::ui::notifications::Toast;
use crate::ui::{dashboard, navbar, records, settings, submit_form};
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Task;
use std::time::{Duration, Instant};

/// Simulated latency of the asynchronous submission.
const SUBMIT_LATENCY: Duration = Duration::from_millis(1200);

pub(super) fn handle_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::Navigate(tab) => {
            app.switch_screen(tab.into());
            Task::none()
        }
    }
}

pub(super) fn handle_dashboard(app: &mut App, message: dashboard::Message) -> Task<Message> {
    let reduced_motion = app.config.motion.reduced_motion;
    match app.dashboard.update(message, reduced_motion) {
        dashboard::Event::None => Task::none(),
        dashboard::Event::CopySummary => {
            let [pickups, tonnage, routes, requests] = app.dashboard.figures();
            let summary = app.i18n.tr_with_args(
                "dashboard-summary",
                &[
                    ("pickups", group_digits(pickups).as_str()),
                    ("tonnage", group_digits(tonnage).as_str()),
                    ("routes", group_digits(routes).as_str()),
                    ("requests", group_digits(requests).as_str()),
                ],
            );
            copy_to_clipboard(summary)
        }
    }
}

pub(super) fn handle_records(app: &mut App, message: records::Message) -> Task<Message> {
    let reduced_motion = app.config.motion.reduced_motion;
    match app.records.update(message, Instant::now(), reduced_motion) {
        records::Event::None => Task::none(),
        records::Event::CopyText(text) => copy_to_clipboard(text),
        records::Event::RequestDelete(index) => {
            // Blocks until the user answers; the boolean gates the removal.
            if dialogs::confirm_delete(&app.i18n, None) {
                app.records.delete_confirmed(index);
                app.notifications.push(Toast::success("toast-record-deleted"));
            }
            Task::none()
        }
        records::Event::ScrollTo(offset) => operation::scroll_to(
            records::State::scroll_id(),
            AbsoluteOffset { x: 0.0, y: offset },
        ),
    }
}

pub(super) fn handle_submit_form(app: &mut App, message: submit_form::Message) -> Task<Message> {
    match app.submit_form.update(message, Instant::now()) {
        submit_form::Event::None => Task::none(),
        submit_form::Event::SubmissionInvalid => {
            app.notifications.push(Toast::error("toast-form-invalid"));
            Task::none()
        }
        submit_form::Event::SubmissionStarted => Task::perform(
            tokio::time::sleep(SUBMIT_LATENCY),
            |()| Message::SubmitForm(submit_form::Message::SubmitFinished),
        ),
        submit_form::Event::SubmissionSucceeded => {
            app.notifications
                .push(Toast::success("toast-submit-success"));
            Task::none()
        }
        submit_form::Event::PickPhoto => Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .add_filter("Images", &SUPPORTED_EXTENSIONS)
                    .pick_file()
                    .await
                    .map(|file| file.path().to_path_buf())
            },
            |path| Message::SubmitForm(submit_form::Message::PhotoPicked(path)),
        ),
        submit_form::Event::LoadPhoto(path) => Task::perform(
            async move {
                tokio::fs::read(&path)
                    .await
                    .map_err(crate::error::Error::from)
            },
            |result| Message::SubmitForm(submit_form::Message::PhotoRead(result)),
        ),
        submit_form::Event::PhotoFailed => {
            app.notifications.push(Toast::error("toast-preview-error"));
            Task::none()
        }
    }
}

pub(super) fn handle_settings(app: &mut App, message: settings::Message) -> Task<Message> {
    match app.settings.update(message) {
        settings::Event::None => {}
        settings::Event::LanguageChanged(locale) => {
            app.i18n.set_locale(locale.clone());
            app.config.general.language = Some(locale.to_string());
            persist_config(app);
        }
        settings::Event::ThemeChanged(mode) => {
            app.config.general.theme_mode = mode;
            persist_config(app);
        }
        settings::Event::ReducedMotionChanged(enabled) => {
            app.config.motion.reduced_motion = enabled;
            persist_config(app);
        }
        settings::Event::ToastDurationChanged(secs) => {
            app.config.motion.toast_duration_secs = Some(secs);
            app.notifications
                .set_display_window(app.config.toast_duration());
            persist_config(app);
        }
    }
    Task::none()
}

/// Advances every animation and lifecycle on the shared tick.
pub(super) fn handle_tick(app: &mut App, now: Instant) -> Task<Message> {
    app.notifications.tick(now);
    app.alerts.tick(now);
    app.dashboard.tick(now);
    app.submit_form.tick();

    if let Some(offset) = app.records.tick(now) {
        return operation::scroll_to(
            records::State::scroll_id(),
            AbsoluteOffset { x: 0.0, y: offset },
        );
    }
    Task::none()
}

/// Writes the text to the clipboard and reads it back; the comparison
/// drives the success/error toast, since the write task itself reports
/// nothing.
pub(super) fn copy_to_clipboard(text: String) -> Task<Message> {
    let expected = text.clone();
    iced::clipboard::write_text(text).chain(iced::clipboard::read_text().map(move |found| {
        Message::CopyVerified {
            expected: expected.clone(),
            found,
        }
    }))
}

pub(super) fn handle_copy_verified(
    app: &mut App,
    expected: &str,
    found: Result<std::sync::Arc<String>, iced::clipboard::Error>,
) -> Task<Message> {
    match found {
        Ok(content) if content.as_str() == expected => {
            app.notifications.push(Toast::success("toast-copy-success"));
        }
        other => {
            tracing::warn!(?other, "clipboard write could not be confirmed");
            app.notifications.push(Toast::error("toast-copy-error"));
        }
    }
    Task::none()
}

fn persist_config(app: &mut App) {
    if let Err(error) = config::save(&app.config) {
        tracing::warn!(%error, "failed to persist settings");
        app.notifications
            .push(Toast::warning("toast-config-save-warning"));
    }
}
