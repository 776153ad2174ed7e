// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{alerts, dashboard, navbar, notifications, records, settings, submit_form};
use std::sync::Arc;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Dashboard(dashboard::Message),
    Records(records::Message),
    SubmitForm(submit_form::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    Alert(alerts::Message),
    /// Periodic tick driving every animation and lifecycle.
    Tick(Instant),
    /// Clipboard read-back after a copy, compared against what was written.
    CopyVerified {
        expected: String,
        found: Result<Arc<String>, iced::clipboard::Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SPARKLE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
