// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the screens, localization, notifications,
//! and persisted preferences, and translates component events into side
//! effects like clipboard tasks or config persistence. Policy decisions
//! (toast timing, reduced motion, persistence format) stay close to the
//! main update loop so user-facing behavior is easy to audit.

pub mod dialogs;
mod message;
pub mod sample_data;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::alerts::{Alert, Stack as AlertStack};
use crate::ui::notifications::{self, Severity, Toast};
use crate::ui::{dashboard, records, settings, submit_form};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    screen: Screen,
    dashboard: dashboard::State,
    records: records::State,
    submit_form: submit_form::State,
    settings: settings::State,
    notifications: notifications::Manager,
    alerts: AlertStack,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("toasts", &self.notifications.visible_count())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::Dashboard,
            dashboard: dashboard::State::new(),
            records: records::State::new(sample_data::records_table()),
            submit_form: submit_form::State::new(),
            settings: settings::State::new(&config),
            notifications: notifications::Manager::new(),
            alerts: AlertStack::new(),
            config,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from CLI flags and the persisted
    /// configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        if let Some(dir) = &flags.config_dir {
            std::env::set_var("ICED_SPARKLE_CONFIG_DIR", dir);
        }

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            settings: settings::State::new(&config),
            config,
            ..Self::default()
        };

        app.notifications
            .set_display_window(app.config.toast_duration());

        if let Some(key) = config_warning {
            app.notifications.push(Toast::warning(key));
        }

        // The flash-message analog: one page alert announcing fresh data.
        app.alerts.push(Alert::new(Severity::Info, "alert-welcome"));

        app.dashboard
            .enter(Instant::now(), app.config.motion.reduced_motion);

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Dashboard => app_name,
            other => {
                let screen_name = self.i18n.tr(other.tab().label_key());
                format!("{screen_name} - {app_name}")
            }
        }
    }

    fn theme(&self) -> Theme {
        if self.config.general.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let now = Instant::now();
        let animating = self.dashboard.has_active_animations(now)
            || self.records.has_active_animations(now)
            || self.submit_form.has_active_animations(now)
            || self.notifications.has_active_transitions(now);
        let lifecycles_pending = self.notifications.has_notifications()
            || !self.alerts.is_empty()
            || self.records.is_filter_pending();

        subscription::create_tick_subscription(animating, lifecycles_pending)
    }

    fn switch_screen(&mut self, target: Screen) {
        if self.screen == target {
            return;
        }
        self.screen = target;
        if target == Screen::Dashboard {
            self.dashboard
                .enter(Instant::now(), self.config.motion.reduced_motion);
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => update::handle_navbar(self, navbar_message),
            Message::Dashboard(dashboard_message) => {
                update::handle_dashboard(self, dashboard_message)
            }
            Message::Records(records_message) => update::handle_records(self, records_message),
            Message::SubmitForm(form_message) => update::handle_submit_form(self, form_message),
            Message::Settings(settings_message) => update::handle_settings(self, settings_message),
            Message::Notification(notification_message) => {
                self.notifications
                    .handle_message(&notification_message, Instant::now());
                Task::none()
            }
            Message::Alert(alert_message) => {
                self.alerts.handle_message(&alert_message, Instant::now());
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(self, now),
            Message::CopyVerified { expected, found } => {
                update::handle_copy_verified(self, &expected, found)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    // Accessors used by integration tests.

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn alerts(&self) -> &AlertStack {
        &self.alerts
    }

    #[must_use]
    pub fn records(&self) -> &records::State {
        &self.records
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
