// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.

use crate::ui::design_tokens::{motion, palette};
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
///
/// Ids are drawn from a process-wide monotonic counter, so two toasts can
/// never collide no matter how quickly they are created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }

    /// Returns the icon glyph for this severity level.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => crate::ui::icons::CHECKMARK,
            Severity::Error => crate::ui::icons::CROSS,
            Severity::Warning => crate::ui::icons::TRIANGLE,
            Severity::Info => crate::ui::icons::INFO,
        }
    }

    /// Parses a severity name, falling back to [`Severity::Info`] for
    /// anything unrecognized. Useful when the severity originates outside
    /// the type system (e.g., server-provided flash categories).
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Visible,
    /// Fade-out in progress since the contained instant.
    Hiding(Instant),
}

/// A toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    severity: Severity,
    /// The i18n key for the toast message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    created_at: Instant,
    /// Display window override (the manager's window applies otherwise).
    custom_window: Option<Duration>,
    phase: Phase,
}

impl Toast {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
            custom_window: None,
            phase: Phase::Visible,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Overrides the display window for this toast only.
    #[must_use]
    pub fn with_window(mut self, window: Duration) -> Self {
        self.custom_window = Some(window);
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Whether the display window has elapsed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant, default_window: Duration) -> bool {
        let window = self.custom_window.unwrap_or(default_window);
        now.saturating_duration_since(self.created_at) >= window
    }

    /// Starts the fade-out. Idempotent: a toast already hiding keeps its
    /// original fade start so repeated dismissals cannot prolong it.
    pub(super) fn begin_hide(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Visible) {
            self.phase = Phase::Hiding(now);
        }
    }

    #[must_use]
    pub fn is_hiding(&self) -> bool {
        matches!(self.phase, Phase::Hiding(_))
    }

    /// Whether the fade-out has completed and the toast can be removed.
    #[must_use]
    pub(super) fn hide_finished(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Visible => false,
            Phase::Hiding(since) => {
                now.saturating_duration_since(since) >= motion::HIDE_TRANSITION
            }
        }
    }

    /// Render opacity at `now`: a quick entrance ramp, then full, then the
    /// fade-out once hiding.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        const ENTRANCE: Duration = Duration::from_millis(150);

        match self.phase {
            Phase::Visible => {
                let age = now.saturating_duration_since(self.created_at);
                (age.as_secs_f32() / ENTRANCE.as_secs_f32()).min(1.0)
            }
            Phase::Hiding(since) => {
                let fading = now.saturating_duration_since(since);
                (1.0 - fading.as_secs_f32() / motion::HIDE_TRANSITION.as_secs_f32()).max(0.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(5);

    #[test]
    fn toast_ids_are_unique() {
        let a = Toast::success("test");
        let b = Toast::success("test");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Error.color(),
            Severity::Warning.color(),
            Severity::Info.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_severity_name_falls_back_to_info() {
        assert_eq!(Severity::parse("success"), Severity::Success);
        assert_eq!(Severity::parse("danger"), Severity::Info);
        assert_eq!(Severity::parse(""), Severity::Info);
    }

    #[test]
    fn default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn expiry_honors_the_shared_window() {
        let toast = Toast::info("test");
        let created = toast.created_at();

        assert!(!toast.is_expired(created + Duration::from_secs(4), WINDOW));
        assert!(toast.is_expired(created + Duration::from_secs(5), WINDOW));
    }

    #[test]
    fn custom_window_overrides_default() {
        let toast = Toast::info("test").with_window(Duration::from_secs(1));
        let created = toast.created_at();

        assert!(toast.is_expired(created + Duration::from_secs(1), WINDOW));
    }

    #[test]
    fn hide_transition_runs_to_completion() {
        let mut toast = Toast::info("test");
        let now = toast.created_at();

        toast.begin_hide(now);
        assert!(toast.is_hiding());
        assert!(!toast.hide_finished(now + Duration::from_millis(299)));
        assert!(toast.hide_finished(now + Duration::from_millis(300)));
    }

    #[test]
    fn begin_hide_is_idempotent() {
        let mut toast = Toast::info("test");
        let now = toast.created_at();

        toast.begin_hide(now);
        // A later dismissal must not restart the fade.
        toast.begin_hide(now + Duration::from_millis(200));
        assert!(toast.hide_finished(now + Duration::from_millis(300)));
    }

    #[test]
    fn opacity_fades_in_then_out() {
        let mut toast = Toast::info("test");
        let created = toast.created_at();

        assert_eq!(toast.opacity(created), 0.0);
        assert_eq!(toast.opacity(created + Duration::from_secs(1)), 1.0);

        toast.begin_hide(created + Duration::from_secs(5));
        let mid_fade = toast.opacity(created + Duration::from_secs(5) + Duration::from_millis(150));
        assert!(mid_fade > 0.0 && mid_fade < 1.0);
        assert_eq!(
            toast.opacity(created + Duration::from_secs(5) + Duration::from_millis(300)),
            0.0
        );
    }

    #[test]
    fn builder_pattern_collects_args() {
        let toast = Toast::error("toast-preview-error")
            .with_arg("filename", "photo.png")
            .with_arg("size", "1024");

        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "toast-preview-error");
        assert_eq!(toast.message_args().len(), 2);
    }
}
