// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns every live toast: it appends new ones in call order,
//! starts their fade-out when the display window elapses or the user
//! dismisses them, and removes them once the fade completes. There is no
//! visible-count cap and no queue; a burst of pushes simply stacks.

use super::notification::{Toast, ToastId};
use crate::config::DEFAULT_TOAST_DURATION_SECS;
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
}

/// Owns the toast stack and its timing.
#[derive(Debug)]
pub struct Manager {
    /// Live toasts in call order (oldest first). Entries in their fade-out
    /// remain here until the transition completes.
    toasts: Vec<Toast>,
    /// Shared display window applied to toasts without an override.
    display_window: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self {
            toasts: Vec::new(),
            display_window: Duration::from_secs(DEFAULT_TOAST_DURATION_SECS),
        }
    }
}

impl Manager {
    /// Creates a new empty manager with the default display window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the shared display window (from user settings). Applies to
    /// toasts pushed afterwards as well as ones already showing.
    pub fn set_display_window(&mut self, window: Duration) {
        self.display_window = window;
    }

    #[must_use]
    pub fn display_window(&self) -> Duration {
        self.display_window
    }

    /// Appends a toast to the stack. Fire-and-forget: the toast takes care
    /// of its own lifecycle from here.
    pub fn push(&mut self, toast: Toast) {
        tracing::debug!(key = toast.message_key(), "toast pushed");
        self.toasts.push(toast);
    }

    /// Starts the fade-out of a toast by ID.
    ///
    /// Returns `true` if the toast was found and not already hiding.
    pub fn dismiss(&mut self, id: ToastId, now: Instant) -> bool {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id() == id) {
            if !toast.is_hiding() {
                toast.begin_hide(now);
                return true;
            }
        }
        false
    }

    /// Advances toast lifecycles: expired toasts start fading, finished
    /// fades are removed. Driven by the application tick subscription.
    pub fn tick(&mut self, now: Instant) {
        let window = self.display_window;
        for toast in &mut self.toasts {
            if !toast.is_hiding() && toast.is_expired(now, window) {
                toast.begin_hide(now);
            }
        }
        self.toasts.retain(|toast| !toast.hide_finished(now));
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    /// Live toasts in call order, fading ones included.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Whether any toast is currently animating its entrance or fade-out,
    /// which requires the fine-grained tick cadence.
    #[must_use]
    pub fn has_active_transitions(&self, now: Instant) -> bool {
        self.toasts.iter().any(|toast| {
            toast.is_hiding()
                || now.saturating_duration_since(toast.created_at())
                    < Duration::from_millis(150)
        })
    }

    /// Removes every toast immediately, without transitions.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}
