// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (copy success, validation errors, etc.) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Toast` struct with severity levels
//! - [`manager`] - `Manager` owning the visible stack and its lifecycle
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Severity, Toast};
//!
//! let mut manager = Manager::new();
//! manager.push(Toast::success("toast-copy-success"));
//!
//! // In your view function, render the overlay
//! let overlay = toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! # Behavior
//!
//! - Every toast shares one fixed display window (5 s by default, configurable)
//! - Toasts stack in call order with no cap and no queue
//! - Dismissal (expiry or the close button) plays a short fade-out before the
//!   entry is removed, so nothing lingers in the manager afterwards
//! - Position: top-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Severity, Toast, ToastId};
pub use toast::view_overlay;
