// SPDX-License-Identifier: MPL-2.0
//! Centralized glyph icons.
//!
//! Icons are rendered as text glyphs rather than bitmaps so they inherit
//! the surrounding text color and scale with the typography system.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `trash` not `delete_record`).

use iced::widget::{text, Text};

pub const CHECKMARK: &str = "✓";
pub const CROSS: &str = "✕";
pub const TRIANGLE: &str = "▲";
pub const INFO: &str = "ℹ";
pub const SEARCH: &str = "🔍";
pub const CLIPBOARD: &str = "📋";
pub const TRASH: &str = "🗑";
pub const ARROW_UP: &str = "↑";
pub const PHOTO: &str = "📷";

/// Builds a glyph sized to the given icon size.
pub fn sized<'a>(glyph: &'a str, size: f32) -> Text<'a> {
    text(glyph).size(size)
}
