// SPDX-License-Identifier: MPL-2.0
//! Asynchronously loaded image preview with a scale-in entrance.

use crate::ui::design_tokens::{motion, sizing};
use iced::widget::image::{Handle, Image};
use iced::Length;
use std::path::Path;
use std::time::Instant;

/// Extensions the picker offers and the loader accepts.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Whether a path looks like a supported image.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

#[derive(Debug, Default)]
pub struct ImagePreview {
    handle: Option<Handle>,
    shown_at: Option<Instant>,
}

impl ImagePreview {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows loaded image bytes, restarting the entrance animation.
    pub fn set_bytes(&mut self, bytes: Vec<u8>, now: Instant) {
        self.handle = Some(Handle::from_bytes(bytes));
        self.shown_at = Some(now);
    }

    pub fn clear(&mut self) {
        self.handle = None;
        self.shown_at = None;
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.handle.is_some()
    }

    /// Scale-in progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.shown_at {
            None => 0.0,
            Some(at) => {
                let elapsed = now.saturating_duration_since(at);
                (elapsed.as_secs_f32() / motion::ENTRANCE.as_secs_f32()).min(1.0)
            }
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.shown_at
            .is_some_and(|at| now.saturating_duration_since(at) < motion::ENTRANCE)
    }

    /// Renders the preview, scaled in by entrance progress. Returns `None`
    /// when no image is loaded so callers can skip the slot entirely.
    pub fn view(&self, now: Instant) -> Option<Image<Handle>> {
        let handle = self.handle.as_ref()?;
        let progress = self.progress(now);
        // Ease the height up; width follows the aspect ratio.
        let eased = 1.0 - (1.0 - progress).powi(2);
        let height = sizing::PREVIEW_MAX_HEIGHT * eased.max(0.05);

        Some(
            Image::new(handle.clone())
                .width(Length::Shrink)
                .height(Length::Fixed(height)),
        )
    }
}
