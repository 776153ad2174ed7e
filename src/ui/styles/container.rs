// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Card surface for tiles and panels.
///
/// The color is derived from the active Iced `Theme` background so cards stay
/// readable in both light and dark modes without hard-coding colors.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Navigation bar surface; `elevated` adds the scrolled shadow state.
pub fn navbar(theme: &Theme, elevated: bool) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(if elevated {
            palette.background.weak.color
        } else {
            palette.background.base.color
        })),
        shadow: if elevated { shadow::MD } else { shadow::NONE },
        ..Default::default()
    }
}
