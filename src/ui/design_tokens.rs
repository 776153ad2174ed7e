// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Animation timing

## Examples

```
use iced_sparkle::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (green scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.73, 0.89, 0.78);
    pub const PRIMARY_400: Color = Color::from_rgb(0.36, 0.72, 0.5);
    pub const PRIMARY_500: Color = Color::from_rgb(0.22, 0.6, 0.4);
    pub const PRIMARY_600: Color = Color::from_rgb(0.16, 0.5, 0.34);
    pub const PRIMARY_700: Color = Color::from_rgb(0.12, 0.4, 0.28);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Peak opacity of a ripple overlay at press time.
    pub const RIPPLE_PEAK: f32 = 0.35;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 340.0;
    pub const ALERT_HEIGHT: f32 = 52.0;
    pub const STAT_TILE_WIDTH: f32 = 180.0;
    pub const STAT_TILE_HEIGHT: f32 = 110.0;
    pub const FORM_WIDTH: f32 = 420.0;
    pub const PREVIEW_MAX_HEIGHT: f32 = 220.0;
    pub const NAVBAR_HEIGHT: f32 = 56.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY_SM: f32 = 13.0;
    pub const BODY: f32 = 15.0;
    pub const SUBTITLE: f32 = 18.0;
    pub const TITLE: f32 = 24.0;
    pub const STAT_VALUE: f32 = 30.0;
}

// ============================================================================
// Border & Radius
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.15,
        },
        offset: Vector::new(0.0, 1.0),
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.25,
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Fine-grained tick for running animations (~60 fps).
    pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

    /// Coarse tick for lifecycle expiry (toast/alert windows, debounce).
    pub const LIFECYCLE_TICK: Duration = Duration::from_millis(100);

    /// Fade-out played before a toast or alert is removed.
    pub const HIDE_TRANSITION: Duration = Duration::from_millis(300);

    /// Entrance fade for screens, cards, and revealed sections.
    pub const ENTRANCE: Duration = Duration::from_millis(350);

    /// Per-card entrance stagger on the dashboard.
    pub const STAGGER_STEP: Duration = Duration::from_millis(100);

    /// Expand-and-fade window of a ripple.
    pub const RIPPLE: Duration = Duration::from_millis(600);

    /// Default count-up duration for stat counters.
    pub const COUNTER: Duration = Duration::from_millis(2000);

    /// Quiet window for the records search debouncer.
    pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

    /// How long page alerts stay before auto-closing.
    pub const ALERT_LINGER: Duration = Duration::from_secs(5);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_its_ratios() {
        assert_eq!(spacing::XS * 2.0, spacing::MD);
        assert_eq!(spacing::MD * 2.0, spacing::XL);
        assert_eq!(spacing::XXS * 2.0, spacing::XS);
    }

    #[test]
    fn semantic_colors_are_distinct() {
        let colors = [
            palette::ERROR_500,
            palette::WARNING_500,
            palette::SUCCESS_500,
            palette::INFO_500,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn lifecycle_tick_is_coarser_than_animation_tick() {
        assert!(motion::LIFECYCLE_TICK > motion::ANIMATION_TICK);
    }

    #[test]
    fn hide_transition_is_shorter_than_alert_linger() {
        assert!(motion::HIDE_TRANSITION < motion::ALERT_LINGER);
    }
}
