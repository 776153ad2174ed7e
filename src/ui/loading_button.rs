// SPDX-License-Identifier: MPL-2.0
//! Busy-state wrapper for action buttons.
//!
//! While loading, the button swaps its label for a spinner plus a localized
//! "Loading…" text and refuses presses; stopping restores the original
//! label. The label key is held by the state, so the restoration cannot
//! drift out of sync with what the button showed before.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::spinner::{Spinner, ROTATION_STEP};
use crate::ui::styles;
use iced::widget::{button, text, Row};
use iced::{alignment, Element, Length};

#[derive(Debug)]
pub struct LoadingButton {
    label_key: &'static str,
    loading: bool,
    rotation: f32,
}

impl LoadingButton {
    #[must_use]
    pub fn new(label_key: &'static str) -> Self {
        Self {
            label_key,
            loading: false,
            rotation: 0.0,
        }
    }

    /// Enters the busy state; presses are ignored until [`Self::stop`].
    pub fn start(&mut self) {
        self.loading = true;
        self.rotation = 0.0;
    }

    /// Leaves the busy state, restoring the original label.
    pub fn stop(&mut self) {
        self.loading = false;
    }

    /// Advances the spinner on each animation tick.
    pub fn tick(&mut self) {
        if self.loading {
            self.rotation = (self.rotation + ROTATION_STEP) % (2.0 * std::f32::consts::PI);
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn label_key(&self) -> &'static str {
        self.label_key
    }

    /// Renders the button; `on_press` is only attached while idle.
    pub fn view<'a, Message: Clone + 'static>(
        &'a self,
        i18n: &'a I18n,
        on_press: Message,
    ) -> Element<'a, Message> {
        if self.loading {
            let spinner =
                Spinner::new(palette::WHITE, self.rotation, sizing::ICON_SM).into_element();
            let content = Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(spinner)
                .push(text(i18n.tr("loading-label")).size(typography::BODY));

            button(content)
                .padding([spacing::XS, spacing::MD])
                .width(Length::Shrink)
                .style(styles::button::primary)
                .into()
        } else {
            button(text(i18n.tr(self.label_key)).size(typography::BODY))
                .on_press(on_press)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_restores_the_original_label() {
        let mut loading = LoadingButton::new("form-submit");
        loading.start();
        assert!(loading.is_loading());

        loading.stop();
        assert!(!loading.is_loading());
        assert_eq!(loading.label_key(), "form-submit");
    }

    #[test]
    fn spinner_only_advances_while_loading() {
        let mut loading = LoadingButton::new("form-submit");
        loading.tick();
        assert_eq!(loading.rotation, 0.0);

        loading.start();
        loading.tick();
        assert!(loading.rotation > 0.0);
    }

    #[test]
    fn restart_resets_the_spinner() {
        let mut loading = LoadingButton::new("form-submit");
        loading.start();
        loading.tick();
        loading.stop();
        loading.start();
        assert_eq!(loading.rotation, 0.0);
    }
}
