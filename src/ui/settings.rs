// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language, theme, and motion preferences.
//!
//! Every change is propagated to the parent as an event so the app can
//! apply it and persist the configuration in one place.

use crate::config::{Config, MAX_TOAST_DURATION_SECS, MIN_TOAST_DURATION_SECS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, text, text_input, toggler, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
    ReducedMotionToggled(bool),
    DurationInputChanged(String),
    DurationSubmitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    LanguageChanged(LanguageIdentifier),
    ThemeChanged(ThemeMode),
    ReducedMotionChanged(bool),
    ToastDurationChanged(u64),
}

#[derive(Debug, Default)]
pub struct State {
    duration_input: String,
    duration_error: Option<&'static str>,
}

impl State {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            duration_input: config.toast_duration().as_secs().to_string(),
            duration_error: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
            Message::ThemeSelected(mode) => Event::ThemeChanged(mode),
            Message::ReducedMotionToggled(enabled) => Event::ReducedMotionChanged(enabled),
            Message::DurationInputChanged(value) => {
                self.duration_input = value;
                self.duration_error = None;
                Event::None
            }
            Message::DurationSubmitted => match self.duration_input.trim().parse::<u64>() {
                Ok(secs) => {
                    let clamped = secs.clamp(MIN_TOAST_DURATION_SECS, MAX_TOAST_DURATION_SECS);
                    self.duration_input = clamped.to_string();
                    Event::ToastDurationChanged(clamped)
                }
                Err(_) => {
                    self.duration_error = Some("settings-toast-duration-invalid");
                    Event::None
                }
            },
        }
    }

    #[must_use]
    pub fn duration_error_key(&self) -> Option<&'static str> {
        self.duration_error
    }

    pub fn view<'a>(
        &'a self,
        i18n: &'a I18n,
        config: &'a Config,
    ) -> Element<'a, Message> {
        let title = text(i18n.tr("settings-title")).size(typography::TITLE);

        // Language: one button per available catalog, current one highlighted.
        let mut language_column = Column::new()
            .spacing(spacing::XS)
            .push(text(i18n.tr("settings-language-label")).size(typography::BODY_SM));
        for locale in &i18n.available_locales {
            let translated_name = i18n.tr(&format!("language-name-{locale}"));
            let label = if translated_name.starts_with("MISSING:") {
                locale.to_string()
            } else {
                format!("{translated_name} ({locale})")
            };

            let is_current = i18n.current_locale() == locale;
            let mut locale_button = button(Text::new(label).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM]);
            if is_current {
                locale_button = locale_button.style(styles::button::primary);
            } else {
                locale_button = locale_button
                    .style(styles::button::ghost)
                    .on_press(Message::LanguageSelected(locale.clone()));
            }
            language_column = language_column.push(locale_button);
        }

        // Theme mode picker.
        let theme_row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(text(i18n.tr("settings-theme-label")).size(typography::BODY_SM))
            .push(pick_list(
                ThemeMode::ALL,
                Some(config.general.theme_mode),
                Message::ThemeSelected,
            ));

        // Motion preferences.
        let reduced_motion = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(text(i18n.tr("settings-reduced-motion-label")).size(typography::BODY_SM))
            .push(
                toggler(config.motion.reduced_motion)
                    .on_toggle(Message::ReducedMotionToggled),
            );

        let mut duration_column = Column::new().spacing(spacing::XXS).push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(text(i18n.tr("settings-toast-duration-label")).size(typography::BODY_SM))
                .push(
                    text_input("5", &self.duration_input)
                        .on_input(Message::DurationInputChanged)
                        .on_submit(Message::DurationSubmitted)
                        .padding(spacing::XXS)
                        .width(Length::Fixed(64.0)),
                ),
        );
        if let Some(error_key) = self.duration_error {
            duration_column = duration_column.push(
                text(i18n.tr(error_key))
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
        }

        let card = Container::new(
            Column::new()
                .spacing(spacing::LG)
                .push(language_column)
                .push(theme_row)
                .push(reduced_motion)
                .push(duration_column),
        )
        .padding(spacing::LG)
        .style(styles::container::card);

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(title)
            .push(card)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_duration_submit_is_clamped_and_applied() {
        let mut state = State::new(&Config::default());

        let _ = state.update(Message::DurationInputChanged("90".into()));
        let event = state.update(Message::DurationSubmitted);

        assert!(matches!(
            event,
            Event::ToastDurationChanged(MAX_TOAST_DURATION_SECS)
        ));
        assert_eq!(state.duration_input, MAX_TOAST_DURATION_SECS.to_string());
        assert!(state.duration_error_key().is_none());
    }

    #[test]
    fn invalid_duration_submit_sets_the_error() {
        let mut state = State::new(&Config::default());

        let _ = state.update(Message::DurationInputChanged("soon".into()));
        let event = state.update(Message::DurationSubmitted);

        assert!(matches!(event, Event::None));
        assert_eq!(
            state.duration_error_key(),
            Some("settings-toast-duration-invalid")
        );
    }

    #[test]
    fn editing_clears_the_error() {
        let mut state = State::new(&Config::default());
        let _ = state.update(Message::DurationInputChanged("soon".into()));
        let _ = state.update(Message::DurationSubmitted);

        let _ = state.update(Message::DurationInputChanged("8".into()));
        assert!(state.duration_error_key().is_none());
    }

    #[test]
    fn language_selection_bubbles_up() {
        let mut state = State::new(&Config::default());
        let locale: LanguageIdentifier = "fr".parse().unwrap();
        let event = state.update(Message::LanguageSelected(locale.clone()));
        assert!(matches!(event, Event::LanguageChanged(l) if l == locale));
    }
}
