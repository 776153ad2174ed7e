// SPDX-License-Identifier: MPL-2.0
//! Submit screen: validated request form with photo preview.
//!
//! The submit button is gated on [`FormState::try_submit`]: an invalid
//! attempt never leaves the screen and asks the app for an error toast,
//! while a valid one enters the loading-button sequence until the
//! asynchronous submission completes. The attached photo is read off the
//! UI thread and scales in once decoded.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::form::{Category, FieldStatus, FormState};
use crate::ui::image_preview::{self, ImagePreview};
use crate::ui::loading_button::LoadingButton;
use crate::ui::styles;
use iced::widget::{button, pick_list, text, text_input, Column, Container, Row};
use iced::{alignment, Border, Element, Length, Theme};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    SiteChanged(String),
    EmailChanged(String),
    QuantityChanged(String),
    NotesChanged(String),
    CategorySelected(Category),
    Submit,
    /// The asynchronous submission finished.
    SubmitFinished,
    AttachPhoto,
    /// Result of the photo picker dialog.
    PhotoPicked(Option<PathBuf>),
    /// Result of reading the picked photo from disk.
    PhotoRead(Result<Vec<u8>, Error>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Submission was suppressed by validation.
    SubmissionInvalid,
    /// A valid submission started; the app runs the async part.
    SubmissionStarted,
    /// The submission completed.
    SubmissionSucceeded,
    /// Open the photo picker dialog.
    PickPhoto,
    /// Read this file for the preview.
    LoadPhoto(PathBuf),
    /// The photo could not be used.
    PhotoFailed,
}

#[derive(Debug)]
pub struct State {
    form: FormState,
    submit: LoadingButton,
    preview: ImagePreview,
}

impl Default for State {
    fn default() -> Self {
        Self {
            form: FormState::new(),
            submit: LoadingButton::new("form-submit"),
            preview: ImagePreview::new(),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::SiteChanged(value) => {
                self.form.site = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.form.email = value;
                Event::None
            }
            Message::QuantityChanged(value) => {
                self.form.quantity = value;
                Event::None
            }
            Message::NotesChanged(value) => {
                self.form.notes = value;
                Event::None
            }
            Message::CategorySelected(category) => {
                self.form.category = Some(category);
                Event::None
            }
            Message::Submit => {
                if self.submit.is_loading() {
                    return Event::None;
                }
                if self.form.try_submit() {
                    self.submit.start();
                    Event::SubmissionStarted
                } else {
                    Event::SubmissionInvalid
                }
            }
            Message::SubmitFinished => {
                self.submit.stop();
                self.form.reset();
                self.preview.clear();
                Event::SubmissionSucceeded
            }
            Message::AttachPhoto => Event::PickPhoto,
            Message::PhotoPicked(None) => Event::None,
            Message::PhotoPicked(Some(path)) => {
                if image_preview::is_supported_image(&path) {
                    Event::LoadPhoto(path)
                } else {
                    Event::PhotoFailed
                }
            }
            Message::PhotoRead(Ok(bytes)) => {
                self.preview.set_bytes(bytes, now);
                Event::None
            }
            Message::PhotoRead(Err(_)) => Event::PhotoFailed,
        }
    }

    /// Advances the submit spinner on each animation tick.
    pub fn tick(&mut self) {
        self.submit.tick();
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submit.is_loading()
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.submit.is_loading() || self.preview.is_animating(now)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
        let title = text(i18n.tr("form-title")).size(typography::TITLE);

        let site = labeled_input(
            i18n,
            "form-site-label",
            "form-site-placeholder",
            &self.form.site,
            self.form.site_status(),
            Message::SiteChanged,
        );
        let email = labeled_input(
            i18n,
            "form-email-label",
            "form-email-placeholder",
            &self.form.email,
            self.form.email_status(),
            Message::EmailChanged,
        );
        let quantity = labeled_input(
            i18n,
            "form-quantity-label",
            "form-quantity-label",
            &self.form.quantity,
            self.form.quantity_status(),
            Message::QuantityChanged,
        );

        let category_label = text(i18n.tr("form-category-label")).size(typography::BODY_SM);
        let category_picker = pick_list(
            Category::ALL,
            self.form.category,
            Message::CategorySelected,
        )
        .padding(spacing::XS)
        .width(Length::Fill);
        let mut category = Column::new()
            .spacing(spacing::XXS)
            .push(category_label)
            .push(category_picker);
        if self.form.category_status() == FieldStatus::Invalid {
            category = category.push(
                text(i18n.tr("form-required-hint"))
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
        }

        let notes = labeled_input(
            i18n,
            "form-notes-label",
            "form-notes-placeholder",
            &self.form.notes,
            FieldStatus::Neutral,
            Message::NotesChanged,
        );

        let attach = button(
            Row::new()
                .spacing(spacing::XXS)
                .push(crate::ui::icons::sized(crate::ui::icons::PHOTO, typography::BODY))
                .push(text(i18n.tr("form-attach-photo")).size(typography::BODY)),
        )
        .on_press(Message::AttachPhoto)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::ghost);

        let mut photo_row = Column::new().spacing(spacing::XS).push(attach);
        if let Some(preview) = self.preview.view(now) {
            photo_row = photo_row.push(preview);
        }

        let submit = self.submit.view(i18n, Message::Submit);

        let form = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .push(site)
            .push(email)
            .push(quantity)
            .push(category)
            .push(notes)
            .push(photo_row)
            .push(submit);

        let card = Container::new(form)
            .padding(spacing::LG)
            .style(styles::container::card);

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(title)
            .push(card)
            .into()
    }
}

/// Builds a labeled input with validation styling and a required hint.
fn labeled_input<'a>(
    i18n: &'a I18n,
    label_key: &'static str,
    placeholder_key: &'static str,
    value: &'a str,
    status: FieldStatus,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let label = text(i18n.tr(label_key)).size(typography::BODY_SM);

    let input = text_input(&i18n.tr(placeholder_key), value)
        .on_input(on_input)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(move |theme: &Theme, input_status| field_style(theme, input_status, status));

    let mut column = Column::new().spacing(spacing::XXS).push(label).push(input);
    if status == FieldStatus::Invalid {
        column = column.push(
            text(i18n.tr("form-required-hint"))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }
    column.into()
}

/// Validation-aware text input style.
fn field_style(
    theme: &Theme,
    input_status: text_input::Status,
    field_status: FieldStatus,
) -> text_input::Style {
    let palette_ext = theme.extended_palette();

    let border_color = match field_status {
        FieldStatus::Neutral => match input_status {
            text_input::Status::Focused { .. } => palette_ext.primary.strong.color,
            _ => palette_ext.background.strong.color,
        },
        FieldStatus::Valid => palette::SUCCESS_500,
        FieldStatus::Invalid => palette::ERROR_500,
    };

    text_input::Style {
        background: iced::Background::Color(palette_ext.background.base.color),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        icon: palette_ext.background.weak.text,
        placeholder: palette_ext.background.strong.text,
        value: palette_ext.background.base.text,
        selection: palette_ext.primary.weak.color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_valid(state: &mut State, now: Instant) {
        let _ = state.update(Message::SiteChanged("Riverside depot".into()), now);
        let _ = state.update(Message::EmailChanged("crew@example.org".into()), now);
        let _ = state.update(Message::CategorySelected(Category::Paper), now);
    }

    #[test]
    fn invalid_submit_is_suppressed() {
        let mut state = State::new();
        let event = state.update(Message::Submit, Instant::now());

        assert!(matches!(event, Event::SubmissionInvalid));
        assert!(!state.is_submitting());
        assert!(state.form().was_validated());
    }

    #[test]
    fn valid_submit_runs_the_loading_sequence() {
        let mut state = State::new();
        let now = Instant::now();
        fill_valid(&mut state, now);

        let event = state.update(Message::Submit, now);
        assert!(matches!(event, Event::SubmissionStarted));
        assert!(state.is_submitting());

        // A second press while loading is ignored.
        assert!(matches!(state.update(Message::Submit, now), Event::None));

        let event = state.update(Message::SubmitFinished, now);
        assert!(matches!(event, Event::SubmissionSucceeded));
        assert!(!state.is_submitting());
        assert!(state.form().site.is_empty());
    }

    #[test]
    fn cancelled_photo_picker_is_a_no_op() {
        let mut state = State::new();
        assert!(matches!(
            state.update(Message::PhotoPicked(None), Instant::now()),
            Event::None
        ));
    }

    #[test]
    fn unsupported_photo_extension_fails() {
        let mut state = State::new();
        let event = state.update(
            Message::PhotoPicked(Some(PathBuf::from("notes.txt"))),
            Instant::now(),
        );
        assert!(matches!(event, Event::PhotoFailed));
    }

    #[test]
    fn supported_photo_requests_a_read() {
        let mut state = State::new();
        let event = state.update(
            Message::PhotoPicked(Some(PathBuf::from("photo.png"))),
            Instant::now(),
        );
        assert!(matches!(event, Event::LoadPhoto(path) if path.ends_with("photo.png")));
    }

    #[test]
    fn read_failure_surfaces_as_photo_failed() {
        let mut state = State::new();
        let event = state.update(
            Message::PhotoRead(Err(Error::Io("permission denied".into()))),
            Instant::now(),
        );
        assert!(matches!(event, Event::PhotoFailed));
    }
}
