// SPDX-License-Identifier: MPL-2.0
//! Records screen: debounced search over the collection table.
//!
//! Keystrokes land in a [`Debouncer`] and only reach the table filter after
//! the quiet window, so fast typing costs one rescan instead of one per
//! character. The screen also owns the smooth back-to-top scroll, the navbar
//! elevation threshold, and a fire-once reveal for the footer section.

use crate::i18n::fluent::I18n;
use crate::interactions::{Debouncer, ScrollAnimation};
use crate::ui::data_table::DataTable;
use crate::ui::design_tokens::{motion, spacing, typography};
use crate::ui::icons;
use crate::ui::navbar;
use crate::ui::reveal::Reveal;
use crate::ui::styles;
use crate::ui::styles::tooltip::Position;
use iced::widget::scrollable::Viewport;
use iced::widget::Id;
use iced::widget::{button, text, text_input, Column, Container, Row, Scrollable};
use iced::{alignment, Element, Length, Theme};
use std::time::Instant;

/// Content-coordinate top of the footer section, for the reveal trigger.
const FOOTER_SECTION_TOP: f32 = 900.0;
const FOOTER_SECTION_HEIGHT: f32 = 160.0;

/// Column widths for the table layout.
const COLUMN_WIDTHS: [f32; 4] = [140.0, 120.0, 160.0, 110.0];

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Scrolled { offset: f32, viewport_height: f32 },
    CopyRow(usize),
    DeleteRow(usize),
    BackToTop,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Put the given text on the clipboard.
    CopyText(String),
    /// Ask the user to confirm removing the row at this index.
    RequestDelete(usize),
    /// Jump the scrollable straight to this offset (reduced motion).
    ScrollTo(f32),
}

#[derive(Debug)]
pub struct State {
    query: String,
    debouncer: Debouncer<String>,
    table: DataTable,
    scroll_offset: f32,
    viewport_height: f32,
    scroll_anim: Option<ScrollAnimation>,
    footer_reveal: Reveal,
}

impl State {
    #[must_use]
    pub fn new(table: DataTable) -> Self {
        Self {
            query: String::new(),
            debouncer: Debouncer::new(motion::SEARCH_DEBOUNCE),
            table,
            scroll_offset: 0.0,
            viewport_height: 0.0,
            scroll_anim: None,
            footer_reveal: Reveal::new(),
        }
    }

    /// The scrollable id targeted by smooth scrolling.
    #[must_use]
    pub fn scroll_id() -> Id {
        Id::new("records-scroll")
    }

    pub fn update(&mut self, message: Message, now: Instant, reduced_motion: bool) -> Event {
        match message {
            Message::QueryChanged(value) => {
                self.query = value.clone();
                self.debouncer.call(value, now);
                Event::None
            }
            Message::Scrolled {
                offset,
                viewport_height,
            } => {
                self.scroll_offset = offset;
                self.viewport_height = viewport_height;
                self.footer_reveal.observe(
                    FOOTER_SECTION_TOP,
                    FOOTER_SECTION_HEIGHT,
                    self.scroll_offset,
                    self.viewport_height,
                    now,
                );
                Event::None
            }
            Message::CopyRow(index) => match self.table.row(index) {
                Some(row) => Event::CopyText(row.cells().join("\t")),
                None => Event::None,
            },
            Message::DeleteRow(index) => Event::RequestDelete(index),
            Message::BackToTop => {
                if reduced_motion {
                    self.scroll_anim = None;
                    Event::ScrollTo(0.0)
                } else {
                    self.scroll_anim =
                        Some(ScrollAnimation::start(self.scroll_offset, 0.0, now));
                    Event::None
                }
            }
        }
    }

    /// Advances the debounced filter and the scroll glide. Returns the
    /// offset to apply to the scrollable while a glide is in flight.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if let Some(query) = self.debouncer.poll(now) {
            self.table.apply_filter(&query);
        }

        let anim = self.scroll_anim.as_ref()?;
        let offset = anim.offset(now);
        if anim.is_finished(now) {
            self.scroll_anim = None;
        }
        Some(offset)
    }

    /// Removes a row after the deletion was confirmed.
    pub fn delete_confirmed(&mut self, index: usize) {
        self.table.remove_row(index);
    }

    #[must_use]
    pub fn table(&self) -> &DataTable {
        &self.table
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn is_filter_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scroll_anim.is_some()
    }

    /// Whether the navbar should render elevated.
    #[must_use]
    pub fn navbar_elevated(&self) -> bool {
        self.scroll_offset > navbar::SCROLL_THRESHOLD
    }

    #[must_use]
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.scroll_anim.is_some() || self.footer_reveal.is_animating(now)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
        let title = text(i18n.tr("records-title")).size(typography::TITLE);

        let search = text_input(&i18n.tr("records-search-placeholder"), &self.query)
            .on_input(Message::QueryChanged)
            .padding(spacing::XS)
            .width(Length::Fixed(280.0));

        let search_row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(icons::SEARCH, typography::BODY))
            .push(search);

        let table = self.view_table(i18n);

        let back_to_top = button(
            Row::new()
                .spacing(spacing::XXS)
                .push(icons::sized(icons::ARROW_UP, typography::BODY))
                .push(text(i18n.tr("records-back-to-top")).size(typography::BODY)),
        )
        .on_press(Message::BackToTop)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::ghost);

        let footer = self.view_footer(i18n, now);

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(title)
            .push(search_row)
            .push(table)
            .push(footer)
            .push(back_to_top);

        Scrollable::new(content)
            .id(Self::scroll_id())
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| Message::Scrolled {
                offset: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
            .into()
    }

    fn view_table<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut header = Row::new().spacing(spacing::SM);
        for (key, width) in self.table.header_keys().iter().zip(COLUMN_WIDTHS) {
            header = header.push(
                text(i18n.tr(key))
                    .size(typography::BODY_SM)
                    .width(Length::Fixed(width)),
            );
        }
        // Trailing space over the action buttons.
        header = header.push(text("").width(Length::Fixed(72.0)));

        let mut body = Column::new().spacing(spacing::XS);
        if self.table.visible_count() == 0 {
            body = body.push(
                text(i18n.tr("records-empty"))
                    .size(typography::BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.strong.text),
                    }),
            );
        } else {
            for (index, row) in self.table.visible_rows() {
                let mut cells = Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center);
                for (cell, width) in row.cells().iter().zip(COLUMN_WIDTHS) {
                    cells = cells.push(
                        text(cell.as_str())
                            .size(typography::BODY)
                            .width(Length::Fixed(width)),
                    );
                }

                let copy = styles::tooltip::styled(
                    button(icons::sized(icons::CLIPBOARD, typography::BODY))
                        .on_press(Message::CopyRow(index))
                        .padding(spacing::XXS)
                        .style(styles::button::ghost),
                    i18n.tr("records-copy-row"),
                    Position::Bottom,
                );
                let delete = styles::tooltip::styled(
                    button(icons::sized(icons::TRASH, typography::BODY))
                        .on_press(Message::DeleteRow(index))
                        .padding(spacing::XXS)
                        .style(styles::button::ghost),
                    i18n.tr("records-delete-row"),
                    Position::Bottom,
                );

                cells = cells.push(copy).push(delete);
                body = body.push(cells);
            }
        }

        let table = Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(body);

        Container::new(table)
            .padding(spacing::MD)
            .style(styles::container::card)
            .into()
    }

    fn view_footer<'a>(&'a self, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
        let alpha = self.footer_reveal.progress(now);

        let note = text(i18n.tr("records-footer-note"))
            .size(typography::BODY_SM)
            .style(move |theme: &Theme| text::Style {
                color: Some(iced::Color {
                    a: alpha,
                    ..theme.extended_palette().background.strong.text
                }),
            });

        Container::new(note)
            .width(Length::Fill)
            .height(Length::Fixed(FOOTER_SECTION_HEIGHT))
            .align_y(alignment::Vertical::Bottom)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::scroll::SCROLL_DURATION;
    use std::time::Duration;

    fn sample_table() -> DataTable {
        DataTable::new(
            vec![
                "records-column-area",
                "records-column-category",
                "records-column-schedule",
                "records-column-status",
            ],
            vec![
                vec!["North".into(), "Paper".into(), "Mon 08:00".into(), "Done".into()],
                vec!["East".into(), "Plastic".into(), "Tue 09:00".into(), "Planned".into()],
                vec!["South".into(), "Metal".into(), "Wed 07:30".into(), "Planned".into()],
            ],
        )
    }

    #[test]
    fn typing_filters_only_after_the_quiet_window() {
        let mut state = State::new(sample_table());
        let start = Instant::now();

        // Burst of keystrokes, 100ms apart.
        for (i, q) in ["p", "pl", "pla"].iter().enumerate() {
            let at = start + Duration::from_millis(100 * i as u64);
            let _ = state.update(Message::QueryChanged((*q).to_string()), at, false);
            assert_eq!(state.table().visible_count(), 3, "not yet filtered");
        }

        // Quiet window elapses after the last keystroke.
        let settle = start + Duration::from_millis(200) + motion::SEARCH_DEBOUNCE;
        let _ = state.tick(settle);

        let visible: Vec<_> = state
            .table()
            .visible_rows()
            .map(|(_, row)| row.cells()[1].clone())
            .collect();
        assert_eq!(visible, ["Plastic"]);
    }

    #[test]
    fn copy_row_carries_the_cells() {
        let mut state = State::new(sample_table());
        let event = state.update(Message::CopyRow(0), Instant::now(), false);
        match event {
            Event::CopyText(text) => assert_eq!(text, "North\tPaper\tMon 08:00\tDone"),
            other => panic!("expected CopyText, got {other:?}"),
        }
    }

    #[test]
    fn copy_of_missing_row_is_a_no_op() {
        let mut state = State::new(sample_table());
        assert!(matches!(
            state.update(Message::CopyRow(99), Instant::now(), false),
            Event::None
        ));
    }

    #[test]
    fn delete_flow_requests_confirmation_first() {
        let mut state = State::new(sample_table());
        let event = state.update(Message::DeleteRow(1), Instant::now(), false);
        assert!(matches!(event, Event::RequestDelete(1)));

        state.delete_confirmed(1);
        assert_eq!(state.table().len(), 2);
    }

    #[test]
    fn back_to_top_glides_unless_motion_is_reduced() {
        let mut state = State::new(sample_table());
        let now = Instant::now();
        let _ = state.update(
            Message::Scrolled {
                offset: 600.0,
                viewport_height: 400.0,
            },
            now,
            false,
        );

        let event = state.update(Message::BackToTop, now, false);
        assert!(matches!(event, Event::None));
        assert!(state.is_scrolling());

        // The glide reports offsets until it lands on zero.
        let final_offset = state.tick(now + SCROLL_DURATION + Duration::from_millis(1));
        assert_eq!(final_offset, Some(0.0));
        assert!(!state.is_scrolling());
    }

    #[test]
    fn reduced_motion_jumps_immediately() {
        let mut state = State::new(sample_table());
        let event = state.update(Message::BackToTop, Instant::now(), true);
        assert!(matches!(event, Event::ScrollTo(offset) if offset == 0.0));
        assert!(!state.is_scrolling());
    }

    #[test]
    fn navbar_elevates_past_the_threshold() {
        let mut state = State::new(sample_table());
        assert!(!state.navbar_elevated());

        let _ = state.update(
            Message::Scrolled {
                offset: 51.0,
                viewport_height: 400.0,
            },
            Instant::now(),
            false,
        );
        assert!(state.navbar_elevated());
    }

    #[test]
    fn footer_reveals_once_scrolled_into_view() {
        let mut state = State::new(sample_table());
        let now = Instant::now();

        let _ = state.update(
            Message::Scrolled {
                offset: 700.0,
                viewport_height: 400.0,
            },
            now,
            false,
        );
        assert!(state.footer_reveal.is_revealed());
    }
}
