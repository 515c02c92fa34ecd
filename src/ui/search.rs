// SPDX-License-Identifier: MPL-2.0
//! Search overlay.
//!
//! The overlay filters section titles as the user types; choosing a match
//! activates that section. There is no remote search, only the local
//! catalog.

use crate::content::Section;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Column, Container, Row, Space, Text},
    Element, Length,
};

/// State for the search overlay (the typed query).
#[derive(Debug, Clone, Default)]
pub struct State {
    query: String,
}

impl State {
    /// Returns the current query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Sections whose localized title contains the query,
    /// case-insensitively. An empty query lists every section.
    #[must_use]
    pub fn matches(&self, i18n: &I18n) -> Vec<Section> {
        let needle = self.query.trim().to_lowercase();
        Section::ALL
            .iter()
            .copied()
            .filter(|section| {
                needle.is_empty() || i18n.tr(section.title_key()).to_lowercase().contains(&needle)
            })
            .collect()
    }
}

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the search overlay.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    ResultPressed(Section),
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Activate(Section),
    Close,
}

/// Process a search message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::QueryChanged(query) => {
            state.query = query;
            Event::None
        }
        Message::ResultPressed(section) => {
            state.query.clear();
            Event::Activate(section)
        }
        Message::Close => {
            state.query.clear();
            Event::Close
        }
    }
}

/// Render the search card.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("search-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("✕").size(typography::BODY_LG))
                .on_press(Message::Close)
                .padding(spacing::XS)
                .style(styles::button::quiet),
        );

    let input = text_input(&ctx.i18n.tr("search-placeholder"), ctx.state.query())
        .on_input(Message::QueryChanged)
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    let mut card = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(input);

    let matches = ctx.state.matches(ctx.i18n);
    if matches.is_empty() {
        card = card.push(Text::new(ctx.i18n.tr("search-no-results")).size(typography::BODY));
    } else {
        for section in matches {
            card = card.push(
                button(Text::new(ctx.i18n.tr(section.title_key())).size(typography::BODY_LG))
                    .on_press(Message::ResultPressed(section))
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::Fill)
                    .style(styles::button::nav_inactive),
            );
        }
    }

    Container::new(card)
        .width(sizing::MODAL_WIDTH)
        .padding(spacing::MD)
        .style(styles::overlay::card)
        .into()
}
