// SPDX-License-Identifier: MPL-2.0
//! Enquiry modal.
//!
//! Informational dialog reached from the header and the drawer. Pressing
//! the dimmed background closes it; pressing inside the card does not (the
//! card is opaque to the backdrop's press area).

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::OverlayState;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the modal card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the modal.
#[derive(Debug, Clone)]
pub enum Message {
    ClosePressed,
    BackgroundPressed,
}

/// Process a modal message.
pub fn update(message: Message, open: &mut OverlayState) {
    match message {
        Message::ClosePressed | Message::BackgroundPressed => open.close(),
    }
}

/// Render the modal card (the backdrop is composed by the caller).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("enquiry-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("✕").size(typography::BODY_LG))
                .on_press(Message::ClosePressed)
                .padding(spacing::XS)
                .style(styles::button::quiet),
        );

    let card = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(Text::new(ctx.i18n.tr("enquiry-body")).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("enquiry-phone")).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("enquiry-email")).size(typography::BODY));

    Container::new(card)
        .width(sizing::MODAL_WIDTH)
        .padding(spacing::MD)
        .style(styles::overlay::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_button_hides_the_modal() {
        let mut open = OverlayState::default();
        open.open();
        update(Message::ClosePressed, &mut open);
        assert!(!open.is_active());
    }

    #[test]
    fn background_press_hides_the_modal() {
        let mut open = OverlayState::default();
        open.open();
        update(Message::BackgroundPressed, &mut open);
        assert!(!open.is_active());
    }

    #[test]
    fn enquiry_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
