// SPDX-License-Identifier: MPL-2.0
//! Page header: brand title plus the search, enquiry, and menu controls.
//!
//! The hamburger button only renders in the mobile layout; the drawer it
//! opens lists the same sections as the desktop tab strip.

use crate::i18n::I18n;
use crate::nav::Mode;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub mode: Mode,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    OpenSearch,
    OpenEnquiry,
    ToggleDrawer,
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("brand-name")).size(typography::TITLE_LG);

    let enquiry_button = button(Text::new(ctx.i18n.tr("header-enquiry")).size(typography::BODY))
        .on_press(Message::OpenEnquiry)
        .padding(spacing::XS)
        .style(styles::button::quiet);

    let search_button = button(Text::new(ctx.i18n.tr("header-search")).size(typography::BODY))
        .on_press(Message::OpenSearch)
        .padding(spacing::XS)
        .style(styles::button::quiet);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(enquiry_button)
        .push(search_button);

    if ctx.mode.is_mobile() {
        let menu_button = button(Text::new("☰").size(typography::TITLE_MD))
            .on_press(Message::ToggleDrawer)
            .padding(spacing::XS)
            .style(styles::button::quiet);
        row = row.push(menu_button);
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::header_bar)
        .into()
}
