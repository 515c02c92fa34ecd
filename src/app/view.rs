// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the page from the reconciler's state: header, scrollable
//! content area, and whichever overlay layers are active. Overlays stack in
//! a fixed order (drawer, search, enquiry) so the modal always wins.

use super::Message;
use crate::i18n::I18n;
use crate::nav::{Mode, Reconciler};
use crate::ui::drawer::{self, ViewContext as DrawerViewContext};
use crate::ui::enquiry::{self, ViewContext as EnquiryViewContext};
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::panels::{self, ViewContext as PanelsViewContext};
use crate::ui::search::{self, ViewContext as SearchViewContext};
use crate::ui::state::OverlayState;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{center, mouse_area, opaque, scrollable, Column, Container, Stack},
    Element, Length,
};

/// Id of the page scrollable, used by the deferred scroll task.
pub fn page_scroll_id() -> iced::widget::Id {
    iced::widget::Id::new("kiosk-page")
}

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub nav: &'a Reconciler,
    pub window_width: f32,
    pub search: &'a search::State,
    pub search_open: OverlayState,
    pub drawer_open: OverlayState,
    pub enquiry_open: OverlayState,
}

/// Renders the page and its overlay layers.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mode = Mode::at(ctx.window_width, ctx.nav.breakpoint());

    let header_view = header::view(HeaderViewContext {
        i18n: ctx.i18n,
        mode,
    })
    .map(Message::Header);

    let content = panels::view(PanelsViewContext {
        i18n: ctx.i18n,
        nav: ctx.nav,
        mode,
    })
    .map(Message::Panels);

    let page = Column::new()
        .push(header_view)
        .push(
            scrollable(content)
                .id(page_scroll_id())
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if ctx.drawer_open.is_active() && mode.is_mobile() {
        layers = layers.push(drawer_layer(ctx.i18n, ctx.nav));
    }

    if ctx.search_open.is_active() {
        layers = layers.push(search_layer(ctx.i18n, ctx.search));
    }

    if ctx.enquiry_open.is_active() {
        layers = layers.push(enquiry_layer(ctx.i18n));
    }

    layers.into()
}

/// Off-canvas drawer: pressing the dimmed area beside it closes the menu.
fn drawer_layer<'a>(i18n: &'a I18n, nav: &'a Reconciler) -> Element<'a, Message> {
    let panel = opaque(
        drawer::view(DrawerViewContext { i18n, nav }).map(Message::Drawer),
    );

    let backdrop = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .style(styles::overlay::backdrop);

    opaque(
        mouse_area(backdrop).on_press(Message::Drawer(drawer::Message::Close)),
    )
}

/// Search overlay: closed only through its close control.
fn search_layer<'a>(i18n: &'a I18n, state: &'a search::State) -> Element<'a, Message> {
    let card = search::view(SearchViewContext { i18n, state }).map(Message::Search);

    opaque(
        Container::new(center(card))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
}

/// Enquiry modal: pressing the backdrop closes it, pressing the card does
/// not (the card is opaque to the backdrop's press area).
fn enquiry_layer(i18n: &I18n) -> Element<'_, Message> {
    let card = opaque(enquiry::view(EnquiryViewContext { i18n }).map(Message::Enquiry));

    let backdrop = Container::new(center(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop);

    opaque(
        mouse_area(backdrop)
            .on_press(Message::Enquiry(enquiry::Message::BackgroundPressed)),
    )
}
