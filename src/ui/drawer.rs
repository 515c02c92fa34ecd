// SPDX-License-Identifier: MPL-2.0
//! Off-canvas drawer menu for the mobile layout.
//!
//! The drawer lists the same sections as the desktop tab strip; pressing
//! one activates that section through the reconciler, which also reports
//! that the drawer must close.

use crate::content::Section;
use crate::i18n::I18n;
use crate::nav::{Reconciler, Surface, TriggerId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::OverlayState;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the drawer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub nav: &'a Reconciler,
}

/// Messages emitted by the drawer.
#[derive(Debug, Clone)]
pub enum Message {
    TriggerPressed(TriggerId),
    OpenEnquiry,
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Activate(TriggerId),
    OpenEnquiry,
}

/// Process a drawer message and return the corresponding event.
///
/// Activation does not close the drawer here; the reconciler reports the
/// close as part of its outcome so the behavior is the same for every
/// drawer-surface trigger.
pub fn update(message: Message, open: &mut OverlayState) -> Event {
    match message {
        Message::TriggerPressed(id) => Event::Activate(id),
        Message::OpenEnquiry => {
            open.close();
            Event::OpenEnquiry
        }
        Message::Close => {
            open.close();
            Event::None
        }
    }
}

/// Render the drawer panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("drawer-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("✕").size(typography::BODY_LG))
                .on_press(Message::Close)
                .padding(spacing::XS)
                .style(styles::button::quiet),
        );

    let mut entries = Column::new().spacing(spacing::XXS).push(header);

    for (id, trigger) in ctx.nav.triggers_on(Surface::Drawer) {
        let label = Section::from_id(trigger.target())
            .map(|s| ctx.i18n.tr(s.title_key()))
            .unwrap_or_else(|| trigger.target().to_string());

        let style = if trigger.is_active() {
            styles::button::nav_active
        } else {
            styles::button::nav_inactive
        };

        entries = entries.push(
            button(Text::new(label).size(typography::BODY_LG))
                .on_press(Message::TriggerPressed(id))
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fill)
                .style(style),
        );
    }

    let enquiry = button(Text::new(ctx.i18n.tr("header-enquiry")).size(typography::BODY_LG))
        .on_press(Message::OpenEnquiry)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::nav_inactive);
    entries = entries.push(enquiry);

    Container::new(entries)
        .width(sizing::DRAWER_WIDTH)
        .height(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::drawer_panel)
        .into()
}
