// SPDX-License-Identifier: MPL-2.0
//! Content area: the tab strip and the panels it controls.
//!
//! Placement is read straight off the reconciler. On desktop the active
//! panel renders inside the container column next to the tab strip. On
//! mobile the strip becomes a vertical list and any panel whose location is
//! `AfterTrigger` renders directly under its trigger row, producing the
//! accordion effect.

use crate::content::Section;
use crate::i18n::I18n;
use crate::nav::{Mode, PanelLocation, Reconciler, Surface, TriggerId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the content area.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub nav: &'a Reconciler,
    pub mode: Mode,
}

/// Messages emitted by the content area.
#[derive(Debug, Clone)]
pub enum Message {
    TriggerPressed(TriggerId),
}

/// Render the content area for the current layout mode.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.mode {
        Mode::Desktop => desktop(ctx),
        Mode::Mobile => mobile(ctx),
    }
}

fn desktop<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut strip = Column::new().spacing(spacing::XXS).width(sizing::NAV_WIDTH);
    for (id, trigger) in ctx.nav.triggers_on(Surface::Tabs) {
        strip = strip.push(trigger_row(&ctx, id, trigger.target(), trigger.is_active()));
    }

    Row::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(strip)
        .push(container_column(&ctx).width(Length::Fill))
        .into()
}

fn mobile<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::XXS).width(Length::Fill);

    for (id, trigger) in ctx.nav.triggers_on(Surface::Tabs) {
        list = list.push(trigger_row(&ctx, id, trigger.target(), trigger.is_active()));

        // Accordion: panels parked after this trigger render inline.
        for panel in ctx
            .nav
            .panels()
            .filter(|p| p.location() == PanelLocation::AfterTrigger(id))
        {
            list = list.push(panel_card(&ctx, panel.id()));
        }
    }

    // The container still exists below the list; an active panel that could
    // not be parked (no tab-strip host) shows up here.
    Column::new()
        .padding(spacing::MD)
        .spacing(spacing::SM)
        .push(list)
        .push(container_column(&ctx).width(Length::Fill))
        .into()
}

/// The canonical holding area: renders active panels located `Container`.
fn container_column<'a>(ctx: &ViewContext<'a>) -> Column<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM);
    for panel in ctx
        .nav
        .panels()
        .filter(|p| p.is_active() && p.location() == PanelLocation::Container)
    {
        column = column.push(panel_card(ctx, panel.id()));
    }
    column
}

fn trigger_row<'a>(
    ctx: &ViewContext<'a>,
    id: TriggerId,
    target: &str,
    active: bool,
) -> Element<'a, Message> {
    let label = Section::from_id(target)
        .map(|s| ctx.i18n.tr(s.title_key()))
        .unwrap_or_else(|| target.to_string());

    let style = if active {
        styles::button::nav_active
    } else {
        styles::button::nav_inactive
    };

    button(Text::new(label).size(typography::BODY_LG))
        .on_press(Message::TriggerPressed(id))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(style)
        .into()
}

fn panel_card<'a>(ctx: &ViewContext<'a>, panel_id: &str) -> Element<'a, Message> {
    let (title, body) = match Section::from_id(panel_id) {
        Some(section) => (ctx.i18n.tr(section.title_key()), ctx.i18n.tr(section.body_key())),
        None => (panel_id.to_string(), String::new()),
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(Text::new(body).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel_card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::nav::Breakpoint;

    #[test]
    fn desktop_view_renders() {
        let i18n = I18n::default();
        let nav = content::build_reconciler(Breakpoint::default());
        let _element = view(ViewContext {
            i18n: &i18n,
            nav: &nav,
            mode: Mode::Desktop,
        });
    }

    #[test]
    fn mobile_view_renders_with_parked_panel() {
        let i18n = I18n::default();
        let mut nav = content::build_reconciler(Breakpoint::default());
        let (id, _) = nav.triggers_on(Surface::Tabs).next().unwrap();
        nav.activate(id, 800.0);

        let _element = view(ViewContext {
            i18n: &i18n,
            nav: &nav,
            mode: Mode::Mobile,
        });
    }
}
