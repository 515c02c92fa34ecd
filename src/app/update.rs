// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Every handler receives an `UpdateContext` with mutable borrows of the
//! pieces of `App` state it may touch, keeping `App::update` itself a thin
//! dispatcher.

use super::view;
use super::Message;
use crate::content;
use crate::nav::scroll::{self, PendingScroll};
use crate::nav::{Reconciler, Surface, TriggerId};
use crate::ui::state::OverlayState;
use crate::ui::{drawer, enquiry, header, panels, search};
use iced::widget::scrollable;
use iced::Task;

/// Mutable view over the application state, handed to each handler.
pub struct UpdateContext<'a> {
    pub nav: &'a mut Reconciler,
    pub window_width: &'a mut f32,
    pub pending_scroll: &'a mut PendingScroll,
    pub search: &'a mut search::State,
    pub search_open: &'a mut OverlayState,
    pub drawer_open: &'a mut OverlayState,
    pub enquiry_open: &'a mut OverlayState,
}

pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match message {
        header::Message::OpenSearch => ctx.search_open.open(),
        header::Message::OpenEnquiry => ctx.enquiry_open.open(),
        header::Message::ToggleDrawer => ctx.drawer_open.toggle(),
    }
    Task::none()
}

pub fn handle_panels_message(ctx: &mut UpdateContext<'_>, message: panels::Message) -> Task<Message> {
    match message {
        panels::Message::TriggerPressed(id) => activate_trigger(ctx, id),
    }
}

pub fn handle_drawer_message(ctx: &mut UpdateContext<'_>, message: drawer::Message) -> Task<Message> {
    match drawer::update(message, ctx.drawer_open) {
        drawer::Event::Activate(id) => activate_trigger(ctx, id),
        drawer::Event::OpenEnquiry => {
            ctx.enquiry_open.open();
            Task::none()
        }
        drawer::Event::None => Task::none(),
    }
}

pub fn handle_search_message(ctx: &mut UpdateContext<'_>, message: search::Message) -> Task<Message> {
    match search::update(ctx.search, message) {
        search::Event::Activate(section) => {
            ctx.search_open.close();
            match ctx.nav.find_trigger(Surface::Tabs, section.id()) {
                Some(id) => activate_trigger(ctx, id),
                None => Task::none(),
            }
        }
        search::Event::Close => {
            ctx.search_open.close();
            Task::none()
        }
        search::Event::None => Task::none(),
    }
}

pub fn handle_enquiry_message(ctx: &mut UpdateContext<'_>, message: enquiry::Message) -> Task<Message> {
    enquiry::update(message, ctx.enquiry_open);
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: iced::Size) -> Task<Message> {
    *ctx.window_width = size.width;
    Task::none()
}

/// Runs an activation through the reconciler and applies its outcome:
/// closing the drawer and scheduling the deferred scroll.
pub fn activate_trigger(ctx: &mut UpdateContext<'_>, id: TriggerId) -> Task<Message> {
    let outcome = ctx.nav.activate(id, *ctx.window_width);

    if outcome.close_drawer {
        ctx.drawer_open.close();
    }

    match outcome.scroll_anchor {
        Some(anchor) => schedule_scroll(ctx, anchor),
        None => Task::none(),
    }
}

/// Starts the fixed-delay scroll timer for an anchor. The delay lets the
/// closing drawer settle before the page moves.
fn schedule_scroll(ctx: &mut UpdateContext<'_>, anchor: String) -> Task<Message> {
    let generation = ctx.pending_scroll.schedule();
    Task::perform(
        async { tokio::time::sleep(scroll::SCROLL_DELAY).await },
        move |()| Message::ScrollDue {
            generation,
            anchor: anchor.clone(),
        },
    )
}

/// Applies a fired scroll timer: stale generations and unknown anchors are
/// silent no-ops.
pub fn handle_scroll_due(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    anchor: &str,
) -> Task<Message> {
    if !ctx.pending_scroll.is_current(generation) {
        return Task::none();
    }

    let anchors = content::anchor_ids();
    match scroll::anchor_offset(anchor, &anchors) {
        Some(y) => iced::widget::operation::snap_to(
            view::page_scroll_id(),
            scrollable::RelativeOffset { x: 0.0, y },
        ),
        None => Task::none(),
    }
}
