// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only native event the page cares about is the window resize: the
//! width feeds the viewport-mode derivation at the next interaction and
//! switches the rendered layout immediately.

use super::Message;
use iced::{event, Subscription};

/// Creates the window event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}
