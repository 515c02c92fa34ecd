// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::drawer;
use crate::ui::enquiry;
use crate::ui::header;
use crate::ui::panels;
use crate::ui::search;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Panels(panels::Message),
    Drawer(drawer::Message),
    Search(search::Message),
    Enquiry(enquiry::Message),
    /// A deferred scroll timer elapsed. Stale generations are discarded.
    ScrollDue { generation: u64, anchor: String },
    /// The window was resized; the width drives the layout mode.
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional section id to open on startup (e.g. `rooms`).
    pub section: Option<String>,
}
