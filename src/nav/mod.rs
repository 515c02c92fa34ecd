// SPDX-License-Identifier: MPL-2.0
//! Navigation domain: the pure state model behind the page's section
//! navigation.
//!
//! Nothing in this module depends on Iced. The reconciler owns the
//! trigger/panel registry and the active/location flags; the view layer
//! reads that state to decide physical placement, and `App::update` feeds
//! clicks and the current window width in.

pub mod reconciler;
pub mod scroll;
pub mod viewport;

pub use reconciler::{Outcome, PanelLocation, Reconciler, Surface, TriggerId};
pub use viewport::{Breakpoint, Mode};
