// SPDX-License-Identifier: MPL-2.0
//! Deferred scrolling to page anchors.
//!
//! After an activation the page scrolls to the trigger's anchor, delayed by
//! a fixed 300 ms so a closing drawer settles first. The delay is a plain
//! timer; each new activation bumps a generation counter, and a timer that
//! fires with a stale generation is discarded.

use std::time::Duration;

/// Delay between an activation and its scroll.
pub const SCROLL_DELAY: Duration = Duration::from_millis(300);

/// Generation counter for in-flight scroll timers.
///
/// Rapid repeated clicks schedule several timers; only the one matching the
/// latest generation is honored when it fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingScroll {
    generation: u64,
}

impl PendingScroll {
    /// Registers a new pending scroll and returns its generation token.
    pub fn schedule(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Returns whether a fired timer is still the latest one.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Resolves an anchor id to a relative vertical offset in `0.0..=1.0`.
///
/// The page is a single column of sections in catalog order, so an anchor's
/// scroll position is its ordinal fraction of that column. Unknown anchors
/// resolve to `None` and no scroll happens.
#[must_use]
pub fn anchor_offset(anchor: &str, ordered_anchors: &[&str]) -> Option<f32> {
    let index = ordered_anchors.iter().position(|a| *a == anchor)?;
    if ordered_anchors.len() <= 1 {
        return Some(0.0);
    }
    Some(index as f32 / (ordered_anchors.len() - 1) as f32)
}
