// SPDX-License-Identifier: MPL-2.0
//! Overlay visibility state
//!
//! One boolean flag shared by every optional collaborator (search layer,
//! drawer, enquiry modal). Each collaborator owns its own instance.

/// Visibility flag for a toggleable overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    active: bool,
}

impl OverlayState {
    /// Shows the overlay.
    pub fn open(&mut self) {
        self.active = true;
    }

    /// Hides the overlay.
    pub fn close(&mut self) {
        self.active = false;
    }

    /// Flips the overlay's visibility.
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    /// Returns whether the overlay is shown.
    #[must_use]
    pub fn is_active(self) -> bool {
        self.active
    }
}
