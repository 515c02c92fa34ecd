// SPDX-License-Identifier: MPL-2.0
//! Static content catalog for the kiosk page.
//!
//! Sections play the role the markup played in a web page: they are
//! declared before the navigation controller is built and never created or
//! destroyed at runtime. The reconciler's triggers and panels are derived
//! from this catalog at startup.

use crate::nav::{Breakpoint, Reconciler, Surface};

/// Page sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Rooms,
    Dining,
    Facilities,
    Location,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Rooms,
        Section::Dining,
        Section::Facilities,
        Section::Location,
    ];

    /// Stable id shared by the section's triggers and panel.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Rooms => "rooms",
            Section::Dining => "dining",
            Section::Facilities => "facilities",
            Section::Location => "location",
        }
    }

    /// Scroll anchor carried by this section's triggers, if any.
    ///
    /// Facilities deliberately carries none: the original page only anchors
    /// the sections that exist as headings in the prose flow.
    #[must_use]
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Facilities => None,
            other => Some(other.id()),
        }
    }

    /// Translation key for the section title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Section::About => "section-about-title",
            Section::Rooms => "section-rooms-title",
            Section::Dining => "section-dining-title",
            Section::Facilities => "section-facilities-title",
            Section::Location => "section-location-title",
        }
    }

    /// Translation key for the section body copy.
    #[must_use]
    pub fn body_key(self) -> &'static str {
        match self {
            Section::About => "section-about-body",
            Section::Rooms => "section-rooms-body",
            Section::Dining => "section-dining-body",
            Section::Facilities => "section-facilities-body",
            Section::Location => "section-location-body",
        }
    }

    /// The section the markup marks active by default.
    #[must_use]
    pub fn default_active() -> Section {
        Section::About
    }

    /// Looks a section up by its id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.id() == id)
    }
}

/// Anchors present on the page, in scroll order.
#[must_use]
pub fn anchor_ids() -> Vec<&'static str> {
    Section::ALL.iter().filter_map(|s| s.anchor()).collect()
}

/// Builds the navigation reconciler from the catalog: one tab-strip trigger
/// and one drawer trigger per section, one panel per section, with the
/// default section active.
#[must_use]
pub fn build_reconciler(breakpoint: Breakpoint) -> Reconciler {
    let mut nav = Reconciler::new(breakpoint);
    for section in Section::ALL {
        nav.add_trigger(Surface::Tabs, section.id(), section.anchor());
    }
    for section in Section::ALL {
        nav.add_trigger(Surface::Drawer, section.id(), section.anchor());
    }
    for section in Section::ALL {
        nav.add_panel(section.id());
    }
    nav.set_default_active(Section::default_active().id());
    nav
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn from_id_round_trips() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("nope"), None);
    }

    #[test]
    fn facilities_has_no_anchor() {
        assert!(Section::Facilities.anchor().is_none());
        assert!(!anchor_ids().contains(&"facilities"));
    }

    #[test]
    fn build_reconciler_registers_both_surfaces() {
        let nav = build_reconciler(Breakpoint::default());
        assert_eq!(nav.triggers_on(Surface::Tabs).count(), Section::ALL.len());
        assert_eq!(nav.triggers_on(Surface::Drawer).count(), Section::ALL.len());
        assert_eq!(nav.panels().count(), Section::ALL.len());
    }

    #[test]
    fn build_reconciler_marks_default_section_active() {
        let nav = build_reconciler(Breakpoint::default());
        let active = nav.active_panel().expect("a default panel is active");
        assert_eq!(active.id(), Section::default_active().id());
    }
}
