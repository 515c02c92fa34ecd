// SPDX-License-Identifier: MPL-2.0
//! Reconciliation between navigation triggers and content panels.
//!
//! Two navigation surfaces (the desktop tab strip and the mobile drawer)
//! share one set of content panels. The reconciler keeps exactly one target
//! group of triggers and one panel active, and assigns each panel a
//! location the view layer reads to decide placement: panels normally live
//! in the container, and in the mobile layout the active panel is parked
//! directly after its tab-strip trigger to produce the accordion effect.
//!
//! Panel identity is a registry slot; relocation only rewrites the slot's
//! `location` field, so a panel can never end up duplicated.

use super::viewport::{Breakpoint, Mode};

/// Index of a trigger in the reconciler's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerId(usize);

/// Which navigation surface a trigger belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The desktop tab strip (also hosts the mobile accordion rows).
    Tabs,
    /// The off-canvas drawer menu.
    Drawer,
}

/// A clickable navigation entry.
#[derive(Debug, Clone)]
pub struct Trigger {
    /// Id of the panel this trigger controls.
    target: String,
    /// Optional scroll destination, resolved against the page's anchors.
    anchor: Option<String>,
    surface: Surface,
    active: bool,
}

impl Trigger {
    /// Returns the id of the panel this trigger controls.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the trigger's scroll anchor, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Returns the surface this trigger renders on.
    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Returns whether the trigger is currently marked active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Where a panel currently lives in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelLocation {
    /// The canonical desktop holding area.
    #[default]
    Container,
    /// Directly after the given tab-strip trigger (mobile accordion).
    AfterTrigger(TriggerId),
}

/// A content section block.
#[derive(Debug, Clone)]
pub struct Panel {
    id: String,
    active: bool,
    location: PanelLocation,
}

impl Panel {
    /// Returns the panel's id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns whether the panel is shown.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the panel's current location.
    #[must_use]
    pub fn location(&self) -> PanelLocation {
        self.location
    }
}

/// What an activation asks the surrounding application to do.
///
/// The reconciler itself only mutates trigger/panel flags; closing the
/// drawer and scheduling the deferred scroll are side effects it reports
/// rather than performs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// The clicked trigger lives in the drawer, which must close.
    pub close_drawer: bool,
    /// The clicked trigger carries this scroll anchor.
    pub scroll_anchor: Option<String>,
}

/// Owns the trigger/panel registry and the single-active invariant.
#[derive(Debug, Clone)]
pub struct Reconciler {
    triggers: Vec<Trigger>,
    panels: Vec<Panel>,
    breakpoint: Breakpoint,
}

impl Reconciler {
    /// Creates an empty reconciler with the given breakpoint.
    #[must_use]
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            triggers: Vec::new(),
            panels: Vec::new(),
            breakpoint,
        }
    }

    /// Registers a trigger and returns its id.
    pub fn add_trigger(
        &mut self,
        surface: Surface,
        target: impl Into<String>,
        anchor: Option<&str>,
    ) -> TriggerId {
        self.triggers.push(Trigger {
            target: target.into(),
            anchor: anchor.map(str::to_owned),
            surface,
            active: false,
        });
        TriggerId(self.triggers.len() - 1)
    }

    /// Registers a panel. Panels start inactive, in the container.
    pub fn add_panel(&mut self, id: impl Into<String>) {
        self.panels.push(Panel {
            id: id.into(),
            active: false,
            location: PanelLocation::Container,
        });
    }

    /// Marks the panel with `target` (and its trigger group) active without
    /// relocating anything. Used for the initial markup state.
    pub fn set_default_active(&mut self, target: &str) {
        for trigger in &mut self.triggers {
            trigger.active = trigger.target == target;
        }
        for panel in &mut self.panels {
            panel.active = panel.id == target;
            panel.location = PanelLocation::Container;
        }
    }

    /// Returns the configured breakpoint.
    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Returns the trigger for an id, or `None` if the id is stale.
    #[must_use]
    pub fn trigger(&self, id: TriggerId) -> Option<&Trigger> {
        self.triggers.get(id.0)
    }

    /// Iterates the triggers of one surface in registration order.
    pub fn triggers_on(&self, surface: Surface) -> impl Iterator<Item = (TriggerId, &Trigger)> {
        self.triggers
            .iter()
            .enumerate()
            .filter(move |(_, t)| t.surface == surface)
            .map(|(i, t)| (TriggerId(i), t))
    }

    /// Finds the trigger on `surface` controlling `target`.
    #[must_use]
    pub fn find_trigger(&self, surface: Surface, target: &str) -> Option<TriggerId> {
        self.triggers
            .iter()
            .position(|t| t.surface == surface && t.target == target)
            .map(TriggerId)
    }

    /// Returns the panel with the given id.
    #[must_use]
    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Iterates all panels in registration order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    /// Returns the active panel, if any.
    #[must_use]
    pub fn active_panel(&self) -> Option<&Panel> {
        self.panels.iter().find(|p| p.active)
    }

    /// Handles a trigger click at the given window width.
    ///
    /// Stale ids are a silent no-op. Every step is idempotent, so
    /// re-activating the already-active trigger reproduces the same state.
    pub fn activate(&mut self, id: TriggerId, width: f32) -> Outcome {
        let Some(clicked) = self.triggers.get(id.0) else {
            return Outcome::default();
        };
        let target = clicked.target.clone();
        let outcome = Outcome {
            close_drawer: clicked.surface == Surface::Drawer,
            scroll_anchor: clicked.anchor.clone(),
        };

        // Synchronize active flags across both surfaces for the target group.
        for trigger in &mut self.triggers {
            trigger.active = trigger.target == target;
        }

        // Unconditional reset: every panel back to the container, inactive.
        // Guarantees no panel is left stranded from a prior mobile activation.
        for panel in &mut self.panels {
            panel.active = false;
            panel.location = PanelLocation::Container;
        }

        let Some(panel_index) = self.panels.iter().position(|p| p.id == target) else {
            // Dead target id: trigger flags moved, nothing else to do.
            return outcome;
        };

        if Mode::at(width, self.breakpoint).is_mobile() {
            // Park the panel under its tab-strip row for the accordion
            // effect, even when the click came from the drawer.
            if let Some(host) = self.find_trigger(Surface::Tabs, &target) {
                self.panels[panel_index].location = PanelLocation::AfterTrigger(host);
            }
        }
        self.panels[panel_index].active = true;

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_WIDTH: f32 = 1200.0;
    const MOBILE_WIDTH: f32 = 800.0;

    fn sample() -> (Reconciler, Vec<TriggerId>, Vec<TriggerId>) {
        let mut nav = Reconciler::new(Breakpoint::default());
        let sections = ["about", "rooms", "dining"];
        let tabs: Vec<_> = sections
            .iter()
            .map(|s| nav.add_trigger(Surface::Tabs, *s, Some(s)))
            .collect();
        let drawer: Vec<_> = sections
            .iter()
            .map(|s| nav.add_trigger(Surface::Drawer, *s, Some(s)))
            .collect();
        for s in sections {
            nav.add_panel(s);
        }
        (nav, tabs, drawer)
    }

    #[test]
    fn activation_synchronizes_both_surfaces() {
        let (mut nav, tabs, drawer) = sample();
        nav.activate(tabs[1], DESKTOP_WIDTH);

        assert!(nav.trigger(tabs[1]).unwrap().is_active());
        assert!(nav.trigger(drawer[1]).unwrap().is_active());
        for id in [tabs[0], tabs[2], drawer[0], drawer[2]] {
            assert!(!nav.trigger(id).unwrap().is_active());
        }
    }

    #[test]
    fn exactly_one_panel_active_after_activation() {
        let (mut nav, tabs, _) = sample();
        nav.activate(tabs[0], DESKTOP_WIDTH);
        nav.activate(tabs[2], DESKTOP_WIDTH);

        let active: Vec<_> = nav.panels().filter(|p| p.is_active()).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id(), "dining");
        for panel in nav.panels().filter(|p| !p.is_active()) {
            assert_eq!(panel.location(), PanelLocation::Container);
        }
    }

    #[test]
    fn desktop_activation_keeps_panel_in_container() {
        let (mut nav, tabs, _) = sample();
        nav.activate(tabs[0], DESKTOP_WIDTH);

        let panel = nav.panel("about").unwrap();
        assert!(panel.is_active());
        assert_eq!(panel.location(), PanelLocation::Container);
    }

    #[test]
    fn mobile_activation_parks_panel_after_tabs_trigger() {
        let (mut nav, tabs, _) = sample();
        nav.activate(tabs[1], MOBILE_WIDTH);

        let panel = nav.panel("rooms").unwrap();
        assert!(panel.is_active());
        assert_eq!(panel.location(), PanelLocation::AfterTrigger(tabs[1]));
    }

    #[test]
    fn drawer_click_in_mobile_mode_parks_under_tabs_row() {
        let (mut nav, tabs, drawer) = sample();
        let outcome = nav.activate(drawer[2], MOBILE_WIDTH);

        assert!(outcome.close_drawer);
        let panel = nav.panel("dining").unwrap();
        assert_eq!(panel.location(), PanelLocation::AfterTrigger(tabs[2]));
    }

    #[test]
    fn tabs_click_does_not_request_drawer_close() {
        let (mut nav, tabs, _) = sample();
        let outcome = nav.activate(tabs[0], DESKTOP_WIDTH);
        assert!(!outcome.close_drawer);
    }

    #[test]
    fn width_exactly_at_breakpoint_uses_mobile_placement() {
        let (mut nav, tabs, _) = sample();
        nav.activate(tabs[0], Breakpoint::default().value());

        assert_eq!(
            nav.panel("about").unwrap().location(),
            PanelLocation::AfterTrigger(tabs[0])
        );
    }

    #[test]
    fn resize_then_reactivate_relocates_without_duplication() {
        let (mut nav, tabs, drawer) = sample();

        // Drawer click on desktop, then the window shrinks and the user
        // clicks again: the same panel slot moves, nothing is copied.
        nav.activate(drawer[1], DESKTOP_WIDTH);
        assert_eq!(nav.panel("rooms").unwrap().location(), PanelLocation::Container);

        nav.activate(drawer[1], MOBILE_WIDTH);
        assert_eq!(
            nav.panel("rooms").unwrap().location(),
            PanelLocation::AfterTrigger(tabs[1])
        );
        assert_eq!(nav.panels().filter(|p| p.id() == "rooms").count(), 1);

        // And back up: the unconditional reset returns it to the container.
        nav.activate(tabs[1], DESKTOP_WIDTH);
        assert_eq!(nav.panel("rooms").unwrap().location(), PanelLocation::Container);
    }

    #[test]
    fn reactivating_active_trigger_is_idempotent() {
        let (mut nav, tabs, _) = sample();
        nav.activate(tabs[1], MOBILE_WIDTH);
        let before: Vec<_> = nav
            .panels()
            .map(|p| (p.id().to_owned(), p.is_active(), p.location()))
            .collect();

        let outcome = nav.activate(tabs[1], MOBILE_WIDTH);
        let after: Vec<_> = nav
            .panels()
            .map(|p| (p.id().to_owned(), p.is_active(), p.location()))
            .collect();

        assert_eq!(before, after);
        assert_eq!(outcome.scroll_anchor.as_deref(), Some("rooms"));
    }

    #[test]
    fn dead_target_moves_trigger_flags_but_no_panel() {
        let mut nav = Reconciler::new(Breakpoint::default());
        let ghost = nav.add_trigger(Surface::Tabs, "missing", Some("contact"));
        nav.add_panel("about");
        nav.set_default_active("about");

        let outcome = nav.activate(ghost, DESKTOP_WIDTH);

        assert!(nav.trigger(ghost).unwrap().is_active());
        // The reset still ran; no panel is active anymore.
        assert!(nav.active_panel().is_none());
        // Scroll and drawer behavior are unaffected by the missing panel.
        assert_eq!(outcome.scroll_anchor.as_deref(), Some("contact"));
    }

    #[test]
    fn mobile_activation_without_tabs_trigger_stays_in_container() {
        let mut nav = Reconciler::new(Breakpoint::default());
        let drawer_only = nav.add_trigger(Surface::Drawer, "about", None);
        nav.add_panel("about");

        nav.activate(drawer_only, MOBILE_WIDTH);

        let panel = nav.panel("about").unwrap();
        assert!(panel.is_active());
        assert_eq!(panel.location(), PanelLocation::Container);
    }

    #[test]
    fn stale_trigger_id_is_a_no_op() {
        let (mut nav, tabs, _) = sample();
        nav.activate(tabs[0], DESKTOP_WIDTH);

        let outcome = nav.activate(TriggerId(99), DESKTOP_WIDTH);

        assert_eq!(outcome, Outcome::default());
        assert_eq!(nav.active_panel().unwrap().id(), "about");
    }

    #[test]
    fn set_default_active_marks_group_without_relocation() {
        let (mut nav, tabs, drawer) = sample();
        nav.set_default_active("rooms");

        assert!(nav.trigger(tabs[1]).unwrap().is_active());
        assert!(nav.trigger(drawer[1]).unwrap().is_active());
        let panel = nav.panel("rooms").unwrap();
        assert!(panel.is_active());
        assert_eq!(panel.location(), PanelLocation::Container);
    }

    #[test]
    fn anchor_is_reported_even_for_anchorless_neighbors() {
        let mut nav = Reconciler::new(Breakpoint::default());
        let plain = nav.add_trigger(Surface::Tabs, "about", None);
        nav.add_panel("about");

        let outcome = nav.activate(plain, DESKTOP_WIDTH);
        assert!(outcome.scroll_anchor.is_none());
    }
}
