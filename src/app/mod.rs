// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the navigation reconciler, the overlay flags, and
//! localization together and translates messages into state changes or
//! tasks (the deferred scroll). Policy decisions (breakpoint source, initial
//! section, window sizing) stay close to the update loop so user-facing
//! behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::content::{self, Section};
use crate::i18n::I18n;
use crate::nav::scroll::PendingScroll;
use crate::nav::{Breakpoint, Reconciler};
use crate::ui::search;
use crate::ui::state::OverlayState;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    nav: Reconciler,
    /// Current window width; feeds the viewport-mode derivation.
    window_width: f32,
    pending_scroll: PendingScroll,
    search: search::State,
    /// Whether the search overlay is shown.
    search_open: OverlayState,
    /// Whether the drawer menu is open.
    drawer_open: OverlayState,
    /// Whether the enquiry modal is shown.
    enquiry_open: OverlayState,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("window_width", &self.window_width)
            .field(
                "active_panel",
                &self.nav.active_panel().map(|p| p.id().to_owned()),
            )
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            nav: content::build_reconciler(Breakpoint::default()),
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            pending_scroll: PendingScroll::default(),
            search: search::State::default(),
            search_open: OverlayState::default(),
            drawer_open: OverlayState::default(),
            enquiry_open: OverlayState::default(),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from persisted configuration and CLI
    /// flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let breakpoint = config.breakpoint.map(Breakpoint::new).unwrap_or_default();
        let mut nav = content::build_reconciler(breakpoint);

        // Optional startup section, validated against the catalog.
        if let Some(section) = flags.section.as_deref().and_then(Section::from_id) {
            nav.set_default_active(section.id());
        }

        let app = App {
            i18n,
            nav,
            theme_mode: config.theme_mode,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let section_title = self
            .nav
            .active_panel()
            .and_then(|p| Section::from_id(p.id()))
            .map(|s| self.i18n.tr(s.title_key()));

        match section_title {
            Some(title) => format!("{title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            nav: &mut self.nav,
            window_width: &mut self.window_width,
            pending_scroll: &mut self.pending_scroll,
            search: &mut self.search,
            search_open: &mut self.search_open,
            drawer_open: &mut self.drawer_open,
            enquiry_open: &mut self.enquiry_open,
        };

        match message {
            Message::Header(header_message) => {
                update::handle_header_message(&mut ctx, header_message)
            }
            Message::Panels(panels_message) => {
                update::handle_panels_message(&mut ctx, panels_message)
            }
            Message::Drawer(drawer_message) => {
                update::handle_drawer_message(&mut ctx, drawer_message)
            }
            Message::Search(search_message) => {
                update::handle_search_message(&mut ctx, search_message)
            }
            Message::Enquiry(enquiry_message) => {
                update::handle_enquiry_message(&mut ctx, enquiry_message)
            }
            Message::ScrollDue { generation, anchor } => {
                update::handle_scroll_due(&mut ctx, generation, &anchor)
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            nav: &self.nav,
            window_width: self.window_width,
            search: &self.search,
            search_open: self.search_open,
            drawer_open: self.drawer_open,
            enquiry_open: self.enquiry_open,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{PanelLocation, Surface};
    use crate::ui::{drawer, enquiry, header, panels, search as search_ui};

    const MOBILE: f32 = 800.0;
    const DESKTOP: f32 = 1200.0;

    fn resize(app: &mut App, width: f32) {
        let _ = app.update(Message::WindowResized(iced::Size::new(width, 700.0)));
    }

    fn tabs_trigger(app: &App, target: &str) -> crate::nav::TriggerId {
        app.nav
            .find_trigger(Surface::Tabs, target)
            .expect("catalog trigger exists")
    }

    fn drawer_trigger(app: &App, target: &str) -> crate::nav::TriggerId {
        app.nav
            .find_trigger(Surface::Drawer, target)
            .expect("catalog trigger exists")
    }

    #[test]
    fn default_app_starts_on_the_about_section() {
        let app = App::default();
        assert_eq!(app.nav.active_panel().unwrap().id(), "about");
        assert_eq!(
            app.nav.active_panel().unwrap().location(),
            PanelLocation::Container
        );
    }

    #[test]
    fn tab_press_at_desktop_width_keeps_panel_in_container() {
        let mut app = App::default();
        resize(&mut app, DESKTOP);
        let id = tabs_trigger(&app, "rooms");

        let _ = app.update(Message::Panels(panels::Message::TriggerPressed(id)));

        let panel = app.nav.panel("rooms").unwrap();
        assert!(panel.is_active());
        assert_eq!(panel.location(), PanelLocation::Container);
    }

    #[test]
    fn tab_press_at_mobile_width_parks_panel_under_trigger() {
        let mut app = App::default();
        resize(&mut app, MOBILE);
        let id = tabs_trigger(&app, "dining");

        let _ = app.update(Message::Panels(panels::Message::TriggerPressed(id)));

        let panel = app.nav.panel("dining").unwrap();
        assert!(panel.is_active());
        assert_eq!(panel.location(), PanelLocation::AfterTrigger(id));
    }

    #[test]
    fn activation_synchronizes_drawer_triggers() {
        let mut app = App::default();
        let id = tabs_trigger(&app, "rooms");

        let _ = app.update(Message::Panels(panels::Message::TriggerPressed(id)));

        let drawer_id = drawer_trigger(&app, "rooms");
        assert!(app.nav.trigger(drawer_id).unwrap().is_active());
        let other = drawer_trigger(&app, "about");
        assert!(!app.nav.trigger(other).unwrap().is_active());
    }

    #[test]
    fn drawer_activation_closes_the_drawer() {
        let mut app = App::default();
        resize(&mut app, MOBILE);
        let _ = app.update(Message::Header(header::Message::ToggleDrawer));
        assert!(app.drawer_open.is_active());

        let id = drawer_trigger(&app, "location");
        let _ = app.update(Message::Drawer(drawer::Message::TriggerPressed(id)));

        assert!(!app.drawer_open.is_active());
        // Parked under the tabs trigger even though the drawer was clicked.
        let host = tabs_trigger(&app, "location");
        assert_eq!(
            app.nav.panel("location").unwrap().location(),
            PanelLocation::AfterTrigger(host)
        );
    }

    #[test]
    fn resize_between_clicks_relocates_without_duplication() {
        let mut app = App::default();
        resize(&mut app, DESKTOP);
        let id = tabs_trigger(&app, "rooms");

        let _ = app.update(Message::Panels(panels::Message::TriggerPressed(id)));
        assert_eq!(
            app.nav.panel("rooms").unwrap().location(),
            PanelLocation::Container
        );

        resize(&mut app, MOBILE);
        let _ = app.update(Message::Panels(panels::Message::TriggerPressed(id)));

        assert_eq!(
            app.nav.panel("rooms").unwrap().location(),
            PanelLocation::AfterTrigger(id)
        );
        assert_eq!(app.nav.panels().filter(|p| p.id() == "rooms").count(), 1);
    }

    #[test]
    fn exactly_one_panel_active_after_any_activation() {
        let mut app = App::default();
        for target in ["rooms", "dining", "about", "facilities"] {
            let id = tabs_trigger(&app, target);
            let _ = app.update(Message::Panels(panels::Message::TriggerPressed(id)));

            assert_eq!(app.nav.panels().filter(|p| p.is_active()).count(), 1);
            for panel in app.nav.panels().filter(|p| !p.is_active()) {
                assert_eq!(panel.location(), PanelLocation::Container);
            }
        }
    }

    #[test]
    fn search_result_activates_section_and_closes_overlay() {
        let mut app = App::default();
        let _ = app.update(Message::Header(header::Message::OpenSearch));
        assert!(app.search_open.is_active());

        let _ = app.update(Message::Search(search_ui::Message::ResultPressed(
            Section::Dining,
        )));

        assert!(!app.search_open.is_active());
        assert_eq!(app.nav.active_panel().unwrap().id(), "dining");
    }

    #[test]
    fn search_close_only_hides_the_overlay() {
        let mut app = App::default();
        let _ = app.update(Message::Header(header::Message::OpenSearch));
        let _ = app.update(Message::Search(search_ui::Message::Close));

        assert!(!app.search_open.is_active());
        assert_eq!(app.nav.active_panel().unwrap().id(), "about");
    }

    #[test]
    fn enquiry_background_press_closes_the_modal() {
        let mut app = App::default();
        let _ = app.update(Message::Header(header::Message::OpenEnquiry));
        assert!(app.enquiry_open.is_active());

        let _ = app.update(Message::Enquiry(enquiry::Message::BackgroundPressed));
        assert!(!app.enquiry_open.is_active());
    }

    #[test]
    fn enquiry_reachable_from_the_drawer() {
        let mut app = App::default();
        let _ = app.update(Message::Header(header::Message::ToggleDrawer));
        let _ = app.update(Message::Drawer(drawer::Message::OpenEnquiry));

        assert!(app.enquiry_open.is_active());
        assert!(!app.drawer_open.is_active());
    }

    #[test]
    fn reactivating_the_active_trigger_is_idempotent() {
        let mut app = App::default();
        resize(&mut app, MOBILE);
        let id = tabs_trigger(&app, "rooms");

        let _ = app.update(Message::Panels(panels::Message::TriggerPressed(id)));
        let before: Vec<_> = app
            .nav
            .panels()
            .map(|p| (p.id().to_owned(), p.is_active(), p.location()))
            .collect();

        let _ = app.update(Message::Panels(panels::Message::TriggerPressed(id)));
        let after: Vec<_> = app
            .nav
            .panels()
            .map(|p| (p.id().to_owned(), p.is_active(), p.location()))
            .collect();

        assert_eq!(before, after);
    }

    #[test]
    fn stale_scroll_generation_is_discarded() {
        let mut app = App::default();
        let rooms = tabs_trigger(&app, "rooms");
        let dining = tabs_trigger(&app, "dining");

        // Two rapid activations: the first timer's generation goes stale.
        let _ = app.update(Message::Panels(panels::Message::TriggerPressed(rooms)));
        let _ = app.update(Message::Panels(panels::Message::TriggerPressed(dining)));

        let _ = app.update(Message::ScrollDue {
            generation: 1,
            anchor: "rooms".to_owned(),
        });

        // The stale timer changed nothing; the latest activation stands.
        assert_eq!(app.nav.active_panel().unwrap().id(), "dining");
        assert!(app.pending_scroll.is_current(2));
    }

    #[test]
    fn title_reflects_the_active_section() {
        let mut app = App {
            i18n: I18n::new(Some("en-US".to_string()), &config::Config::default()),
            ..App::default()
        };
        assert_eq!(app.title(), "About - Harbourlight House");

        let id = tabs_trigger(&app, "rooms");
        let _ = app.update(Message::Panels(panels::Message::TriggerPressed(id)));
        assert_eq!(app.title(), "Rooms - Harbourlight House");
    }

    #[test]
    fn view_renders_in_both_modes_with_overlays() {
        let mut app = App::default();
        drop(app.view());

        resize(&mut app, MOBILE);
        let _ = app.update(Message::Header(header::Message::ToggleDrawer));
        let _ = app.update(Message::Header(header::Message::OpenSearch));
        let _ = app.update(Message::Header(header::Message::OpenEnquiry));
        let _element = app.view();
    }
}
