// SPDX-License-Identifier: MPL-2.0
//! `iced_kiosk` renders a brochure-style information page with the Iced GUI
//! framework.
//!
//! The page reconciles several navigation surfaces (a desktop tab strip, a
//! mobile accordion, and a drawer menu) against one set of content panels,
//! relocating the active panel between layouts as the window width crosses
//! the responsive breakpoint.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod nav;
pub mod ui;
