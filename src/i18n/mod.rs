// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization using the Fluent localization system.
//! Translation bundles are embedded in the binary; locale resolution
//! follows CLI flag > config file > OS locale, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
