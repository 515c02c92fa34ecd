// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Border, Theme};

/// Style for the page header bar.
pub fn header_bar(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(palette_ext.background.weak.color.into()),
        border: Border {
            width: 1.0,
            color: palette_ext.background.strong.color,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for a content panel card.
pub fn panel_card(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(palette_ext.background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette::PRIMARY_700,
        },
        ..Default::default()
    }
}

/// Style for the off-canvas drawer panel.
pub fn drawer_panel(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(palette_ext.background.base.color.into()),
        border: Border {
            width: 1.0,
            color: palette_ext.background.strong.color,
            ..Default::default()
        },
        ..Default::default()
    }
}
