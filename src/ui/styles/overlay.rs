// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the search layer and the enquiry modal.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn backdrop_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Dimmed full-window backdrop behind overlays.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(backdrop_color())),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Floating card centered on the backdrop (search panel, enquiry modal).
pub fn card(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(palette_ext.background.base.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
        },
        ..Default::default()
    }
}
