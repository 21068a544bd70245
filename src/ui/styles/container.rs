// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Frame around one slide, rounded by the carousel's corner radius.
///
/// The frame background shows while a remote image is still loading.
pub fn slide_frame(corner_radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.weak.color;
        container::Style {
            background: Some(Background::Color(base)),
            border: Border {
                radius: corner_radius.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Frame for a slide whose image could not be fetched.
pub fn broken_slide(corner_radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: corner_radius.into(),
        },
        ..slide_frame(corner_radius)(theme)
    }
}

/// Page section surface.
pub fn section(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OPAQUE,
            ..base
        })),
        ..Default::default()
    }
}
