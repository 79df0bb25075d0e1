// SPDX-License-Identifier: MPL-2.0
//! Style functions for the snackbar wrapper and its action buttons.

use super::options::{SnackbarOptions, Variant};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Accent color of a snackbar: the explicit option, or a surface that
/// contrasts with the current theme.
#[must_use]
pub fn accent_color(theme: &Theme, options: &SnackbarOptions) -> Color {
    options.color.unwrap_or_else(|| {
        if theme.extended_palette().is_dark {
            palette::GRAY_100
        } else {
            palette::GRAY_800
        }
    })
}

/// Readable text color on top of a solid `background`.
#[must_use]
pub fn on_color(background: Color) -> Color {
    let luminance = 0.2126 * background.r + 0.7152 * background.g + 0.0722 * background.b;
    if luminance > 0.5 {
        palette::GRAY_900
    } else {
        palette::WHITE
    }
}

/// Text color used inside the wrapper for the given options.
#[must_use]
pub fn content_color(theme: &Theme, options: &SnackbarOptions) -> Color {
    let accent = accent_color(theme, options);
    match options.variant {
        Variant::Elevated | Variant::Flat => on_color(accent),
        Variant::Tonal | Variant::Outlined | Variant::Text => accent,
        Variant::Plain => theme.palette().text,
    }
}

/// Wrapper container style.
#[must_use]
pub fn wrapper(theme: &Theme, options: &SnackbarOptions) -> container::Style {
    let accent = accent_color(theme, options);
    let corner = options.rounded.radius();

    let (background, border_color, border_width, drop_shadow) = match options.variant {
        Variant::Elevated => (Some(accent), Color::TRANSPARENT, 0.0, shadow::LG),
        Variant::Flat => (Some(accent), Color::TRANSPARENT, 0.0, shadow::NONE),
        Variant::Tonal => (
            Some(Color {
                a: opacity::TONAL,
                ..accent
            }),
            Color::TRANSPARENT,
            0.0,
            shadow::NONE,
        ),
        Variant::Outlined => (None, accent, border::WIDTH_SM, shadow::NONE),
        Variant::Text | Variant::Plain => (None, Color::TRANSPARENT, 0.0, shadow::NONE),
    };

    container::Style {
        background: background.map(Background::Color),
        border: Border {
            color: border_color,
            width: border_width,
            radius: corner.into(),
        },
        shadow: drop_shadow,
        text_color: Some(content_color(theme, options)),
        ..Default::default()
    }
}

/// Text-variant button without ripple, tinted like the surrounding content.
#[must_use]
pub fn action_button(
    theme: &Theme,
    status: button::Status,
    options: &SnackbarOptions,
) -> button::Style {
    let text_color = content_color(theme, options);
    let hover_layer = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..text_color
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, text_color),
        button::Status::Hovered => (hover_layer(opacity::OVERLAY_SUBTLE), text_color),
        button::Status::Pressed => (hover_layer(opacity::OVERLAY_SUBTLE * 2.0), text_color),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text_color
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
