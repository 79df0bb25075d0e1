// SPDX-License-Identifier: MPL-2.0
//! Presentation options for a snackbar.
//!
//! None of these affect the auto-dismiss timer; they only change where and
//! how the wrapper is drawn.

use crate::ui::design_tokens::{radius, sizing};
use iced::{alignment, Color};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Screen anchor for the snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    TopStart,
    Top,
    TopEnd,
    BottomStart,
    #[default]
    Bottom,
    BottomEnd,
}

impl Location {
    pub const ALL: [Location; 6] = [
        Location::TopStart,
        Location::Top,
        Location::TopEnd,
        Location::BottomStart,
        Location::Bottom,
        Location::BottomEnd,
    ];

    #[must_use]
    pub fn vertical(self) -> alignment::Vertical {
        match self {
            Location::TopStart | Location::Top | Location::TopEnd => alignment::Vertical::Top,
            Location::BottomStart | Location::Bottom | Location::BottomEnd => {
                alignment::Vertical::Bottom
            }
        }
    }

    #[must_use]
    pub fn horizontal(self) -> alignment::Horizontal {
        match self {
            Location::TopStart | Location::BottomStart => alignment::Horizontal::Left,
            Location::Top | Location::Bottom => alignment::Horizontal::Center,
            Location::TopEnd | Location::BottomEnd => alignment::Horizontal::Right,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Location::TopStart => "Top start",
            Location::Top => "Top",
            Location::TopEnd => "Top end",
            Location::BottomStart => "Bottom start",
            Location::Bottom => "Bottom",
            Location::BottomEnd => "Bottom end",
        };
        f.write_str(label)
    }
}

/// Surface treatment of the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Solid surface with a drop shadow.
    #[default]
    Elevated,
    /// Solid surface, no shadow.
    Flat,
    /// Translucent tint of the accent color.
    Tonal,
    /// Transparent with an accent border.
    Outlined,
    /// Transparent, accent-colored text.
    Text,
    /// Transparent, inherits text color.
    Plain,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Elevated,
        Variant::Flat,
        Variant::Tonal,
        Variant::Outlined,
        Variant::Text,
        Variant::Plain,
    ];
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Variant::Elevated => "Elevated",
            Variant::Flat => "Flat",
            Variant::Tonal => "Tonal",
            Variant::Outlined => "Outlined",
            Variant::Text => "Text",
            Variant::Plain => "Plain",
        };
        f.write_str(label)
    }
}

/// Corner rounding of the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounded {
    None,
    #[default]
    Small,
    Medium,
    Large,
    Pill,
}

impl Rounded {
    #[must_use]
    pub fn radius(self) -> f32 {
        match self {
            Rounded::None => radius::NONE,
            Rounded::Small => radius::SM,
            Rounded::Medium => radius::MD,
            Rounded::Large => radius::LG,
            Rounded::Pill => radius::FULL,
        }
    }
}

/// Everything about a snackbar that is not its message or its timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnackbarOptions {
    pub location: Location,
    pub variant: Variant,
    pub rounded: Rounded,
    /// Accent color; `None` uses the theme's inverse surface.
    pub color: Option<Color>,
    pub multi_line: bool,
    /// Stack actions under the message.
    pub vertical: bool,
    pub max_width: f32,
}

impl Default for SnackbarOptions {
    fn default() -> Self {
        Self {
            location: Location::default(),
            variant: Variant::default(),
            rounded: Rounded::default(),
            color: None,
            multi_line: false,
            vertical: false,
            max_width: sizing::SNACKBAR_MAX_WIDTH,
        }
    }
}

impl SnackbarOptions {
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_rounded(mut self, rounded: Rounded) -> Self {
        self.rounded = rounded;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn multi_line(mut self, enabled: bool) -> Self {
        self.multi_line = enabled;
        self
    }

    #[must_use]
    pub fn vertical(mut self, enabled: bool) -> Self {
        self.vertical = enabled;
        self
    }

    /// Never narrower than the minimum snackbar width.
    #[must_use]
    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width.max(sizing::SNACKBAR_MIN_WIDTH);
        self
    }

    /// Multi-line only applies to horizontal layouts.
    #[must_use]
    pub fn is_multi_line(&self) -> bool {
        self.multi_line && !self.vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_location_is_bottom_center() {
        let location = Location::default();
        assert_eq!(location.vertical(), alignment::Vertical::Bottom);
        assert_eq!(location.horizontal(), alignment::Horizontal::Center);
    }

    #[test]
    fn corner_locations_map_to_edges() {
        assert_eq!(Location::TopStart.vertical(), alignment::Vertical::Top);
        assert_eq!(Location::TopStart.horizontal(), alignment::Horizontal::Left);
        assert_eq!(Location::BottomEnd.vertical(), alignment::Vertical::Bottom);
        assert_eq!(Location::BottomEnd.horizontal(), alignment::Horizontal::Right);
    }

    #[test]
    fn vertical_layout_overrides_multi_line() {
        let options = SnackbarOptions::default().multi_line(true);
        assert!(options.is_multi_line());
        assert!(!options.vertical(true).is_multi_line());
    }

    #[test]
    fn max_width_respects_minimum() {
        let options = SnackbarOptions::default().with_max_width(10.0);
        assert_eq!(options.max_width, sizing::SNACKBAR_MIN_WIDTH);
    }

    #[test]
    fn rounding_grows_monotonically() {
        let radii = [
            Rounded::None,
            Rounded::Small,
            Rounded::Medium,
            Rounded::Large,
            Rounded::Pill,
        ]
        .map(Rounded::radius);
        assert!(radii.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn location_serializes_kebab_case() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            location: Location,
        }
        let parsed: Wrapper = toml::from_str("location = \"top-end\"").expect("parse");
        assert_eq!(parsed.location, Location::TopEnd);
    }
}
