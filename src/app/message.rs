// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::snackbar::{self, Location, Variant};
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Snackbar(snackbar::Message),
    Show,
    Hide,
    MessageInputChanged(String),
    TimeoutInputChanged(String),
    LocationSelected(Location),
    VariantSelected(Variant),
    VerticalToggled(bool),
    MultiLineToggled(bool),
    /// "Undo" action inside the snackbar.
    Undo,
    /// "Close" action inside the snackbar.
    CloseSnackbar,
    SaveSettings,
}

/// Runtime flags passed from `main.rs` into the application.
///
/// Every field overrides the matching config value when set.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Raw `--timeout` value, coerced like any other timeout input.
    pub timeout: Option<String>,
    pub message: Option<String>,
    pub config_dir: Option<String>,
    pub theme_mode: Option<ThemeMode>,
}
