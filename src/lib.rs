// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` provides auto-dismissing snackbar notifications for the Iced GUI framework.
//!
//! The [`ui::snackbar`] module holds the reusable component; [`app`] is a small
//! demo application that hosts one snackbar and persists its settings.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;
