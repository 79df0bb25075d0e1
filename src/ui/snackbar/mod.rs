// SPDX-License-Identifier: MPL-2.0
//! Auto-dismissing snackbar notifications.
//!
//! A snackbar shows a short message with optional actions and hides itself
//! after a timeout. Hovering the pointer over it pauses the countdown; leaving
//! restarts it from zero.
//!
//! # Components
//!
//! - [`timeout`] - `Timeout` value and coercion of raw input
//! - [`timer`] - `AutoDismiss` controller owning the single pending hide
//! - [`options`] - Location, variant and layout flags
//! - [`style`] - Style functions for the wrapper and action buttons
//! - [`component`] - `Snackbar` messages, update and view
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::snackbar::{self, Snackbar, Timeout};
//!
//! let mut snackbar = Snackbar::new(Timeout::from_millis(4000));
//!
//! // The host owns the flag and reports every change
//! self.visible = true;
//! let task = snackbar.visibility_changed(true).map(Message::Snackbar);
//!
//! // Route snackbar messages back and honour the event
//! let (event, task) = snackbar.update(message, self.visible);
//! if let snackbar::Event::VisibilityChanged(visible) = event {
//!     self.visible = visible;
//! }
//! ```

mod component;
mod options;
pub mod style;
mod timeout;
mod timer;

pub use component::{Event, Message, Snackbar};
pub use options::{Location, Rounded, SnackbarOptions, Variant};
pub use timeout::Timeout;
pub use timer::{AutoDismiss, Schedule, TimerId, TimerState};
