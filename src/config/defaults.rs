// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Snackbar Defaults
// ==========================================================================

/// Default auto-dismiss delay (in milliseconds).
pub const DEFAULT_SNACKBAR_TIMEOUT_MS: i64 = 5000;

/// Timeout value meaning "never auto-dismiss".
pub const NEVER_TIMEOUT_SENTINEL: i64 = -1;

/// Message shown by the demo when nothing else is configured.
pub const DEFAULT_SNACKBAR_MESSAGE: &str = "Changes saved";
