// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! Output goes to stderr. The filter is read from `ICED_SNACKBAR_LOG` using
//! `tracing_subscriber::EnvFilter` syntax (e.g. `iced_snackbar=debug`) and
//! defaults to `info`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
pub const ENV_LOG_FILTER: &str = "ICED_SNACKBAR_LOG";

const DEFAULT_FILTER: &str = "info";

/// Builds the filter from the environment, falling back to the default.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// A second call is a no-op.
pub fn init() {
    let result = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();

    if let Err(e) = result {
        tracing::debug!("logging already initialized: {e}");
    }
}
