// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timeout domain type.
//!
//! A snackbar either hides itself after a finite delay or stays on screen
//! until something else closes it. Raw input (config values, text fields)
//! is coerced into one of those two cases and never rejected.

use crate::config::{DEFAULT_SNACKBAR_TIMEOUT_MS, NEVER_TIMEOUT_SENTINEL};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How long a visible snackbar stays on screen before hiding itself.
///
/// # Example
///
/// ```
/// use iced_snackbar::ui::snackbar::Timeout;
/// use std::time::Duration;
///
/// assert_eq!(Timeout::from_millis(2000), Timeout::After(Duration::from_millis(2000)));
/// assert_eq!(Timeout::from_millis(-1), Timeout::Never);
///
/// // Malformed text disables auto-dismiss instead of failing
/// assert_eq!(Timeout::parse("soon"), Timeout::Never);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeout {
    /// Hide after the given delay.
    After(Duration),
    /// Never hide automatically.
    Never,
}

impl Timeout {
    /// Builds a timeout from a millisecond count.
    ///
    /// `-1` is the "never" sentinel; any other negative value is clamped to zero.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        if millis == NEVER_TIMEOUT_SENTINEL {
            return Timeout::Never;
        }
        let millis = u64::try_from(millis).unwrap_or(0);
        Timeout::After(Duration::from_millis(millis))
    }

    /// Builds a timeout from a floating-point millisecond count.
    ///
    /// Non-finite values (NaN, infinities) disable auto-dismiss.
    /// The fractional part is truncated.
    #[must_use]
    pub fn from_millis_f64(millis: f64) -> Self {
        if !millis.is_finite() {
            return Timeout::Never;
        }
        if millis == NEVER_TIMEOUT_SENTINEL as f64 {
            return Timeout::Never;
        }
        if millis <= 0.0 {
            return Timeout::After(Duration::ZERO);
        }
        // Saturating float-to-int cast.
        Timeout::After(Duration::from_millis(millis.trunc() as u64))
    }

    /// Coerces free-form text into a timeout.
    ///
    /// Surrounding whitespace is ignored. Blank or non-numeric text yields
    /// [`Timeout::Never`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Timeout::Never;
        }
        match trimmed.parse::<i64>() {
            Ok(millis) => Timeout::from_millis(millis),
            Err(_) => trimmed
                .parse::<f64>()
                .map_or(Timeout::Never, Timeout::from_millis_f64),
        }
    }

    /// Returns the delay, or `None` when auto-dismiss is disabled.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Timeout::After(duration) => Some(duration),
            Timeout::Never => None,
        }
    }

    #[must_use]
    pub fn is_never(self) -> bool {
        matches!(self, Timeout::Never)
    }

    /// Millisecond representation used for persistence (`-1` for never).
    #[must_use]
    pub fn as_millis(self) -> i64 {
        match self {
            Timeout::After(duration) => i64::try_from(duration.as_millis()).unwrap_or(i64::MAX),
            Timeout::Never => NEVER_TIMEOUT_SENTINEL,
        }
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Timeout::from_millis(DEFAULT_SNACKBAR_TIMEOUT_MS)
    }
}

impl From<Duration> for Timeout {
    fn from(duration: Duration) -> Self {
        Timeout::After(duration)
    }
}

impl From<Option<Duration>> for Timeout {
    fn from(duration: Option<Duration>) -> Self {
        duration.map_or(Timeout::Never, Timeout::After)
    }
}

impl FromStr for Timeout {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Timeout::parse(s))
    }
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_millis())
    }
}

impl Serialize for Timeout {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.as_millis())
    }
}

/// Accepted on-disk shapes for a timeout value.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimeout {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Timeout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawTimeout::deserialize(deserializer)? {
            RawTimeout::Integer(millis) => Timeout::from_millis(millis),
            RawTimeout::Float(millis) => Timeout::from_millis_f64(millis),
            RawTimeout::Text(text) => Timeout::parse(&text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Timeout {
        Timeout::After(Duration::from_millis(value))
    }

    #[test]
    fn default_is_five_seconds() {
        assert_eq!(Timeout::default(), ms(5000));
    }

    #[test]
    fn sentinel_means_never() {
        assert_eq!(Timeout::from_millis(-1), Timeout::Never);
        assert_eq!(Timeout::from_millis_f64(-1.0), Timeout::Never);
        assert_eq!(Timeout::parse("-1"), Timeout::Never);
        assert_eq!(Timeout::parse(" -1.0 "), Timeout::Never);
    }

    #[test]
    fn other_negatives_clamp_to_zero() {
        assert_eq!(Timeout::from_millis(-250), ms(0));
        assert_eq!(Timeout::from_millis_f64(-0.5), ms(0));
        assert_eq!(Timeout::parse("-42"), ms(0));
    }

    #[test]
    fn fractional_millis_are_truncated() {
        assert_eq!(Timeout::from_millis_f64(1500.9), ms(1500));
        assert_eq!(Timeout::parse("2.5e3"), ms(2500));
    }

    #[test]
    fn malformed_text_disables_auto_dismiss() {
        assert_eq!(Timeout::parse(""), Timeout::Never);
        assert_eq!(Timeout::parse("   "), Timeout::Never);
        assert_eq!(Timeout::parse("five seconds"), Timeout::Never);
        assert_eq!(Timeout::parse("NaN"), Timeout::Never);
        assert_eq!(Timeout::parse("inf"), Timeout::Never);
    }

    #[test]
    fn numeric_text_is_trimmed() {
        assert_eq!(Timeout::parse("  3000\n"), ms(3000));
        assert_eq!("0".parse::<Timeout>(), Ok(ms(0)));
    }

    #[test]
    fn duration_accessor_matches_variant() {
        assert_eq!(ms(10).duration(), Some(Duration::from_millis(10)));
        assert_eq!(Timeout::Never.duration(), None);
        assert!(Timeout::Never.is_never());
        assert!(!ms(0).is_never());
    }

    #[test]
    fn millis_representation_uses_sentinel() {
        assert_eq!(ms(750).as_millis(), 750);
        assert_eq!(Timeout::Never.as_millis(), -1);
        assert_eq!(Timeout::Never.to_string(), "-1");
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Wrapper {
        timeout: Timeout,
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let from_int: Wrapper = toml::from_str("timeout = 1200").expect("int");
        let from_float: Wrapper = toml::from_str("timeout = 99.9").expect("float");
        let from_text: Wrapper = toml::from_str("timeout = \"800\"").expect("text");
        let from_junk: Wrapper = toml::from_str("timeout = \"later\"").expect("junk");

        assert_eq!(from_int.timeout, ms(1200));
        assert_eq!(from_float.timeout, ms(99));
        assert_eq!(from_text.timeout, ms(800));
        assert_eq!(from_junk.timeout, Timeout::Never);
    }

    #[test]
    fn serializes_as_integer_millis() {
        let text = toml::to_string(&Wrapper {
            timeout: Timeout::Never,
        })
        .expect("serialize");
        assert_eq!(text.trim(), "timeout = -1");
    }
}
