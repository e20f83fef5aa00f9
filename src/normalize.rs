//! Mapping caller-supplied numbers and percentages onto `[0, 1]`.

use core::fmt;
use core::str::FromStr;

/// Values this close to the maximum are reported as exactly 1.
const SNAP_EPSILON: f64 = 1e-6;

/// A channel value before normalization.
///
/// ```rust
/// use rgbhsl::{Component, normalize};
///
/// let half: Component = "50%".parse().unwrap();
/// assert_eq!(half, Component::Percentage(50.0));
/// assert_eq!(normalize(half, 1.0), 0.5);
/// assert_eq!(normalize(Component::Fraction(180.0), 360.0), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Component {
    /// A plain number on the same scale as the maximum it is normalized
    /// against, e.g. degrees for hue or `0..=255` for an 8-bit channel.
    Fraction(f64),
    /// A percentage of the maximum, `0..=100`.
    Percentage(f64),
}

impl From<f64> for Component {
    fn from(v: f64) -> Self {
        Self::Fraction(v)
    }
}

impl From<f32> for Component {
    fn from(v: f32) -> Self {
        Self::Fraction(f64::from(v))
    }
}

impl From<u8> for Component {
    fn from(v: u8) -> Self {
        Self::Fraction(f64::from(v))
    }
}

/// Error from parsing a [`Component`] out of text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid color component: expected a number or percentage")]
pub struct ParseComponentError;

impl FromStr for Component {
    type Err = ParseComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (digits, percent) = match s.strip_suffix('%') {
            Some(rest) => (rest.trim_end(), true),
            None => (s, false),
        };
        let v: f64 = digits.parse().map_err(|_| ParseComponentError)?;
        if !v.is_finite() {
            return Err(ParseComponentError);
        }
        Ok(if percent {
            Self::Percentage(v)
        } else {
            Self::Fraction(v)
        })
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fraction(v) => write!(f, "{v}"),
            Self::Percentage(v) => write!(f, "{v}%"),
        }
    }
}

/// Normalize `value` against `max` into `[0, 1]`.
///
/// Plain numbers are clamped into `[0, max]`. Percentages are clamped into
/// `[0, 100]` and converted as `floor(percent * max) / 100`, which truncates
/// them to a hundredth of a unit of the scale. Values within `1e-6` of `max`
/// come back as exactly `1`. NaN normalizes to `0`.
///
/// Percentages above 100% saturate at `1` rather than wrapping, so `"150%"`
/// of a hue is a full turn, not half of one.
///
/// A `max` that is zero, negative or NaN normalizes everything to `0`.
pub fn normalize(value: Component, max: f64) -> f64 {
    if max.is_nan() || max <= 0.0 {
        return 0.0;
    }
    let v = match value {
        Component::Fraction(v) => clamp(v, max),
        Component::Percentage(p) => libm::floor(clamp(p, 100.0) * max) / 100.0,
    };
    if libm::fabs(v - max) < SNAP_EPSILON {
        return 1.0;
    }
    libm::fmod(v, max) / max
}

#[inline]
fn clamp(v: f64, max: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, max) }
}
