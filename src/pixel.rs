//! Pixel values accepted and returned by [`PixelBuffer`](crate::PixelBuffer).
//!
//! Reads hand back `rgb::Rgba<u8>` or [`Hsla`]. Writes take [`RgbInput`] or
//! [`HslInput`], whose alpha is optional and whose color channels are
//! checked when the write happens.

use core::fmt;

use rgb::{Rgb, Rgba};

use crate::PixelError;
use crate::normalize::Component;

/// One of the four channels stored per pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Alpha => "alpha",
        })
    }
}

// ---------------------------------------------------------------------------
// RGB write value
// ---------------------------------------------------------------------------

/// An RGB(A) pixel as supplied to [`PixelBuffer::set_rgb`](crate::PixelBuffer::set_rgb).
///
/// Any channel may be absent. A missing red, green or blue channel makes the
/// write fail with [`PixelError::MissingChannel`]; a missing alpha is written
/// as 255.
///
/// ```rust
/// use rgbhsl::RgbInput;
///
/// let opaque = RgbInput::from([10u8, 20, 30]);
/// assert_eq!(opaque.a, None);
///
/// // Short slices leave the trailing channels empty.
/// let partial = RgbInput::from(&[10u8, 20][..]);
/// assert_eq!(partial.b, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RgbInput {
    pub r: Option<u8>,
    pub g: Option<u8>,
    pub b: Option<u8>,
    pub a: Option<u8>,
}

impl RgbInput {
    /// Opaque color with all three color channels present.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: Some(r),
            g: Some(g),
            b: Some(b),
            a: None,
        }
    }

    /// Set the alpha channel.
    pub const fn with_alpha(mut self, a: u8) -> Self {
        self.a = Some(a);
        self
    }

    /// Resolve into a concrete pixel, defaulting alpha to 255.
    pub fn resolve(self) -> Result<Rgba<u8>, PixelError> {
        let r = self.r.ok_or(PixelError::MissingChannel(Channel::Red))?;
        let g = self.g.ok_or(PixelError::MissingChannel(Channel::Green))?;
        let b = self.b.ok_or(PixelError::MissingChannel(Channel::Blue))?;
        Ok(Rgba::new(r, g, b, self.a.unwrap_or(u8::MAX)))
    }
}

impl From<Rgba<u8>> for RgbInput {
    fn from(px: Rgba<u8>) -> Self {
        Self::new(px.r, px.g, px.b).with_alpha(px.a)
    }
}

impl From<Rgb<u8>> for RgbInput {
    fn from(px: Rgb<u8>) -> Self {
        Self::new(px.r, px.g, px.b)
    }
}

impl From<[u8; 3]> for RgbInput {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 4]> for RgbInput {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b).with_alpha(a)
    }
}

impl From<(u8, u8, u8)> for RgbInput {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for RgbInput {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b).with_alpha(a)
    }
}

/// Channels are taken in `r, g, b, a` order; bytes past the fourth are ignored.
impl From<&[u8]> for RgbInput {
    fn from(channels: &[u8]) -> Self {
        Self {
            r: channels.first().copied(),
            g: channels.get(1).copied(),
            b: channels.get(2).copied(),
            a: channels.get(3).copied(),
        }
    }
}

// ---------------------------------------------------------------------------
// HSL values
// ---------------------------------------------------------------------------

/// An HSL(A) pixel as returned by [`PixelBuffer::get_hsl`](crate::PixelBuffer::get_hsl).
///
/// `h` is in degrees, `[0, 360)`. `s`, `l` and `a` are in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

/// An HSL(A) pixel as supplied to [`PixelBuffer::set_hsl`](crate::PixelBuffer::set_hsl).
///
/// Hue is measured against 360, saturation, lightness and alpha against 1.
/// Each may be a plain number or a percentage; see [`Component`]. Alpha
/// defaults to fully opaque.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HslInput {
    pub h: Component,
    pub s: Component,
    pub l: Component,
    pub a: Option<Component>,
}

impl HslInput {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: Component::Fraction(h),
            s: Component::Fraction(s),
            l: Component::Fraction(l),
            a: None,
        }
    }

    /// Build from already-parsed components.
    pub const fn from_components(h: Component, s: Component, l: Component) -> Self {
        Self { h, s, l, a: None }
    }

    pub const fn with_alpha(mut self, a: Component) -> Self {
        self.a = Some(a);
        self
    }
}

impl From<Hsla> for HslInput {
    fn from(px: Hsla) -> Self {
        Self::new(px.h, px.s, px.l).with_alpha(Component::Fraction(px.a))
    }
}
