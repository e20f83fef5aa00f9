//! RGB ↔ HSL conversion for a single pixel.
//!
//! Both directions are stateless. [`to_hsl`] reads 8-bit channels and
//! produces hue in degrees with saturation, lightness and alpha in `[0, 1]`;
//! [`to_rgb`] normalizes its input (numbers or percentages) and re-encodes
//! to 8-bit channels.

use rgb::Rgba;

use crate::normalize::{Component, normalize};
use crate::pixel::{HslInput, Hsla};

const CHANNEL_MAX: f64 = 255.0;
const HUE_MAX: f64 = 360.0;

/// Convert an RGBA pixel to HSLA.
///
/// Achromatic pixels (`r == g == b`) have hue and saturation 0.
pub fn to_hsl(px: Rgba<u8>) -> Hsla {
    let unit = |c: u8| normalize(Component::Fraction(f64::from(c)), CHANNEL_MAX);
    let (r, g, b, a) = (unit(px.r), unit(px.g), unit(px.b), unit(px.a));

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsla { h: 0.0, s: 0.0, l, a };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsla {
        h: h / 6.0 * HUE_MAX,
        s,
        l,
        a,
    }
}

/// Convert an HSLA pixel to RGBA.
///
/// Channels are rounded half-to-even and clamped into `0..=255`, matching
/// the behavior of a clamped byte store.
pub fn to_rgb(px: &HslInput) -> Rgba<u8> {
    let h = normalize(px.h, HUE_MAX);
    let s = normalize(px.s, 1.0);
    let l = normalize(px.l, 1.0);
    let a = px.a.map_or(1.0, |a| normalize(a, 1.0));

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgba::new(to_u8(r), to_u8(g), to_u8(b), to_u8(a))
}

#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn to_u8(unit: f64) -> u8 {
    libm::rint(unit * CHANNEL_MAX).clamp(0.0, CHANNEL_MAX) as u8
}
