//! # rgbhsl
//!
//! A small, directly-addressable RGBA pixel buffer with two views over the
//! same storage: raw RGB(A) bytes and HSL(A) computed on demand.
//!
//! ```rust
//! use rgbhsl::{Access, HslInput, PixelBuffer};
//!
//! let mut img = PixelBuffer::new(4, 4, Access::ReadWrite).unwrap();
//! img.set_rgb(1, 2, [255u8, 0, 0]).unwrap();
//!
//! let hsl = img.get_hsl(1, 2).unwrap();
//! assert_eq!(hsl.h, 0.0);
//! assert_eq!(hsl.s, 1.0);
//!
//! img.set_hsl(1, 2, HslInput::new(120.0, 1.0, 0.5)).unwrap();
//! assert_eq!(img.get_rgb(1, 2).unwrap(), rgb::Rgba::new(0, 255, 0, 255));
//! ```
//!
//! ## Surfaces
//!
//! The buffer owns its bytes. A [`Surface`] supplies the initial contents
//! and receives them back on [`PixelBuffer::render`]; nothing is shared
//! between the two in the meantime.
//!
//! ## Feature flags
//!
//! - **`std`** (default) — `std` support for the error and logging crates.
//! - **`imgref`** — [`Surface`] for `ImgVec<Rgba<u8>>` and
//!   [`PixelBuffer::into_img_vec`].

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod buffer;
mod coord;
mod hsl;
mod normalize;
mod pixel;
mod surface;

pub use buffer::{Access, PixelBuffer};
pub use coord::Coordinate;
pub use hsl::{to_hsl, to_rgb};
pub use normalize::{Component, ParseComponentError, normalize};
pub use pixel::{Channel, HslInput, Hsla, RgbInput};
pub use surface::Surface;

/// Errors returned by [`PixelBuffer`] construction and pixel access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PixelError {
    /// A write was attempted on a buffer created with [`Access::ReadOnly`].
    #[error("attempted to set a pixel on a read-only buffer")]
    ReadOnly,
    /// An RGB write did not carry one of the required color channels.
    #[error("pixel is missing its {0} channel")]
    MissingChannel(Channel),
    /// Coordinates fall outside the buffer, or are negative or non-finite.
    ///
    /// `x` and `y` are the floored coordinates, or `None` when they could
    /// not be represented as an index at all.
    #[error("pixel coordinates are outside the {width}x{height} buffer")]
    OutOfRange {
        x: Option<usize>,
        y: Option<usize>,
        width: usize,
        height: usize,
    },
    /// Raw bytes handed to the buffer do not cover `width * height` pixels.
    #[error("expected {expected} bytes of RGBA data, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    /// Width or height is zero.
    #[error("image dimensions must be non-zero")]
    EmptyImage,
    /// `width * height * 4` does not fit in `usize`.
    #[error("image dimensions overflow the addressable size")]
    SizeOverflow,
}

/// Errors returned by [`PixelBuffer::render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError<E> {
    /// The surface's dimensions differ from the buffer's.
    #[error("surface is {surface_width}x{surface_height}, buffer is {width}x{height}")]
    SizeMismatch {
        width: usize,
        height: usize,
        surface_width: usize,
        surface_height: usize,
    },
    /// The surface refused the new contents.
    #[error("surface rejected the rendered pixels")]
    Surface(E),
}
