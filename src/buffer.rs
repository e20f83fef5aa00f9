//! The owned RGBA pixel buffer.

use alloc::vec;
use alloc::vec::Vec;

use rgb::Rgba;

use crate::{PixelError, RenderError};
use crate::coord::{Coordinate, resolve};
use crate::hsl::{to_hsl, to_rgb};
use crate::pixel::{HslInput, Hsla, RgbInput};
use crate::surface::Surface;

const BPP: usize = 4;

/// Whether a [`PixelBuffer`] accepts writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Access {
    #[default]
    ReadWrite,
    ReadOnly,
}

/// A `width × height` RGBA image stored as flat, row-major bytes.
///
/// Pixel `(x, y)` occupies bytes `(y * width + x) * 4 ..` as `r, g, b, a`.
/// The dimensions and access mode are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
    access: Access,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

fn byte_len(width: usize, height: usize) -> Result<usize, PixelError> {
    if width == 0 || height == 0 {
        return Err(PixelError::EmptyImage);
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(BPP))
        .ok_or(PixelError::SizeOverflow)
}

impl PixelBuffer {
    /// A buffer of transparent black pixels.
    pub fn new(width: usize, height: usize, access: Access) -> Result<Self, PixelError> {
        let len = byte_len(width, height)?;
        Ok(Self {
            data: vec![0; len],
            width,
            height,
            access,
        })
    }

    /// Take ownership of `width * height * 4` bytes of packed RGBA.
    pub fn from_bytes(
        data: Vec<u8>,
        width: usize,
        height: usize,
        access: Access,
    ) -> Result<Self, PixelError> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(PixelError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            access,
        })
    }

    /// Copy the current contents of `surface` into a new buffer.
    ///
    /// The buffer does not keep a reference to the surface; use
    /// [`render`](Self::render) to push changes back.
    pub fn from_surface<S: Surface + ?Sized>(
        surface: &S,
        access: Access,
    ) -> Result<Self, PixelError> {
        let mut buf = Self::new(surface.width(), surface.height(), access)?;
        surface.read_rgba(&mut buf.data);
        tracing::debug!(
            width = buf.width,
            height = buf.height,
            ?access,
            "loaded pixel buffer from surface"
        );
        Ok(buf)
    }
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl PixelBuffer {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn access(&self) -> Access {
        self.access
    }

    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.access == Access::ReadOnly
    }

    /// The packed RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The buffer viewed as pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba<u8>] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Copy the pixels into an [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn into_img_vec(self) -> imgref::ImgVec<Rgba<u8>> {
        let pixels = self.pixels().to_vec();
        imgref::ImgVec::new(pixels, self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// Pixel access
// ---------------------------------------------------------------------------

impl PixelBuffer {
    /// Byte offset of pixel `(x, y)`: `(floor(y) * width + floor(x)) * 4`.
    ///
    /// ```rust
    /// use rgbhsl::{Access, PixelBuffer};
    ///
    /// let img = PixelBuffer::new(4, 4, Access::ReadWrite).unwrap();
    /// assert_eq!(img.offset_of(2, 1), Ok(24));
    /// assert_eq!(img.offset_of(2.5, 1.9), Ok(24));
    /// assert!(img.offset_of(4, 0).is_err());
    /// ```
    pub fn offset_of<X, Y>(&self, x: X, y: Y) -> Result<usize, PixelError>
    where
        X: Coordinate,
        Y: Coordinate,
    {
        let xi = resolve(x, "x");
        let yi = resolve(y, "y");
        match (xi, yi) {
            (Some(x), Some(y)) if x < self.width && y < self.height => {
                Ok((y * self.width + x) * BPP)
            }
            _ => Err(PixelError::OutOfRange {
                x: xi,
                y: yi,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Read pixel `(x, y)`.
    pub fn get_rgb<X, Y>(&self, x: X, y: Y) -> Result<Rgba<u8>, PixelError>
    where
        X: Coordinate,
        Y: Coordinate,
    {
        let i = self.offset_of(x, y)?;
        let px = &self.data[i..i + BPP];
        Ok(Rgba::new(px[0], px[1], px[2], px[3]))
    }

    /// Write pixel `(x, y)`.
    ///
    /// Fails with [`PixelError::ReadOnly`] on a read-only buffer and with
    /// [`PixelError::MissingChannel`] when red, green or blue is absent.
    /// A missing alpha is written as 255.
    pub fn set_rgb<X, Y, P>(&mut self, x: X, y: Y, pixel: P) -> Result<(), PixelError>
    where
        X: Coordinate,
        Y: Coordinate,
        P: Into<RgbInput>,
    {
        if self.is_read_only() {
            tracing::debug!(?x, ?y, "rejected write to read-only pixel buffer");
            return Err(PixelError::ReadOnly);
        }
        let px = pixel.into().resolve()?;
        let i = self.offset_of(x, y)?;
        self.data[i..i + BPP].copy_from_slice(&[px.r, px.g, px.b, px.a]);
        Ok(())
    }

    /// Read pixel `(x, y)` as HSL.
    pub fn get_hsl<X, Y>(&self, x: X, y: Y) -> Result<Hsla, PixelError>
    where
        X: Coordinate,
        Y: Coordinate,
    {
        self.get_rgb(x, y).map(to_hsl)
    }

    /// Write pixel `(x, y)` from HSL.
    ///
    /// The color is converted to RGB first and written through
    /// [`set_rgb`](Self::set_rgb), with the same failure modes.
    pub fn set_hsl<X, Y, P>(&mut self, x: X, y: Y, pixel: P) -> Result<(), PixelError>
    where
        X: Coordinate,
        Y: Coordinate,
        P: Into<HslInput>,
    {
        self.set_rgb(x, y, to_rgb(&pixel.into()))
    }

    /// Push the buffer's contents to `surface`.
    ///
    /// This is the only way changes become visible outside the buffer.
    /// Fails with [`RenderError::SizeMismatch`] without touching the surface
    /// when its dimensions differ from the buffer's.
    pub fn render<S>(&self, surface: &mut S) -> Result<(), RenderError<S::Error>>
    where
        S: Surface + ?Sized,
    {
        let (surface_width, surface_height) = (surface.width(), surface.height());
        if (surface_width, surface_height) != (self.width, self.height) {
            return Err(RenderError::SizeMismatch {
                width: self.width,
                height: self.height,
                surface_width,
                surface_height,
            });
        }
        tracing::debug!(width = self.width, height = self.height, "rendering pixel buffer");
        surface.present_rgba(&self.data).map_err(RenderError::Surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Component;
    use crate::pixel::Channel;
    use core::convert::Infallible;

    /// A surface backed by a plain byte vector that counts presents.
    struct MemorySurface {
        width: usize,
        height: usize,
        bytes: Vec<u8>,
        presents: usize,
    }

    impl MemorySurface {
        fn new(width: usize, height: usize) -> Self {
            let bytes = (0..width * height * 4).map(|i| (i % 251) as u8).collect();
            Self {
                width,
                height,
                bytes,
                presents: 0,
            }
        }
    }

    impl Surface for MemorySurface {
        type Error = Infallible;

        fn width(&self) -> usize {
            self.width
        }

        fn height(&self) -> usize {
            self.height
        }

        fn read_rgba(&self, dst: &mut [u8]) {
            dst.copy_from_slice(&self.bytes);
        }

        fn present_rgba(&mut self, src: &[u8]) -> Result<(), Infallible> {
            self.bytes.copy_from_slice(src);
            self.presents += 1;
            Ok(())
        }
    }

    fn blank(w: usize, h: usize) -> PixelBuffer {
        PixelBuffer::new(w, h, Access::ReadWrite).unwrap()
    }

    #[test]
    fn test_offset_math() {
        let img = blank(4, 4);
        assert_eq!(img.offset_of(2, 1), Ok(24));
        assert_eq!(img.offset_of(0, 0), Ok(0));
        assert_eq!(img.offset_of(3, 3), Ok(60));
    }

    #[test]
    fn test_offset_non_square() {
        let img = blank(5, 2);
        assert_eq!(img.offset_of(4, 1), Ok((5 + 4) * 4));
    }

    #[test]
    fn test_fractional_coordinates_floor() {
        let img = blank(4, 4);
        assert_eq!(img.offset_of(2.99, 1.01), img.offset_of(2, 1));
    }

    #[test]
    fn test_out_of_range() {
        let img = blank(4, 3);
        assert_eq!(
            img.offset_of(4, 0),
            Err(PixelError::OutOfRange {
                x: Some(4),
                y: Some(0),
                width: 4,
                height: 3
            })
        );
        assert!(img.get_rgb(0, 3).is_err());
        assert_eq!(
            img.get_rgb(-1, 0),
            Err(PixelError::OutOfRange {
                x: None,
                y: Some(0),
                width: 4,
                height: 3
            })
        );
        assert!(img.get_rgb(f64::NAN, 0).is_err());
    }

    #[test]
    fn test_set_then_get() {
        let mut img = blank(3, 3);
        img.set_rgb(1, 2, [10u8, 20, 30, 40]).unwrap();
        assert_eq!(img.get_rgb(1, 2), Ok(Rgba::new(10, 20, 30, 40)));
        assert_eq!(&img.as_bytes()[28..32], &[10, 20, 30, 40]);
        // Neighbors untouched.
        assert_eq!(img.get_rgb(0, 2), Ok(Rgba::new(0, 0, 0, 0)));
        assert_eq!(img.get_rgb(2, 2), Ok(Rgba::new(0, 0, 0, 0)));
    }

    #[test]
    fn test_missing_alpha_defaults_to_opaque() {
        let mut img = blank(2, 2);
        img.set_rgb(0, 0, RgbInput::new(10, 20, 30)).unwrap();
        assert_eq!(img.get_rgb(0, 0), Ok(Rgba::new(10, 20, 30, 255)));
    }

    #[test]
    fn test_missing_channel_rejected() {
        let mut img = blank(2, 2);
        let partial = RgbInput {
            r: Some(10),
            g: Some(20),
            ..Default::default()
        };
        assert_eq!(
            img.set_rgb(0, 0, partial),
            Err(PixelError::MissingChannel(Channel::Blue))
        );
        assert_eq!(img.get_rgb(0, 0), Ok(Rgba::new(0, 0, 0, 0)));
    }

    #[test]
    fn test_read_only() {
        let mut img = PixelBuffer::new(2, 2, Access::ReadOnly).unwrap();
        assert!(img.is_read_only());
        assert_eq!(img.set_rgb(0, 0, [1u8, 2, 3]), Err(PixelError::ReadOnly));
        assert_eq!(
            img.set_hsl(0, 0, HslInput::new(0.0, 1.0, 0.5)),
            Err(PixelError::ReadOnly)
        );
        assert_eq!(img.get_rgb(0, 0), Ok(Rgba::new(0, 0, 0, 0)));
    }

    #[test]
    fn test_read_only_checked_before_bounds() {
        let mut img = PixelBuffer::new(2, 2, Access::ReadOnly).unwrap();
        assert_eq!(img.set_rgb(9, 9, [1u8, 2, 3]), Err(PixelError::ReadOnly));
    }

    #[test]
    fn test_hsl_views_same_storage() {
        let mut img = blank(2, 1);
        img.set_hsl(1, 0, HslInput::new(240.0, 1.0, 0.5)).unwrap();
        assert_eq!(img.get_rgb(1, 0), Ok(Rgba::new(0, 0, 255, 255)));

        img.set_rgb(0, 0, [0u8, 255, 0]).unwrap();
        let hsl = img.get_hsl(0, 0).unwrap();
        assert!((hsl.h - 120.0).abs() < 1e-9);
        assert_eq!(hsl.a, 1.0);
    }

    #[test]
    fn test_hsl_alpha() {
        let mut img = blank(1, 1);
        let input = HslInput::new(0.0, 0.0, 1.0).with_alpha(Component::Fraction(0.0));
        img.set_hsl(0, 0, input).unwrap();
        assert_eq!(img.get_rgb(0, 0), Ok(Rgba::new(255, 255, 255, 0)));
    }

    #[test]
    fn test_hsl_round_trip_through_buffer() {
        let mut img = blank(1, 1);
        img.set_rgb(0, 0, [12u8, 200, 99, 180]).unwrap();
        let hsl = img.get_hsl(0, 0).unwrap();
        img.set_hsl(0, 0, hsl).unwrap();
        let px = img.get_rgb(0, 0).unwrap();
        for (a, b) in [(px.r, 12u8), (px.g, 200), (px.b, 99), (px.a, 180)] {
            assert!(a.abs_diff(b) <= 1, "{px:?}");
        }
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            PixelBuffer::new(0, 4, Access::ReadWrite),
            Err(PixelError::EmptyImage)
        );
        assert_eq!(
            PixelBuffer::new(usize::MAX, 2, Access::ReadWrite),
            Err(PixelError::SizeOverflow)
        );
        assert_eq!(
            PixelBuffer::from_bytes(vec![0; 15], 2, 2, Access::ReadWrite),
            Err(PixelError::SizeMismatch {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn test_pixels_view() {
        let data: Vec<u8> = (0..16).collect();
        let img = PixelBuffer::from_bytes(data, 2, 2, Access::ReadOnly).unwrap();
        assert_eq!(img.pixels().len(), 4);
        assert_eq!(img.pixels()[3], Rgba::new(12, 13, 14, 15));
        assert_eq!(img.get_rgb(1, 1), Ok(img.pixels()[3]));
    }

    #[test]
    fn test_surface_round_trip() {
        let mut surface = MemorySurface::new(3, 2);
        let original = surface.bytes.clone();
        let mut img = PixelBuffer::from_surface(&surface, Access::ReadWrite).unwrap();
        assert_eq!(img.as_bytes(), original.as_slice());

        img.set_rgb(2, 1, [1u8, 2, 3, 4]).unwrap();
        // Not visible until rendered.
        assert_eq!(surface.bytes, original);

        img.render(&mut surface).unwrap();
        assert_eq!(surface.presents, 1);
        assert_eq!(&surface.bytes[20..24], &[1, 2, 3, 4]);
        assert_eq!(surface.bytes, img.into_bytes());
    }

    #[test]
    fn test_read_only_surface_can_render() {
        let mut surface = MemorySurface::new(2, 2);
        let img = PixelBuffer::from_surface(&surface, Access::ReadOnly).unwrap();
        assert_eq!(img.get_rgb(1, 0), Ok(Rgba::new(4, 5, 6, 7)));
        img.render(&mut surface).unwrap();
        assert_eq!(surface.presents, 1);
    }

    #[test]
    fn test_render_rejects_mismatched_surface() {
        let img = blank(2, 2);
        let mut surface = MemorySurface::new(4, 4);
        let before = surface.bytes.clone();
        assert_eq!(
            img.render(&mut surface),
            Err(RenderError::SizeMismatch {
                width: 2,
                height: 2,
                surface_width: 4,
                surface_height: 4
            })
        );
        assert_eq!(surface.presents, 0);
        assert_eq!(surface.bytes, before);

        // Same pixel count, different shape.
        let mut wide = MemorySurface::new(4, 1);
        assert!(matches!(
            img.render(&mut wide),
            Err(RenderError::SizeMismatch { .. })
        ));
        assert_eq!(wide.presents, 0);
    }

    #[test]
    fn test_empty_surface_rejected() {
        let surface = MemorySurface::new(0, 2);
        assert_eq!(
            PixelBuffer::from_surface(&surface, Access::ReadWrite),
            Err(PixelError::EmptyImage)
        );
    }
}
