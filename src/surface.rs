//! The raster store a [`PixelBuffer`](crate::PixelBuffer) is loaded from and
//! rendered to: a canvas, framebuffer, window or plain image.

/// An external raster surface holding RGBA pixels.
///
/// Both transfers use tightly packed RGBA, row-major, exactly
/// `width() * height() * 4` bytes long. Implementations with padded rows
/// must pack and unpack them.
pub trait Surface {
    /// Error reported when the surface cannot take new contents.
    type Error;

    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Copy the surface's current contents into `dst`.
    fn read_rgba(&self, dst: &mut [u8]);

    /// Replace the surface's contents with `src` and refresh the display.
    fn present_rgba(&mut self, src: &[u8]) -> Result<(), Self::Error>;
}

// ---------------------------------------------------------------------------
// imgref adapter
// ---------------------------------------------------------------------------

#[cfg(feature = "imgref")]
mod img {
    use core::convert::Infallible;

    use imgref::ImgVec;
    use rgb::Rgba;

    use super::Surface;

    /// Rows are copied one at a time, so strided images are supported.
    impl Surface for ImgVec<Rgba<u8>> {
        type Error = Infallible;

        fn width(&self) -> usize {
            ImgVec::width(self)
        }

        fn height(&self) -> usize {
            ImgVec::height(self)
        }

        fn read_rgba(&self, dst: &mut [u8]) {
            let row_bytes = ImgVec::width(self) * 4;
            for (row, out) in self.as_ref().rows().zip(dst.chunks_exact_mut(row_bytes)) {
                out.copy_from_slice(bytemuck::cast_slice(row));
            }
        }

        fn present_rgba(&mut self, src: &[u8]) -> Result<(), Infallible> {
            let row_bytes = ImgVec::width(self) * 4;
            for (row, input) in self.rows_mut().zip(src.chunks_exact(row_bytes)) {
                row.copy_from_slice(bytemuck::cast_slice(input));
            }
            Ok(())
        }
    }

}
