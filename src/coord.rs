//! Pixel coordinates.
//!
//! Integer coordinates are used as-is. Floating-point coordinates are
//! floored, with a warning when that changes the value. Negative and
//! non-finite coordinates have no index and are reported as out of range by
//! the buffer.

use core::fmt::Debug;

/// A value usable as an `x` or `y` pixel coordinate.
pub trait Coordinate: Copy + Debug {
    /// The floored index, or `None` if the value is negative, non-finite or
    /// does not fit in `usize`.
    fn to_index(self) -> Option<usize>;

    /// Whether the value is already a whole number.
    fn is_whole(self) -> bool {
        true
    }
}

macro_rules! int_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            #[inline]
            fn to_index(self) -> Option<usize> {
                usize::try_from(self).ok()
            }
        }
    )*};
}

int_coordinate!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Coordinate for f64 {
    #[inline]
    fn to_index(self) -> Option<usize> {
        let v = libm::floor(self);
        // `as` saturates, so anything past usize::MAX is rejected explicitly.
        if !v.is_finite() || v < 0.0 || v >= usize::MAX as f64 {
            return None;
        }
        Some(v as usize)
    }

    #[inline]
    fn is_whole(self) -> bool {
        !self.is_finite() || libm::floor(self) == self
    }
}

impl Coordinate for f32 {
    #[inline]
    fn to_index(self) -> Option<usize> {
        f64::from(self).to_index()
    }

    #[inline]
    fn is_whole(self) -> bool {
        f64::from(self).is_whole()
    }
}

/// Resolve a coordinate to an index, warning when a fractional value is
/// floored.
pub(crate) fn resolve<C: Coordinate>(c: C, axis: &'static str) -> Option<usize> {
    if !c.is_whole() {
        tracing::warn!(
            axis,
            value = ?c,
            "non-integer pixel coordinate; using its floor"
        );
    }
    c.to_index()
}
