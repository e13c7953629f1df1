//! Quarter-turn pixel transforms.
//!
//! Each transform reads a validated [`Bitmap`] and writes a fresh, tightly
//! packed one. Pixels move as opaque `bytes_per_pixel` chunks, so every
//! bit depth and channel layout is handled by the same loop.
//!
//! # Operations
//!
//! - [`rotate`] - 90 degrees clockwise or counter-clockwise
//! - [`rotate_180`] - Half turn
//! - [`orient`] - Materialize an [`Orientation`] tag into the pixels
//!
//! # Coordinate Mapping
//!
//! For a `w`x`h` source, a clockwise turn produces an `h`x`w` bitmap where
//! source `(x, y)` lands on `(h-1-y, x)`:
//!
//! ```text
//! [1 2 3 4]      [5 1]
//! [5 6 7 8]  ->  [6 2]
//!                [7 3]
//!                [8 4]
//! ```
//!
//! Counter-clockwise sends `(x, y)` to `(y, w-1-x)`.
//!
//! # Example
//!
//! ```rust
//! use pivot_core::{Bitmap, BitDepth, ColorSpace};
//! use pivot_ops::rotate::rotate;
//!
//! let src = Bitmap::from_pixels(
//!     4,
//!     2,
//!     BitDepth::U8,
//!     ColorSpace::Luma,
//!     vec![1, 2, 3, 4, 5, 6, 7, 8],
//! )
//! .unwrap();
//!
//! let cw = rotate(&src, true).unwrap();
//! assert_eq!((cw.width, cw.height), (2, 4));
//! assert_eq!(cw.pixels, vec![5, 1, 6, 2, 7, 3, 8, 4]);
//! ```
//!
//! With the `parallel` feature, destination rows are filled on the rayon
//! pool. Each row is written by exactly one task, so output is identical
//! to the serial path.

use pivot_core::{Bitmap, Orientation, Result};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

/// How destination coordinates map back into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    None,
    Clockwise,
    Half,
    CounterClockwise,
}

impl Turn {
    fn swaps_dimensions(self) -> bool {
        matches!(self, Self::Clockwise | Self::CounterClockwise)
    }

    /// Source (x, y) for destination row `r`, column `c`.
    #[inline(always)]
    fn source(self, r: usize, c: usize, w: usize, h: usize) -> (usize, usize) {
        match self {
            Self::None => (c, r),
            Self::Clockwise => (r, h - 1 - c),
            Self::Half => (w - 1 - c, h - 1 - r),
            Self::CounterClockwise => (w - 1 - r, c),
        }
    }
}

/// Rotates a bitmap 90 degrees.
///
/// Returns a new bitmap with width and height swapped, the same bit depth
/// and color space, and a stride recomputed from the new width. `source`
/// is only borrowed and is left untouched.
///
/// # Errors
///
/// Any [`InvalidBitmapError`](pivot_core::InvalidBitmapError) from
/// [`Bitmap::validate`]: zero dimensions, a stride or buffer that does not
/// match the layout, or an unknown depth or color space.
pub fn rotate(source: &Bitmap, clockwise: bool) -> Result<Bitmap> {
    let turn = if clockwise {
        Turn::Clockwise
    } else {
        Turn::CounterClockwise
    };
    remap(source, turn)
}

/// Rotates a bitmap 180 degrees. Dimensions are kept.
///
/// # Errors
///
/// Same as [`rotate`].
pub fn rotate_180(source: &Bitmap) -> Result<Bitmap> {
    remap(source, Turn::Half)
}

/// Turns an `Up`-layout bitmap into the layout it has when displayed in
/// `orientation`.
///
/// `Up` yields a tightly packed copy, `Right` a clockwise quarter turn,
/// `Down` a half turn and `Left` a counter-clockwise quarter turn.
///
/// # Errors
///
/// Same as [`rotate`].
pub fn orient(source: &Bitmap, orientation: Orientation) -> Result<Bitmap> {
    let turn = match orientation {
        Orientation::Up => Turn::None,
        Orientation::Right => Turn::Clockwise,
        Orientation::Down => Turn::Half,
        Orientation::Left => Turn::CounterClockwise,
    };
    remap(source, turn)
}

fn remap(source: &Bitmap, turn: Turn) -> Result<Bitmap> {
    source.validate()?;

    let bpp = source.bytes_per_pixel();
    let w = source.width as usize;
    let h = source.height as usize;
    let (dst_w, dst_h) = if turn.swaps_dimensions() { (h, w) } else { (w, h) };
    // Fits: dst_w * dst_h * bpp never exceeds the validated source length.
    let dst_stride = dst_w * bpp;
    let mut pixels = vec![0u8; dst_stride * dst_h];

    trace!(
        width = w,
        height = h,
        bpp,
        src_stride = source.bytes_per_row,
        dst_stride,
        ?turn,
        "remap"
    );

    let fill = |(r, row): (usize, &mut [u8])| {
        for (c, dst_px) in row.chunks_exact_mut(bpp).enumerate() {
            let (sx, sy) = turn.source(r, c, w, h);
            let offset = sy * source.bytes_per_row + sx * bpp;
            dst_px.copy_from_slice(&source.pixels[offset..offset + bpp]);
        }
    };

    #[cfg(feature = "parallel")]
    pixels.par_chunks_mut(dst_stride).enumerate().for_each(fill);

    #[cfg(not(feature = "parallel"))]
    pixels.chunks_mut(dst_stride).enumerate().for_each(fill);

    Ok(Bitmap {
        width: dst_w as u32,
        height: dst_h as u32,
        bit_depth: source.bit_depth,
        bytes_per_row: dst_stride,
        color_space: source.color_space,
        pixels,
    })
}
