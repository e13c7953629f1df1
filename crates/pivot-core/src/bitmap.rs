//! Owned bitmap buffer with an explicit row stride.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom, channels
//! interleaved. Each row starts `bytes_per_row` bytes after the previous
//! one; bytes past `width * bytes_per_pixel` in a row are padding:
//!
//! ```text
//! [p0 p1 p2 ... p(w-1) | pad]  <- row 0
//! [p0 p1 p2 ... p(w-1) | pad]  <- row 1
//! ...
//! ```
//!
//! The buffer holds exactly `bytes_per_row * height` bytes.
//!
//! # Usage
//!
//! ```rust
//! use pivot_core::{Bitmap, BitDepth, ColorSpace};
//!
//! let bmp = Bitmap::from_pixels(
//!     4,
//!     2,
//!     BitDepth::U8,
//!     ColorSpace::Luma,
//!     vec![1, 2, 3, 4, 5, 6, 7, 8],
//! )
//! .unwrap();
//!
//! assert_eq!(bmp.pixel(1, 1), &[6]);
//! assert_eq!(bmp.row(0), &[1, 2, 3, 4]);
//! ```
//!
//! Fields are public so that callers can describe a buffer handed over by
//! a platform layer verbatim; [`Bitmap::validate`] checks the declared
//! layout before any transform touches it.

use crate::{BitDepth, ColorSpace, InvalidBitmapError, Result};

/// An owned pixel buffer plus the layout needed to interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Bits per component
    pub bit_depth: BitDepth,
    /// Bytes from the start of one row to the start of the next
    pub bytes_per_row: usize,
    /// Channel layout, carried unchanged through rotation
    pub color_space: ColorSpace,
    /// Raw pixel bytes, `bytes_per_row * height` long
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Creates a zero-filled bitmap with a tight stride.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pivot_core::{Bitmap, BitDepth, ColorSpace};
    ///
    /// let bmp = Bitmap::new(3, 2, BitDepth::U16, ColorSpace::Rgb).unwrap();
    /// assert_eq!(bmp.bytes_per_row, 3 * 3 * 2);
    /// assert_eq!(bmp.pixels.len(), 36);
    /// ```
    pub fn new(width: u32, height: u32, bit_depth: BitDepth, color_space: ColorSpace) -> Result<Self> {
        let bytes_per_row = tight_stride(width, height, bit_depth, color_space)?;
        let len = checked_len(bytes_per_row, width, height)?;
        Ok(Self {
            width,
            height,
            bit_depth,
            bytes_per_row,
            color_space,
            pixels: vec![0; len],
        })
    }

    /// Wraps existing tightly packed pixel data.
    ///
    /// # Errors
    ///
    /// Any [`InvalidBitmapError`] reported by [`validate`](Self::validate).
    pub fn from_pixels(
        width: u32,
        height: u32,
        bit_depth: BitDepth,
        color_space: ColorSpace,
        pixels: Vec<u8>,
    ) -> Result<Self> {
        let bytes_per_row = tight_stride(width, height, bit_depth, color_space)?;
        Self::with_stride(width, height, bit_depth, color_space, bytes_per_row, pixels)
    }

    /// Wraps existing pixel data whose rows may carry padding.
    ///
    /// # Errors
    ///
    /// Any [`InvalidBitmapError`] reported by [`validate`](Self::validate).
    pub fn with_stride(
        width: u32,
        height: u32,
        bit_depth: BitDepth,
        color_space: ColorSpace,
        bytes_per_row: usize,
        pixels: Vec<u8>,
    ) -> Result<Self> {
        let bmp = Self {
            width,
            height,
            bit_depth,
            bytes_per_row,
            color_space,
            pixels,
        };
        bmp.validate()?;
        Ok(bmp)
    }

    /// Checks that the declared layout is self-consistent.
    ///
    /// # Errors
    ///
    /// - [`InvalidBitmapError::InvalidDimensions`] if width or height is zero
    /// - [`InvalidBitmapError::UnsupportedFormat`] for an unknown depth or layout
    /// - [`InvalidBitmapError::Overflow`] if the buffer size does not fit `usize`
    /// - [`InvalidBitmapError::InvalidStride`] if `bytes_per_row` is too small
    /// - [`InvalidBitmapError::BufferSizeMismatch`] if `pixels` has the wrong length
    pub fn validate(&self) -> Result<()> {
        let min_stride = tight_stride(self.width, self.height, self.bit_depth, self.color_space)?;
        if self.bytes_per_row < min_stride {
            return Err(InvalidBitmapError::InvalidStride {
                stride: self.bytes_per_row,
                min_stride,
                width: self.width,
            });
        }
        let expected = checked_len(self.bytes_per_row, self.width, self.height)?;
        if self.pixels.len() != expected {
            return Err(InvalidBitmapError::BufferSizeMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Bytes one pixel occupies. Zero for unknown depth or layout.
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        self.color_space.num_components() * self.bit_depth.bytes_per_channel()
    }

    /// Smallest stride that can hold one row of this bitmap.
    #[inline]
    pub fn min_bytes_per_row(&self) -> usize {
        self.width as usize * self.bytes_per_pixel()
    }

    /// Returns `true` when rows carry no padding.
    #[inline]
    pub fn is_tight(&self) -> bool {
        self.bytes_per_row == self.min_bytes_per_row()
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the visible bytes of row `y`, padding excluded.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of bounds.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {y} out of bounds (height {})", self.height);
        let start = y as usize * self.bytes_per_row;
        &self.pixels[start..start + self.min_bytes_per_row()]
    }

    /// Returns the bytes of the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds ({}x{})",
            self.width,
            self.height
        );
        let bpp = self.bytes_per_pixel();
        let offset = y as usize * self.bytes_per_row + x as usize * bpp;
        &self.pixels[offset..offset + bpp]
    }

    /// Overwrites the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds or `value` is not one pixel long.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: &[u8]) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds ({}x{})",
            self.width,
            self.height
        );
        let bpp = self.bytes_per_pixel();
        let offset = y as usize * self.bytes_per_row + x as usize * bpp;
        self.pixels[offset..offset + bpp].copy_from_slice(value);
    }
}

/// Minimum stride for a layout, validating everything but the buffer.
fn tight_stride(width: u32, height: u32, bit_depth: BitDepth, color_space: ColorSpace) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(InvalidBitmapError::invalid_dimensions(
            width,
            height,
            "width and height must be positive",
        ));
    }
    if bit_depth.is_unknown() {
        return Err(InvalidBitmapError::unsupported_format(format!(
            "{bit_depth} samples"
        )));
    }
    if color_space.num_components() == 0 {
        return Err(InvalidBitmapError::unsupported_format(format!(
            "{color_space} layout at {bit_depth}"
        )));
    }
    let bpp = color_space.num_components() * bit_depth.bytes_per_channel();
    (width as usize)
        .checked_mul(bpp)
        .ok_or(InvalidBitmapError::Overflow { width, height })
}

fn checked_len(bytes_per_row: usize, width: u32, height: u32) -> Result<usize> {
    bytes_per_row
        .checked_mul(height as usize)
        .ok_or(InvalidBitmapError::Overflow { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32) -> Bitmap {
        let len = (width * height) as usize;
        Bitmap::from_pixels(
            width,
            height,
            BitDepth::U8,
            ColorSpace::Luma,
            (1..=len as u8).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_is_zeroed_and_tight() {
        let bmp = Bitmap::new(5, 3, BitDepth::U8, ColorSpace::Rgba).unwrap();
        assert_eq!(bmp.bytes_per_row, 20);
        assert_eq!(bmp.pixels.len(), 60);
        assert!(bmp.pixels.iter().all(|&b| b == 0));
        assert!(bmp.is_tight());
    }

    #[test]
    fn test_pixel_access() {
        let bmp = gray(4, 2);
        assert_eq!(bmp.pixel(0, 0), &[1]);
        assert_eq!(bmp.pixel(3, 0), &[4]);
        assert_eq!(bmp.pixel(0, 1), &[5]);
        assert_eq!(bmp.row(1), &[5, 6, 7, 8]);
    }

    #[test]
    fn test_set_pixel_multibyte() {
        let mut bmp = Bitmap::new(2, 2, BitDepth::U16, ColorSpace::LumaA).unwrap();
        bmp.set_pixel(1, 1, &[1, 2, 3, 4]);
        assert_eq!(bmp.pixel(1, 1), &[1, 2, 3, 4]);
        assert_eq!(&bmp.pixels[12..16], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_padded_row_excludes_padding() {
        let bmp = Bitmap::with_stride(
            2,
            2,
            BitDepth::U8,
            ColorSpace::Luma,
            4,
            vec![1, 2, 0xEE, 0xEE, 3, 4, 0xEE, 0xEE],
        )
        .unwrap();
        assert!(!bmp.is_tight());
        assert_eq!(bmp.row(1), &[3, 4]);
        assert_eq!(bmp.pixel(1, 1), &[4]);
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = Bitmap::new(0, 4, BitDepth::U8, ColorSpace::Luma).unwrap_err();
        assert!(matches!(err, InvalidBitmapError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_short_stride_rejected() {
        let err = Bitmap::with_stride(4, 1, BitDepth::U8, ColorSpace::Rgb, 11, vec![0; 11])
            .unwrap_err();
        assert_eq!(
            err,
            InvalidBitmapError::InvalidStride {
                stride: 11,
                min_stride: 12,
                width: 4
            }
        );
    }

    #[test]
    fn test_buffer_length_checked() {
        let err = Bitmap::from_pixels(2, 2, BitDepth::U8, ColorSpace::Luma, vec![0; 3])
            .unwrap_err();
        assert_eq!(
            err,
            InvalidBitmapError::BufferSizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_unknown_formats_rejected() {
        let err = Bitmap::new(1, 1, BitDepth::Unknown, ColorSpace::Rgb).unwrap_err();
        assert!(matches!(err, InvalidBitmapError::UnsupportedFormat { .. }));
        let err = Bitmap::new(1, 1, BitDepth::U8, ColorSpace::Unknown).unwrap_err();
        assert!(matches!(err, InvalidBitmapError::UnsupportedFormat { .. }));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_pixel_past_row_end_panics() {
        // (2, 0) would alias the first pixel of row 1
        let bmp = gray(2, 2);
        let _ = bmp.pixel(2, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_pixel_out_of_bounds_panics() {
        let mut bmp = gray(2, 2);
        bmp.set_pixel(0, 2, &[9]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_row_out_of_bounds_panics() {
        let bmp = gray(2, 2);
        let _ = bmp.row(2);
    }

    #[test]
    fn test_validate_catches_field_edits() {
        let mut bmp = gray(4, 2);
        bmp.width = 0;
        assert!(bmp.validate().is_err());
        let mut bmp = gray(4, 2);
        bmp.bytes_per_row = 3;
        assert!(bmp.validate().unwrap_err().is_layout_error());
    }
}
