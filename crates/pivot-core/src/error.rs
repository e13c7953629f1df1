//! Error types for pivot-core operations.
//!
//! Every failure in this workspace comes down to one thing: a bitmap whose
//! declared layout cannot be rotated. [`InvalidBitmapError`] is that single
//! error kind; its variants only say *why* the bitmap was rejected.
//!
//! # Usage
//!
//! ```rust
//! use pivot_core::{InvalidBitmapError, Result};
//!
//! fn check_width(width: u32, height: u32) -> Result<()> {
//!     if width == 0 {
//!         return Err(InvalidBitmapError::invalid_dimensions(
//!             width,
//!             height,
//!             "width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_width(0, 4).is_err());
//! ```
//!
//! Rotation is a pure computation, so a failure is permanent: retrying with
//! the same input fails the same way.

use thiserror::Error;

/// Result type alias using [`InvalidBitmapError`] as the error type.
pub type Result<T> = std::result::Result<T, InvalidBitmapError>;

/// A bitmap's declared dimensions, stride or pixel layout are inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidBitmapError {
    /// Width or height is zero.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Why the dimensions were rejected
        reason: String,
    },

    /// Row stride is too small for the width and pixel size.
    #[error("stride {stride} is less than minimum {min_stride} for width {width}")]
    InvalidStride {
        /// Declared bytes per row
        stride: usize,
        /// Minimum bytes per row for the layout
        min_stride: usize,
        /// Declared width
        width: u32,
    },

    /// Pixel buffer length disagrees with `bytes_per_row * height`.
    #[error("pixel buffer holds {actual} bytes, layout requires {expected}")]
    BufferSizeMismatch {
        /// Bytes required by the layout
        expected: usize,
        /// Bytes actually present
        actual: usize,
    },

    /// Bit depth or color space cannot be rotated.
    #[error("unsupported pixel format: {format}")]
    UnsupportedFormat {
        /// Format description
        format: String,
    },

    /// Buffer size computation overflowed `usize`.
    #[error("bitmap {width}x{height} is too large to address")]
    Overflow {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
    },
}

impl InvalidBitmapError {
    /// Creates an [`InvalidBitmapError::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`InvalidBitmapError::UnsupportedFormat`] error.
    #[inline]
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Returns `true` if the stride or buffer length was the problem.
    #[inline]
    pub fn is_layout_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidStride { .. } | Self::BufferSizeMismatch { .. }
        )
    }
}
