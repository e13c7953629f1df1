//! # pivot-core
//!
//! Core types for quarter-turn bitmap rotation.
//!
//! - [`Bitmap`] - Owned pixel buffer with explicit dimensions and row stride
//! - [`BitDepth`] - Bits per component
//! - [`ColorSpace`] - Interleaved channel layout tag
//! - [`Orientation`], [`Direction`] - The four canonical orientations and a step between them
//! - [`InvalidBitmapError`] - The single error kind
//!
//! ## Crate Structure
//!
//! ```text
//! pivot-core (this crate)
//!    ^
//!    |
//!    +-- pivot-ops (rotation, orientation cycle, preview session)
//!    +-- pivot-cli (command line)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize [`Orientation`] and [`Direction`] as lowercase names

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bitmap;
pub mod colorspace;
pub mod error;
pub mod format;
pub mod orientation;

pub use bitmap::Bitmap;
pub use colorspace::ColorSpace;
pub use error::{InvalidBitmapError, Result};
pub use format::BitDepth;
pub use orientation::{Direction, Orientation};

/// Prelude module for convenient imports.
///
/// ```
/// use pivot_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bitmap::Bitmap;
    pub use crate::colorspace::ColorSpace;
    pub use crate::error::{InvalidBitmapError, Result};
    pub use crate::format::BitDepth;
    pub use crate::orientation::{Direction, Orientation};
}
