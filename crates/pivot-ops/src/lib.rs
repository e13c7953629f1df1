//! # pivot-ops
//!
//! Quarter-turn bitmap rotation and orientation bookkeeping.
//!
//! # Modules
//!
//! - [`mod@rotate`] - Pure pixel transforms: 90 degrees either way, 180 degrees
//! - [`cycle`] - [`OrientationCycle`], the four-state orientation machine
//! - [`session`] - [`PreviewSession`], mapping swipes to rotate events
//!
//! # Example
//!
//! ```rust
//! use pivot_core::{Bitmap, BitDepth, ColorSpace, Direction, Orientation};
//! use pivot_ops::{rotate, OrientationCycle, Strategy};
//!
//! let bmp = Bitmap::new(640, 480, BitDepth::U8, ColorSpace::Rgba).unwrap();
//!
//! // One-off rotation
//! let portrait = rotate(&bmp, true).unwrap();
//! assert_eq!(portrait.dimensions(), (480, 640));
//!
//! // Stateful cycling
//! let mut cycle = OrientationCycle::new(bmp, Orientation::Up, Strategy::TagOnly).unwrap();
//! let (orientation, _) = cycle.advance(Direction::Backward).unwrap();
//! assert_eq!(orientation, Orientation::Left);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Fill destination rows on the rayon pool
//! - `serde` - Serialize [`OrientationChange`] and the core orientation types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cycle;
pub mod rotate;
pub mod session;

pub use cycle::{OrientationCycle, Strategy};
pub use rotate::{orient, rotate, rotate_180};
pub use session::{OrientationChange, PreviewSession, SessionEvent, Swipe};
