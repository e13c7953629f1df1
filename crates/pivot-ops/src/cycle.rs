//! Orientation cycling over a bitmap.
//!
//! [`OrientationCycle`] owns one bitmap and its current [`Orientation`] and
//! steps through `Up -> Right -> Down -> Left -> Up` on each rotate event.
//! How a step reaches the pixels is chosen by [`Strategy`]:
//!
//! - [`Strategy::TagOnly`] keeps the buffer in `Up` layout and only moves
//!   the tag. Consumers must honor the tag, or call
//!   [`OrientationCycle::render`].
//! - [`Strategy::Eager`] rotates the buffer on every step, so the stored
//!   pixels are always in display layout.
//!
//! Both strategies render the same picture after any sequence of steps.
//!
//! # Example
//!
//! ```rust
//! use pivot_core::{Bitmap, BitDepth, ColorSpace, Direction, Orientation};
//! use pivot_ops::cycle::{OrientationCycle, Strategy};
//!
//! let bmp = Bitmap::new(4, 2, BitDepth::U8, ColorSpace::Luma).unwrap();
//! let mut cycle = OrientationCycle::new(bmp, Orientation::Up, Strategy::Eager).unwrap();
//!
//! let (orientation, image) = cycle.advance(Direction::Forward).unwrap();
//! assert_eq!(orientation, Orientation::Right);
//! assert_eq!(image.dimensions(), (2, 4));
//! ```

use pivot_core::{Bitmap, Direction, Orientation, Result};
use tracing::debug;

use crate::rotate::{orient, rotate};

/// How a rotate event is realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Move only the orientation tag; no pixel copy per step.
    #[default]
    TagOnly,
    /// Rotate the pixel buffer on every step.
    Eager,
}

/// A bitmap together with the orientation it is displayed in.
///
/// Mutation goes through `&mut self`, so one owner drives the cycle at a
/// time. Share it across threads only behind a lock.
#[derive(Debug, Clone)]
pub struct OrientationCycle {
    image: Bitmap,
    orientation: Orientation,
    strategy: Strategy,
}

impl OrientationCycle {
    /// Starts a cycle at `orientation`.
    ///
    /// `image` is the `Up`-layout buffer. With [`Strategy::Eager`] the
    /// starting orientation is applied to the pixels right away, and the
    /// stored buffer is always tightly packed.
    ///
    /// # Errors
    ///
    /// Any [`InvalidBitmapError`](pivot_core::InvalidBitmapError) from
    /// validating `image`.
    pub fn new(image: Bitmap, orientation: Orientation, strategy: Strategy) -> Result<Self> {
        image.validate()?;
        let image = match strategy {
            Strategy::Eager => orient(&image, orientation)?,
            Strategy::TagOnly => image,
        };
        Ok(Self {
            image,
            orientation,
            strategy,
        })
    }

    /// Current orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Stored bitmap: `Up` layout for [`Strategy::TagOnly`], display
    /// layout for [`Strategy::Eager`].
    #[inline]
    pub fn image(&self) -> &Bitmap {
        &self.image
    }

    /// Strategy this cycle was built with.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Steps one orientation in `direction` and returns the new orientation
    /// with the stored bitmap.
    ///
    /// On error nothing changes: the orientation and bitmap stay as they
    /// were before the call. The stored bitmap is validated in
    /// [`new`](Self::new) and never exposed mutably, so in practice the
    /// [`Strategy::Eager`] rotation does not fail.
    ///
    /// # Errors
    ///
    /// Any [`InvalidBitmapError`](pivot_core::InvalidBitmapError) from the
    /// pixel rotation ([`Strategy::Eager`] only).
    pub fn advance(&mut self, direction: Direction) -> Result<(Orientation, &Bitmap)> {
        let next = self.orientation.step(direction);
        if self.strategy == Strategy::Eager {
            self.image = rotate(&self.image, direction.is_clockwise())?;
        }
        debug!(
            from = %self.orientation,
            to = %next,
            ?direction,
            strategy = ?self.strategy,
            "orientation advanced"
        );
        self.orientation = next;
        Ok((next, &self.image))
    }

    /// Returns to `Up`.
    ///
    /// # Errors
    ///
    /// Same as [`advance`](Self::advance).
    pub fn reset(&mut self) -> Result<()> {
        if self.strategy == Strategy::Eager && self.orientation != Orientation::Up {
            let inverse = Orientation::from_index(4 - self.orientation.index());
            self.image = orient(&self.image, inverse)?;
        }
        self.orientation = Orientation::Up;
        Ok(())
    }

    /// The bitmap as a tag-unaware consumer should display it.
    ///
    /// # Errors
    ///
    /// Same as [`advance`](Self::advance).
    pub fn render(&self) -> Result<Bitmap> {
        match self.strategy {
            Strategy::TagOnly => orient(&self.image, self.orientation),
            Strategy::Eager => Ok(self.image.clone()),
        }
    }

    /// Ends the cycle, returning the stored bitmap and orientation.
    pub fn into_parts(self) -> (Bitmap, Orientation) {
        (self.image, self.orientation)
    }
}
