//! Swipe-driven preview session.
//!
//! [`PreviewSession`] is the toolkit-free adapter between discrete swipe
//! gestures and an [`OrientationCycle`]. A horizontal swipe rotates, a
//! downward swipe dismisses the preview. The session never animates or
//! notifies anyone itself; it hands back a [`SessionEvent`] carrying what
//! the UI layer needs for both.
//!
//! | swipe   | effect                         |
//! |---------|--------------------------------|
//! | `Right` | [`Direction::Forward`]  (+90)  |
//! | `Left`  | [`Direction::Backward`] (-90)  |
//! | `Down`  | dismiss                        |

use pivot_core::{Direction, Orientation, Result};
use tracing::{debug, trace};

use crate::cycle::OrientationCycle;

/// A discrete swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swipe {
    /// Swipe toward the left edge.
    Left,
    /// Swipe toward the right edge.
    Right,
    /// Swipe toward the bottom edge.
    Down,
}

impl Swipe {
    /// Rotation direction for this swipe, `None` for `Down`.
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Right => Some(Direction::Forward),
            Self::Left => Some(Direction::Backward),
            Self::Down => None,
        }
    }

    /// Parses a single-letter swipe code: `R`, `L` or `D`.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'R' => Some(Self::Right),
            'L' => Some(Self::Left),
            'D' => Some(Self::Down),
            _ => None,
        }
    }
}

/// Notification payload for listeners interested in orientation changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientationChange {
    /// Identifier of the previewed item, if the caller gave one.
    pub session_id: Option<String>,
    /// Orientation after the change.
    pub orientation: Orientation,
}

/// Outcome of one swipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The image turned a quarter.
    Rotated {
        /// Payload to forward to listeners.
        change: OrientationChange,
        /// Signed animation angle, +90 clockwise.
        degrees: i32,
    },
    /// The preview should close.
    Dismissed,
}

/// One preview of one image.
#[derive(Debug, Clone)]
pub struct PreviewSession {
    id: Option<String>,
    cycle: OrientationCycle,
    dismissed: bool,
}

impl PreviewSession {
    /// Opens a session over `cycle`.
    pub fn new(id: Option<String>, cycle: OrientationCycle) -> Self {
        Self {
            id,
            cycle,
            dismissed: false,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The underlying orientation cycle.
    pub fn cycle(&self) -> &OrientationCycle {
        &self.cycle
    }

    /// Whether a `Down` swipe closed this session.
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Applies one swipe.
    ///
    /// Returns `Ok(None)` once the session is dismissed; later swipes are
    /// ignored. A failed rotation leaves the session as it was.
    ///
    /// # Errors
    ///
    /// Any [`InvalidBitmapError`](pivot_core::InvalidBitmapError) from
    /// [`OrientationCycle::advance`].
    pub fn handle_swipe(&mut self, swipe: Swipe) -> Result<Option<SessionEvent>> {
        if self.dismissed {
            trace!(?swipe, "swipe after dismissal ignored");
            return Ok(None);
        }

        let Some(direction) = swipe.direction() else {
            debug!(session = ?self.id, "preview dismissed");
            self.dismissed = true;
            return Ok(Some(SessionEvent::Dismissed));
        };

        let (orientation, _) = self.cycle.advance(direction)?;
        Ok(Some(SessionEvent::Rotated {
            change: OrientationChange {
                session_id: self.id.clone(),
                orientation,
            },
            degrees: direction.degrees(),
        }))
    }

    /// Closes the session, returning the cycle.
    pub fn into_cycle(self) -> OrientationCycle {
        self.cycle
    }
}
