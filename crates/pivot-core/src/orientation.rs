//! The four canonical display orientations and the direction of a step
//! between them.
//!
//! Orientations form a cycle ordered clockwise:
//!
//! ```text
//!        Forward (+90)
//!   Up ──► Right ──► Down ──► Left ──┐
//!   ▲                                │
//!   └────────────────────────────────┘
//! ```
//!
//! An orientation names how an `Up`-layout buffer is turned for display:
//! `Right` is a quarter turn clockwise, `Down` a half turn, `Left` a
//! quarter turn counter-clockwise.
//!
//! ```rust
//! use pivot_core::{Direction, Orientation};
//!
//! assert_eq!(Orientation::Left.step(Direction::Forward), Orientation::Up);
//! assert_eq!(Orientation::Up.step(Direction::Backward), Orientation::Left);
//! ```

/// One of the four canonical orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Stored layout, no turn.
    #[default]
    Up,
    /// Quarter turn clockwise.
    Right,
    /// Half turn.
    Down,
    /// Quarter turn counter-clockwise.
    Left,
}

/// Direction of one rotate event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Next orientation, a clockwise quarter turn.
    Forward,
    /// Previous orientation, a counter-clockwise quarter turn.
    Backward,
}

impl Orientation {
    /// All orientations in cycle order.
    pub const ALL: [Orientation; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Position in [`Orientation::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// Orientation at `index`, taken modulo 4.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Next orientation, wrapping `Left` to `Up`.
    #[inline]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous orientation, wrapping `Up` to `Left`.
    #[inline]
    pub const fn prev(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// One step in `direction`.
    #[inline]
    pub const fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Forward => self.next(),
            Direction::Backward => self.prev(),
        }
    }

    /// Clockwise turn from `Up` in degrees: 0, 90, 180 or 270.
    #[inline]
    pub const fn degrees(self) -> u32 {
        self.index() as u32 * 90
    }

    /// Whether displaying in this orientation swaps width and height.
    #[inline]
    pub const fn swaps_dimensions(self) -> bool {
        matches!(self, Self::Right | Self::Left)
    }

    /// Display dimensions for the given `Up`-layout dimensions.
    pub fn display_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Parses a lowercase orientation name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "up" => Some(Self::Up),
            "right" => Some(Self::Right),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            _ => None,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

impl Direction {
    /// Whether this step is a clockwise quarter turn.
    #[inline]
    pub const fn is_clockwise(self) -> bool {
        matches!(self, Self::Forward)
    }

    /// Signed turn in degrees, +90 clockwise.
    #[inline]
    pub const fn degrees(self) -> i32 {
        match self {
            Self::Forward => 90,
            Self::Backward => -90,
        }
    }
}
