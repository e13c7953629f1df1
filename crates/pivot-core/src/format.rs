//! Bit depth (bits per component) of bitmap samples.
//!
//! Rotation never looks at sample values, only at how many bytes one
//! sample occupies. Packed 10/12-bit data is stored in 16-bit containers.
//!
//! ```rust
//! use pivot_core::BitDepth;
//!
//! assert_eq!(BitDepth::U10.bytes_per_channel(), 2);
//! assert_eq!(BitDepth::from_bits(32, true), Some(BitDepth::F32));
//! ```

/// Bits per sample component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    /// Unknown depth. Cannot be rotated.
    Unknown,
    /// 8-bit unsigned integer.
    #[default]
    U8,
    /// 10-bit unsigned integer in 16-bit storage.
    U10,
    /// 12-bit unsigned integer in 16-bit storage.
    U12,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit unsigned integer.
    U32,
    /// 16-bit half-precision float.
    F16,
    /// 32-bit single-precision float.
    F32,
}

impl BitDepth {
    /// Number of significant bits per channel. Returns 0 for Unknown.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::Unknown => 0,
            Self::U8 => 8,
            Self::U10 => 10,
            Self::U12 => 12,
            Self::U16 => 16,
            Self::U32 => 32,
            Self::F16 => 16,
            Self::F32 => 32,
        }
    }

    /// Whether this is a floating-point format.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F16 | Self::F32)
    }

    /// Whether this is unknown.
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Bytes one channel occupies in storage. Returns 0 for Unknown.
    #[inline]
    pub const fn bytes_per_channel(&self) -> usize {
        match self {
            Self::Unknown => 0,
            Self::U8 => 1,
            Self::U10 | Self::U12 | Self::U16 | Self::F16 => 2,
            Self::U32 | Self::F32 => 4,
        }
    }

    /// Looks up a depth from a bits-per-component count.
    ///
    /// `float` picks between the integer and float variants for 16 and
    /// 32 bits; it is ignored for the other widths.
    pub fn from_bits(bits: u32, float: bool) -> Option<Self> {
        match (bits, float) {
            (8, _) => Some(Self::U8),
            (10, _) => Some(Self::U10),
            (12, _) => Some(Self::U12),
            (16, false) => Some(Self::U16),
            (16, true) => Some(Self::F16),
            (32, false) => Some(Self::U32),
            (32, true) => Some(Self::F32),
            _ => None,
        }
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::U8 => write!(f, "8-bit"),
            Self::U10 => write!(f, "10-bit"),
            Self::U12 => write!(f, "12-bit"),
            Self::U16 => write!(f, "16-bit"),
            Self::U32 => write!(f, "32-bit"),
            Self::F16 => write!(f, "half"),
            Self::F32 => write!(f, "float"),
        }
    }
}
