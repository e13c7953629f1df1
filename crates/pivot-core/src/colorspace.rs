//! Channel layout tags.
//!
//! A [`ColorSpace`] only tells rotation how many interleaved channels make
//! up one pixel. The tag itself is carried through every transform
//! untouched; no conversion between layouts happens in this workspace.

/// Interleaved channel layout of a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// Single gray channel.
    Luma,
    /// Gray plus alpha.
    LumaA,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    #[default]
    Rgba,
    /// Blue, green, red.
    Bgr,
    /// Blue, green, red, alpha.
    Bgra,
    /// Alpha, red, green, blue.
    Argb,
    /// Cyan, magenta, yellow, black.
    Cmyk,
    /// Layout unknown. Cannot be rotated.
    Unknown,
}

impl ColorSpace {
    /// Number of interleaved channels per pixel. Returns 0 for Unknown.
    pub const fn num_components(&self) -> usize {
        match self {
            Self::Luma => 1,
            Self::LumaA => 2,
            Self::Rgb | Self::Bgr => 3,
            Self::Rgba | Self::Bgra | Self::Argb | Self::Cmyk => 4,
            Self::Unknown => 0,
        }
    }

    /// Whether one of the channels is alpha.
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::LumaA | Self::Rgba | Self::Bgra | Self::Argb)
    }

    /// Parses a lowercase layout name as used on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "luma" | "gray" | "grey" => Some(Self::Luma),
            "lumaa" | "graya" | "gray-alpha" => Some(Self::LumaA),
            "rgb" => Some(Self::Rgb),
            "rgba" => Some(Self::Rgba),
            "bgr" => Some(Self::Bgr),
            "bgra" => Some(Self::Bgra),
            "argb" => Some(Self::Argb),
            "cmyk" => Some(Self::Cmyk),
            _ => None,
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Luma => "luma",
            Self::LumaA => "luma-alpha",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Bgr => "bgr",
            Self::Bgra => "bgra",
            Self::Argb => "argb",
            Self::Cmyk => "cmyk",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
