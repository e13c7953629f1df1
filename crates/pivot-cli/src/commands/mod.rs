//! CLI command implementations

pub mod rotate;
pub mod spin;

use anyhow::{Context, Result, anyhow};
use pivot_core::{BitDepth, ColorSpace, Orientation};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parse bit depth: 8, 10, 12, 16, 32, half, float
pub fn parse_depth(s: &str) -> Result<BitDepth> {
    match s.to_ascii_lowercase().as_str() {
        "half" | "f16" => Ok(BitDepth::F16),
        "float" | "f32" => Ok(BitDepth::F32),
        other => other
            .parse::<u32>()
            .ok()
            .and_then(|bits| BitDepth::from_bits(bits, false))
            .ok_or_else(|| anyhow!("Unknown bit depth: {}", s)),
    }
}

/// Parse channel layout name
pub fn parse_color(s: &str) -> Result<ColorSpace> {
    ColorSpace::from_name(s).ok_or_else(|| anyhow!("Unknown channel layout: {}", s))
}

/// Parse orientation name
pub fn parse_orientation(s: &str) -> Result<Orientation> {
    Orientation::from_name(s).ok_or_else(|| anyhow!("Unknown orientation: {}", s))
}

/// Read a raw bitmap file
pub fn read_raw(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Write a raw bitmap file
pub fn write_raw(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("Failed to save: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_depth() {
        assert_eq!(parse_depth("8").unwrap(), BitDepth::U8);
        assert_eq!(parse_depth("16").unwrap(), BitDepth::U16);
        assert_eq!(parse_depth("half").unwrap(), BitDepth::F16);
        assert_eq!(parse_depth("FLOAT").unwrap(), BitDepth::F32);
        assert!(parse_depth("7").is_err());
        assert!(parse_depth("deep").is_err());
    }

    #[test]
    fn test_parse_color_and_orientation() {
        assert_eq!(parse_color("bgra").unwrap(), ColorSpace::Bgra);
        assert!(parse_color("hsv").is_err());
        assert_eq!(parse_orientation("Down").unwrap(), Orientation::Down);
        assert!(parse_orientation("north").is_err());
    }

    #[test]
    fn test_raw_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.raw");
        write_raw(&path, &[1, 2, 3]).unwrap();
        assert_eq!(read_raw(&path).unwrap(), vec![1, 2, 3]);
        assert!(read_raw(&dir.path().join("missing.raw")).is_err());
    }
}
