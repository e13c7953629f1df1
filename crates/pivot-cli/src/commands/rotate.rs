//! Rotate command - quarter turns of a raw bitmap

use crate::RotateArgs;
use anyhow::{Context, Result, bail};
use pivot_core::Bitmap;
use pivot_ops::{rotate, rotate_180};
use tracing::{debug, info, trace};

pub fn run(args: RotateArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), "rotate::run");

    if !(1..=3).contains(&args.turns) {
        bail!("Unsupported number of turns: {}. Use 1, 2 or 3.", args.turns);
    }

    let depth = super::parse_depth(&args.depth)?;
    let color = super::parse_color(&args.color)?;
    let pixels = super::read_raw(&args.input)?;

    let source = match args.stride {
        Some(stride) => Bitmap::with_stride(args.width, args.height, depth, color, stride, pixels),
        None => Bitmap::from_pixels(args.width, args.height, depth, color, pixels),
    }
    .with_context(|| format!("Invalid bitmap: {}", args.input.display()))?;

    info!(
        width = source.width,
        height = source.height,
        depth = %depth,
        float = depth.is_float(),
        color = %color,
        stride = source.bytes_per_row,
        "Loaded bitmap"
    );

    let result = turn(&source, args.turns, !args.ccw)?;
    debug!(width = result.width, height = result.height, "Rotated");

    super::write_raw(&args.output, &result.pixels)?;

    if verbose > 0 {
        println!(
            "{}x{} -> {}x{}: {}",
            source.width,
            source.height,
            result.width,
            result.height,
            args.output.display()
        );
    }

    Ok(())
}

/// Apply `turns` quarter turns in one direction.
fn turn(source: &Bitmap, turns: u8, clockwise: bool) -> Result<Bitmap> {
    let result = match turns {
        1 => rotate(source, clockwise)?,
        2 => rotate_180(source)?,
        _ => rotate(source, !clockwise)?,
    };
    Ok(result)
}
