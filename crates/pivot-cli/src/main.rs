//! pivot - quarter-turn rotation for raw bitmaps

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "pivot")]
#[command(author, version, about = "Quarter-turn rotation for raw bitmaps")]
#[command(long_about = "
Rotate headerless raw bitmaps by quarter turns and replay swipe
sequences through an orientation cycle.

Examples:
  pivot rotate in.raw -o out.raw -W 640 -H 480 -c rgba
  pivot rotate in.raw -o out.raw -W 640 -H 480 -c luma --ccw
  pivot rotate in.raw -o out.raw -W 640 -H 480 -d 16 -c rgb --stride 3872 --turns 2
  pivot spin RRL --session burst-1
  pivot spin RRRD --from left --json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Rotate a raw bitmap by quarter turns
    #[command(visible_alias = "r")]
    Rotate(RotateArgs),

    /// Replay a swipe sequence (R, L, D) through a preview session
    #[command(visible_alias = "s")]
    Spin(SpinArgs),
}

/// Arguments for the `rotate` command.
#[derive(Args)]
struct RotateArgs {
    /// Input raw bitmap
    input: PathBuf,

    /// Output raw bitmap (tightly packed)
    #[arg(short, long)]
    output: PathBuf,

    /// Width in pixels
    #[arg(short = 'W', long)]
    width: u32,

    /// Height in pixels
    #[arg(short = 'H', long)]
    height: u32,

    /// Bit depth: 8, 10, 12, 16, 32, half, float
    #[arg(short = 'd', long, default_value = "8")]
    depth: String,

    /// Channel layout: luma, lumaa, rgb, rgba, bgr, bgra, argb, cmyk
    #[arg(short = 'c', long, default_value = "rgba")]
    color: String,

    /// Bytes per row of the input (default: tightly packed)
    #[arg(long)]
    stride: Option<usize>,

    /// Rotate counter-clockwise
    #[arg(long)]
    ccw: bool,

    /// Number of quarter turns (1-3)
    #[arg(short = 't', long, default_value = "1")]
    turns: u8,
}

/// Arguments for the `spin` command.
#[derive(Args)]
struct SpinArgs {
    /// Swipe codes: R (right), L (left), D (down)
    swipes: String,

    /// Starting orientation: up, right, down, left
    #[arg(long, default_value = "up")]
    from: String,

    /// Session identifier attached to each change
    #[arg(long)]
    session: Option<String>,

    /// Rotate pixels on each step instead of moving the tag
    #[arg(long)]
    eager: bool,

    /// Width of the previewed image
    #[arg(short = 'W', long, default_value = "1")]
    width: u32,

    /// Height of the previewed image
    #[arg(short = 'H', long, default_value = "1")]
    height: u32,

    /// Machine-readable output (JSON lines)
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Rotate(args) => commands::rotate::run(args, cli.verbose),
        Commands::Spin(args) => commands::spin::run(args, cli.verbose),
    }
}
