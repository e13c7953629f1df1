//! Integration tests for pivot crates.
//!
//! Shared fixtures live here; the tests themselves are under `tests/`.

use pivot_core::{BitDepth, Bitmap, ColorSpace};

/// Bitmap whose every byte is distinct modulo 251, with `padding` extra
/// bytes per row filled with `0xFF`.
pub fn pattern(
    width: u32,
    height: u32,
    depth: BitDepth,
    color: ColorSpace,
    padding: usize,
) -> Bitmap {
    let bpp = color.num_components() * depth.bytes_per_channel();
    let row_bytes = width as usize * bpp;
    let stride = row_bytes + padding;
    let mut pixels = Vec::with_capacity(stride * height as usize);
    for y in 0..height as usize {
        for i in 0..row_bytes {
            pixels.push(((y * row_bytes + i) % 251) as u8);
        }
        pixels.extend(std::iter::repeat_n(0xFF, padding));
    }
    Bitmap::with_stride(width, height, depth, color, stride, pixels)
        .expect("pattern layout is valid")
}

/// Tightly packed copy of `bmp`, padding removed.
pub fn packed(bmp: &Bitmap) -> Vec<u8> {
    (0..bmp.height).flat_map(|y| bmp.row(y).to_vec()).collect()
}
