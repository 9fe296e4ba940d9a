// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Color-space operations — channel reordering, luminance and binary
// thresholding.

use image::{GrayImage, Luma, Rgb, RgbImage};
use imagelab_core::Threshold;
use imageproc::map::map_colors;
use tracing::{debug, instrument};

use crate::grid::NativeGrid;

/// Fixed-point luminance weights (14 fractional bits) for
/// `Y = 0.299 R + 0.587 G + 0.114 B`.
const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_ROUND: u32 = 1 << (LUMA_SHIFT - 1);

/// Swap the first and third channel of every pixel.
pub fn swap_red_blue(image: &RgbImage) -> RgbImage {
    map_colors(image, |Rgb([a, b, c])| Rgb([c, b, a]))
}

/// Native (B,G,R) to display (R,G,B). Pure reorder, no pixel math.
pub fn to_display(grid: &NativeGrid) -> RgbImage {
    swap_red_blue(grid.as_bgr())
}

/// Display (R,G,B) back to native (B,G,R). Inverse of [`to_display`].
pub fn to_native(display: &RgbImage) -> NativeGrid {
    NativeGrid::from_rgb(display)
}

/// Luminance of one native pixel, rounded.
pub fn luma_bgr([b, g, r]: [u8; 3]) -> u8 {
    let weighted = u32::from(b) * LUMA_B + u32::from(g) * LUMA_G + u32::from(r) * LUMA_R;
    // The weights sum to 1 << LUMA_SHIFT, so this never exceeds 255.
    ((weighted + LUMA_ROUND) >> LUMA_SHIFT) as u8
}

/// Single-channel luminance image.
#[instrument(skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn grayscale(grid: &NativeGrid) -> GrayImage {
    debug!("Converting to grayscale");
    map_colors(grid.as_bgr(), |Rgb(bgr)| Luma([luma_bgr(bgr)]))
}

/// Binarize on luminance: `Y >= t` becomes 255, everything else 0.
#[instrument(skip(grid), fields(threshold = threshold.value()))]
pub fn threshold(grid: &NativeGrid, threshold: Threshold) -> GrayImage {
    let cutoff = threshold.value();
    debug!(cutoff, "Applying binary threshold");
    map_colors(grid.as_bgr(), |Rgb(bgr)| {
        Luma([if luma_bgr(bgr) >= cutoff { 255u8 } else { 0u8 }])
    })
}
