// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Brightness/contrast adjustment.

use image::Rgb;
use imagelab_core::BrightnessContrast;
use imageproc::map::map_colors;
use tracing::{debug, instrument};

use crate::grid::NativeGrid;

/// Apply `clamp(round(v * gain + offset), 0, 255)` to every channel.
///
/// Channel order is irrelevant here, so the result stays native.
#[instrument(skip(grid), fields(
    brightness = params.brightness.value(),
    contrast = params.contrast.value()
))]
pub fn brightness_contrast(grid: &NativeGrid, params: BrightnessContrast) -> NativeGrid {
    let lut = adjustment_table(params.gain(), params.offset());
    debug!(gain = params.gain(), offset = params.offset(), "Adjusting brightness/contrast");
    let adjusted = map_colors(grid.as_bgr(), |Rgb(channels)| {
        Rgb(channels.map(|v| lut[usize::from(v)]))
    });
    NativeGrid::from_bgr(adjusted)
}

/// Every possible input sample mapped through the linear model.
fn adjustment_table(gain: f32, offset: f32) -> [u8; 256] {
    std::array::from_fn(|v| (v as f32 * gain + offset).round().clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn grid_of(bgr: [u8; 3]) -> NativeGrid {
        NativeGrid::from_bgr(RgbImage::from_pixel(2, 2, Rgb(bgr)))
    }

    #[test]
    fn neutral_settings_are_identity() {
        let mut img = RgbImage::new(16, 16);
        for (i, px) in img.pixels_mut().enumerate() {
            *px = Rgb([i as u8, (i * 3) as u8, 255 - i as u8]);
        }
        let grid = NativeGrid::from_bgr(img);
        let out = brightness_contrast(&grid, BrightnessContrast::new(0, 0).unwrap());
        assert_eq!(out, grid);
    }

    #[test]
    fn overflow_clamps_to_white() {
        // gain 2, offset 100: 200 * 2 + 100 = 500 -> 255
        let params = BrightnessContrast::new(100, 100).unwrap();
        let out = brightness_contrast(&grid_of([200, 200, 200]), params);
        assert_eq!(out.bgr_at(0, 0), [255, 255, 255]);
    }

    #[test]
    fn underflow_clamps_to_black() {
        let params = BrightnessContrast::new(-100, 0).unwrap();
        let out = brightness_contrast(&grid_of([50, 99, 100]), params);
        assert_eq!(out.bgr_at(1, 1), [0, 0, 0]);
    }

    #[test]
    fn channels_are_adjusted_independently() {
        // gain 1.5, offset 10
        let params = BrightnessContrast::new(10, 50).unwrap();
        let out = brightness_contrast(&grid_of([0, 100, 150]), params);
        assert_eq!(out.bgr_at(0, 1), [10, 160, 235]);
    }

    #[test]
    fn rounding_is_to_nearest() {
        // gain 0.5: 3 * 0.5 = 1.5 -> 2, 5 * 0.5 = 2.5 -> 3
        let table = adjustment_table(0.5, 0.0);
        assert_eq!(table[3], 2);
        assert_eq!(table[5], 3);
        assert_eq!(table[4], 2);
    }
}
