// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel grids — the decoded source image in native (B,G,R) channel order,
// and the result of an operation, which may be native, display (R,G,B) or
// single-channel.

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use imagelab_core::error::{ImageLabError, Result};

use crate::color;

/// A decoded 3-channel, 8-bit image whose channels are stored B, G, R.
///
/// The buffer is an `RgbImage` only because `image` has no BGR pixel type;
/// never hand it to code that expects R, G, B without going through
/// [`color::to_display`].
#[derive(Debug, Clone, PartialEq)]
pub struct NativeGrid {
    pixels: RgbImage,
}

impl NativeGrid {
    /// Wrap a buffer that already holds B, G, R samples.
    pub fn from_bgr(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    /// Build a native grid from an R, G, B buffer.
    pub fn from_rgb(rgb: &RgbImage) -> Self {
        Self {
            pixels: color::swap_red_blue(rgb),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Samples at `(x, y)` in B, G, R order.
    pub fn bgr_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels.get_pixel(x, y).0
    }

    /// Borrow the raw B, G, R buffer.
    pub fn as_bgr(&self) -> &RgbImage {
        &self.pixels
    }

    /// Consume the grid and return the raw B, G, R buffer.
    pub fn into_bgr(self) -> RgbImage {
        self.pixels
    }
}

/// The result of applying one operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelGrid {
    /// Three channels, B, G, R.
    Native(NativeGrid),
    /// Three channels, R, G, B.
    Display(RgbImage),
    /// One channel.
    Gray(GrayImage),
}

impl PixelGrid {
    pub fn width(&self) -> u32 {
        match self {
            Self::Native(grid) => grid.width(),
            Self::Display(img) => img.width(),
            Self::Gray(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Self::Native(grid) => grid.height(),
            Self::Display(img) => img.height(),
            Self::Gray(img) => img.height(),
        }
    }

    /// Number of channels per pixel (3 or 1).
    pub fn channels(&self) -> u8 {
        match self {
            Self::Native(_) | Self::Display(_) => 3,
            Self::Gray(_) => 1,
        }
    }

    /// Convert to an image the display surface can show as-is. Native grids
    /// are reordered to R, G, B here; nothing else changes.
    pub fn to_display_image(&self) -> DynamicImage {
        match self {
            Self::Native(grid) => DynamicImage::ImageRgb8(color::to_display(grid)),
            Self::Display(img) => DynamicImage::ImageRgb8(img.clone()),
            Self::Gray(img) => DynamicImage::ImageLuma8(img.clone()),
        }
    }

    /// Encode the display image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        encode_to_format(&self.to_display_image(), ImageFormat::Png)
    }
}

/// Encode a `DynamicImage` into the specified format, returning the raw bytes.
fn encode_to_format(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image
        .write_to(&mut cursor, format)
        .map_err(|err| ImageLabError::Encode(format!("image encoding failed: {}", err)))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn from_rgb_stores_bgr() {
        let rgb = RgbImage::from_pixel(2, 1, Rgb([10, 20, 30]));
        let grid = NativeGrid::from_rgb(&rgb);
        assert_eq!(grid.bgr_at(1, 0), [30, 20, 10]);
        assert_eq!(grid.dimensions(), (2, 1));
    }

    #[test]
    fn native_result_is_reordered_for_display() {
        let grid = NativeGrid::from_bgr(RgbImage::from_pixel(1, 1, Rgb([1, 2, 3])));
        let shown = PixelGrid::Native(grid).to_display_image().to_rgb8();
        assert_eq!(shown.get_pixel(0, 0).0, [3, 2, 1]);
    }

    #[test]
    fn channel_counts() {
        let gray = PixelGrid::Gray(GrayImage::from_pixel(3, 2, Luma([7])));
        assert_eq!(gray.channels(), 1);
        assert_eq!((gray.width(), gray.height()), (3, 2));
        let display = PixelGrid::Display(RgbImage::new(1, 1));
        assert_eq!(display.channels(), 3);
    }

    #[test]
    fn png_bytes_decode_back() {
        let result = PixelGrid::Gray(GrayImage::from_pixel(4, 4, Luma([200])));
        let bytes = result.to_png_bytes().unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
        assert_eq!(decoded.get_pixel(2, 2).0, [200]);
    }
}
