// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Area-averaging resampler.
//
// A box-filter convolution: when shrinking, each destination pixel is the
// mean of the source pixels under it.

use fast_image_resize as fr;
use image::RgbImage;
use imagelab_core::error::{ImageLabError, Result};
use tracing::{debug, instrument};

use crate::grid::NativeGrid;

/// Resize to exactly `width` x `height` using area averaging.
#[instrument(skip(grid), fields(from_w = grid.width(), from_h = grid.height()))]
pub fn resize_area(grid: &NativeGrid, width: u32, height: u32) -> Result<NativeGrid> {
    let (src_w, src_h) = grid.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageLabError::parameter(format!(
            "target size must be at least 1x1, got {width}x{height}"
        )));
    }
    if src_w == 0 || src_h == 0 {
        return Err(ImageLabError::parameter("cannot resize an empty image"));
    }
    if (src_w, src_h) == (width, height) {
        return Ok(grid.clone());
    }

    let src = fr::images::Image::from_vec_u8(
        src_w,
        src_h,
        grid.as_bgr().as_raw().clone(),
        fr::PixelType::U8x3,
    )
    .map_err(|err| ImageLabError::decode(format!("could not prepare image for resize: {err}")))?;
    let mut dst = fr::images::Image::new(width, height, fr::PixelType::U8x3);

    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Box));
    fr::Resizer::new()
        .resize(&src, &mut dst, Some(&options))
        .map_err(|err| ImageLabError::decode(format!("image resize failed: {err}")))?;

    let pixels = RgbImage::from_raw(width, height, dst.into_vec())
        .ok_or_else(|| ImageLabError::decode("resized buffer has the wrong length"))?;
    debug!(width, height, "Area resize complete");
    Ok(NativeGrid::from_bgr(pixels))
}

/// `round(len * factor)`, never below 1.
pub fn scaled_len(len: u32, factor: f64) -> u32 {
    ((f64::from(len) * factor).round() as u32).max(1)
}
