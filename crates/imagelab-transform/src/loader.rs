// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image loader — decodes an uploaded JPEG/PNG into a native (B,G,R) grid,
// optionally shrinking it once before any operation sees it.

use std::path::Path;

use image::ImageFormat;
use imagelab_core::AppConfig;
use imagelab_core::error::{ImageLabError, Result};
use tracing::{debug, info, instrument};

use crate::grid::NativeGrid;
use crate::resize::{resize_area, scaled_len};

/// File extensions accepted by the file picker and [`check_extension`].
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Width and height factor applied when downscaling on load.
pub const DOWNSCALE_FACTOR: f64 = 0.8;

/// How an upload is turned into a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    /// Shrink to [`DOWNSCALE_FACTOR`] of the original size with area
    /// averaging.
    pub downscale: bool,
}

impl From<&AppConfig> for LoadOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            downscale: config.downscale_on_load,
        }
    }
}

/// Reject file names whose extension is not JPEG or PNG.
pub fn check_extension(file_name: &str) -> Result<()> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension {
        Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        Some(ext) => Err(ImageLabError::decode(format!(
            "unsupported file type .{ext}; expected one of {}",
            SUPPORTED_EXTENSIONS.join(", ")
        ))),
        None => Err(ImageLabError::decode(format!(
            "unsupported file type: {file_name:?} has no extension"
        ))),
    }
}

/// Decode raw JPEG/PNG bytes into a native grid.
///
/// The format is taken from the magic bytes, not the file name. Alpha is
/// dropped.
#[instrument(skip(data, options), fields(data_len = data.len(), downscale = options.downscale))]
pub fn load(data: &[u8], options: LoadOptions) -> Result<NativeGrid> {
    if data.is_empty() {
        return Err(ImageLabError::decode("the upload is empty"));
    }

    let format = image::guess_format(data)
        .map_err(|err| ImageLabError::decode(format!("unrecognised image format: {err}")))?;
    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        return Err(ImageLabError::decode(format!(
            "unsupported image format: {format:?}"
        )));
    }

    let image = image::load_from_memory_with_format(data, format)
        .map_err(|err| ImageLabError::decode(format!("failed to decode image: {err}")))?;
    let grid = NativeGrid::from_rgb(&image.to_rgb8());
    info!(
        width = grid.width(),
        height = grid.height(),
        ?format,
        "Image decoded"
    );

    if !options.downscale {
        return Ok(grid);
    }

    let (width, height) = grid.dimensions();
    let target_w = scaled_len(width, DOWNSCALE_FACTOR);
    let target_h = scaled_len(height, DOWNSCALE_FACTOR);
    debug!(target_w, target_h, "Downscaling on load");
    resize_area(&grid, target_w, target_h)
}
