// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Transform dispatcher — applies exactly one operation to a decoded grid.

use imagelab_core::Operation;
use imagelab_core::error::Result;
use tracing::{info, instrument};

use crate::grid::{NativeGrid, PixelGrid};
use crate::{adjust, color, draw};

/// Apply `operation` to `grid` and return the result.
///
/// The source grid is only read; every call starts from the same decoded
/// pixels, so re-running with new control values never sees an earlier
/// result.
///
/// | Operation           | Result                 |
/// |---------------------|------------------------|
/// | `ColorConvert`      | `Display`              |
/// | `Grayscale`         | `Gray`                 |
/// | `Threshold`         | `Gray`, values 0 / 255 |
/// | `BrightnessContrast`| `Native`               |
/// | `Annotate`          | `Display`              |
#[instrument(skip_all, fields(
    width = grid.width(),
    height = grid.height(),
    operation = %operation.kind()
))]
pub fn apply(grid: &NativeGrid, operation: &Operation) -> Result<PixelGrid> {
    let result = match operation {
        Operation::ColorConvert => PixelGrid::Display(color::to_display(grid)),
        Operation::Grayscale => PixelGrid::Gray(color::grayscale(grid)),
        Operation::Threshold(threshold) => PixelGrid::Gray(color::threshold(grid, *threshold)),
        Operation::BrightnessContrast(params) => {
            PixelGrid::Native(adjust::brightness_contrast(grid, *params))
        }
        Operation::Annotate(annotation) => PixelGrid::Display(draw::annotate(grid, annotation)?),
    };
    info!(channels = result.channels(), "Operation applied");
    Ok(result)
}
