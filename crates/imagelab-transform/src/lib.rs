// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// imagelab-transform — Image loading and transformation for ImageLab.
//
// Provides the loader (JPEG/PNG decode into a native B,G,R grid, optional
// area-averaged downscale), the single-operation dispatcher (color
// conversion, grayscale, binary threshold, brightness/contrast,
// annotation), the anti-aliased drawing primitives and PNG encoding of
// results.

pub mod adjust;
pub mod color;
pub mod dispatch;
pub mod draw;
pub mod grid;
pub mod loader;
pub mod resize;

// Re-export the primary entry points so callers can use `imagelab_transform::apply` etc.
pub use dispatch::apply;
pub use grid::{NativeGrid, PixelGrid};
pub use loader::{LoadOptions, check_extension, load};
