// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Annotation drawing — anti-aliased lines, circles, rectangles and stroke
// text painted onto a copy of the source grid.

mod font;
mod raster;
pub mod shapes;
pub mod text;

use image::RgbImage;
use imagelab_core::error::Result;
use imagelab_core::{Annotation, Shape, Stroke, Thickness};
use tracing::{debug, instrument};

use crate::color;
use crate::grid::NativeGrid;

/// Draw `annotation` on a copy of `grid` and return it in display order.
///
/// The color is reordered to B, G, R here because the copy is still native
/// while it is being painted. Fails if the annotation does not validate.
#[instrument(skip(grid, annotation), fields(shape = %annotation.shape.kind(), color = %annotation.color))]
pub fn annotate(grid: &NativeGrid, annotation: &Annotation) -> Result<RgbImage> {
    annotation.validate()?;
    let mut canvas = grid.as_bgr().clone();
    let ink = annotation.color.bgr();

    match &annotation.shape {
        Shape::Line { from, to } => {
            shapes::draw_line(&mut canvas, *from, *to, stroke_width(annotation.stroke), ink);
        }
        Shape::Circle { center, radius } => {
            shapes::draw_circle(&mut canvas, *center, *radius, annotation.stroke, ink);
        }
        Shape::Rectangle { corner, opposite } => {
            shapes::draw_rectangle(&mut canvas, *corner, *opposite, annotation.stroke, ink);
        }
        Shape::Text {
            origin,
            text,
            scale,
        } => {
            let (text_w, text_h) = text::text_extent(text, *scale);
            debug!(chars = text.chars().count(), text_w, text_h, "Rendering text");
            text::draw_text(
                &mut canvas,
                text,
                *origin,
                *scale,
                stroke_width(annotation.stroke),
                ink,
            );
        }
    }

    Ok(color::swap_red_blue(&canvas))
}

/// Stroke width for open shapes. `annotate` has already rejected `Filled`
/// for lines and text, so that arm is unreachable in practice.
fn stroke_width(stroke: Stroke) -> u32 {
    match stroke {
        Stroke::Outline(thickness) => thickness.pixels(),
        Stroke::Filled => Thickness::MIN as u32,
    }
}
