// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Coverage rasterizer shared by every annotation primitive.
//
// Pixel centers sit on integer coordinates. A primitive reports, for each
// pixel center, the distance to its geometry; the distance becomes a
// coverage in [0, 1] which is used as the blend weight against the
// existing pixel.

use image::{Rgb, RgbImage};
use imageproc::pixelops::interpolate;

/// A point in continuous pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(self, other: Vec2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A straight segment; `start == end` is a dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Euclidean distance from `p` to the closest point of the segment.
    pub fn distance_to(&self, p: Vec2) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return p.distance(self.start);
        }
        let t = (((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len_sq).clamp(0.0, 1.0);
        p.distance(Vec2::new(self.start.x + t * dx, self.start.y + t * dy))
    }
}

/// Axis-aligned box in continuous pixel space, inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn around(points: impl IntoIterator<Item = Vec2>, margin: f64) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for p in iter {
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        }
        Some(Self {
            min: Vec2::new(min.x - margin, min.y - margin),
            max: Vec2::new(max.x + margin, max.y + margin),
        })
    }

    /// Integer pixel range covered by the box, clipped to the image.
    fn clip(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        if width == 0 || height == 0 {
            return None;
        }
        let x0 = self.min.x.floor().max(0.0);
        let y0 = self.min.y.floor().max(0.0);
        let x1 = self.max.x.ceil().min(f64::from(width - 1));
        let y1 = self.max.y.ceil().min(f64::from(height - 1));
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

/// Coverage of a pixel whose center is `distance` away from a stroke of
/// total width `width`.
pub(crate) fn stroke_coverage(distance: f64, width: f64) -> f64 {
    (width / 2.0 + 0.5 - distance).clamp(0.0, 1.0)
}

/// Blend `color` into every pixel of `bounds` with the coverage returned by
/// `coverage_at`. Channel order of `color` must match the image.
pub(crate) fn paint<F>(image: &mut RgbImage, color: [u8; 3], bounds: Bounds, coverage_at: F)
where
    F: Fn(Vec2) -> f64,
{
    let Some((x0, y0, x1, y1)) = bounds.clip(image.width(), image.height()) else {
        return;
    };
    let ink = Rgb(color);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let coverage = coverage_at(Vec2::new(f64::from(x), f64::from(y)));
            if coverage <= 0.0 {
                continue;
            }
            let pixel = image.get_pixel_mut(x, y);
            *pixel = if coverage >= 1.0 {
                ink
            } else {
                interpolate(ink, *pixel, coverage as f32)
            };
        }
    }
}

/// Stroke the union of `segments` with round caps and joins.
pub(crate) fn stroke_segments(image: &mut RgbImage, segments: &[Segment], width: f64, color: [u8; 3]) {
    let margin = width / 2.0 + 1.0;
    let Some(bounds) = Bounds::around(segments.iter().flat_map(|s| [s.start, s.end]), margin) else {
        return;
    };
    paint(image, color, bounds, |p| {
        let distance = segments
            .iter()
            .map(|s| s.distance_to(p))
            .fold(f64::INFINITY, f64::min);
        stroke_coverage(distance, width)
    });
}
