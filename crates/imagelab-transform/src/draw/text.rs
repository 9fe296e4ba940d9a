// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text rendering with the built-in stroke font.

use image::RgbImage;
use imagelab_core::{Point, TextScale};

use super::font::{ADVANCE, CAP_HEIGHT, SMALL_CAPS, glyph};
use super::raster::{Segment, Vec2, stroke_segments};

/// Pixels per font grid unit at scale 1, giving a 9 px cap height.
const UNIT_PX: f64 = 9.0 / CAP_HEIGHT;

/// Draw `text` with its baseline starting at `origin` (bottom-left).
pub fn draw_text(
    image: &mut RgbImage,
    text: &str,
    origin: Point,
    scale: TextScale,
    width: u32,
    color: [u8; 3],
) {
    let unit = UNIT_PX * f64::from(scale.value());
    let stroke_width = f64::from(width);

    for (index, c) in text.chars().enumerate() {
        let left = f64::from(origin.x) + index as f64 * ADVANCE * unit;
        let v_unit = if c.is_ascii_lowercase() { unit * SMALL_CAPS } else { unit };
        let to_pixel = |(gx, gy): (i8, i8)| {
            Vec2::new(
                left + f64::from(gx) * unit,
                f64::from(origin.y) - f64::from(gy) * v_unit,
            )
        };

        let segments: Vec<Segment> = glyph(c)
            .iter()
            .flat_map(|polyline| {
                let points: Vec<Vec2> = polyline.iter().copied().map(to_pixel).collect();
                if points.len() == 1 {
                    vec![Segment::new(points[0], points[0])]
                } else {
                    points.windows(2).map(|w| Segment::new(w[0], w[1])).collect()
                }
            })
            .collect();

        stroke_segments(image, &segments, stroke_width, color);
    }
}

/// Pixel size `(width, cap height)` of `text` at `scale`, excluding stroke.
pub fn text_extent(text: &str, scale: TextScale) -> (f64, f64) {
    let unit = UNIT_PX * f64::from(scale.value());
    let chars = text.chars().count() as f64;
    (chars * ADVANCE * unit, CAP_HEIGHT * unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const INK: [u8; 3] = [255, 255, 255];

    fn inked_rows_and_cols(img: &RgbImage) -> (Vec<u32>, Vec<u32>) {
        let mut rows = Vec::new();
        let mut cols = Vec::new();
        for (x, y, p) in img.enumerate_pixels() {
            if p.0 != [0, 0, 0] {
                rows.push(y);
                cols.push(x);
            }
        }
        (rows, cols)
    }

    #[test]
    fn text_sits_on_the_baseline() {
        let mut img = RgbImage::from_pixel(120, 60, Rgb([0, 0, 0]));
        let scale = TextScale::new(2.0).unwrap();
        draw_text(&mut img, "HI", Point::new(10, 40), scale, 1, INK);
        let (rows, cols) = inked_rows_and_cols(&img);
        // Cap height at scale 2 is 18 px: strokes span y 22..=40.
        assert_eq!(*rows.iter().max().unwrap(), 40);
        assert_eq!(*rows.iter().min().unwrap(), 22);
        assert_eq!(*cols.iter().min().unwrap(), 10);
    }

    #[test]
    fn lowercase_is_shorter() {
        let scale = TextScale::new(2.0).unwrap();
        let mut upper = RgbImage::from_pixel(60, 60, Rgb([0, 0, 0]));
        let mut lower = upper.clone();
        draw_text(&mut upper, "H", Point::new(5, 40), scale, 1, INK);
        draw_text(&mut lower, "h", Point::new(5, 40), scale, 1, INK);
        let top = |img: &RgbImage| *inked_rows_and_cols(img).0.iter().min().unwrap();
        assert!(top(&lower) > top(&upper));
    }

    #[test]
    fn period_is_a_dot() {
        let mut img = RgbImage::from_pixel(30, 30, Rgb([0, 0, 0]));
        draw_text(&mut img, ".", Point::new(0, 20), TextScale::new(1.0).unwrap(), 1, INK);
        assert_eq!(img.get_pixel(3, 20).0, INK);
        assert_eq!(inked_rows_and_cols(&img).0.len(), 1);
    }

    #[test]
    fn empty_text_draws_nothing() {
        let mut img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        draw_text(&mut img, "", Point::new(0, 9), TextScale::new(1.0).unwrap(), 3, INK);
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn extent_scales_linearly() {
        let (w1, h1) = text_extent("Hello", TextScale::new(1.0).unwrap());
        let (w2, h2) = text_extent("Hello", TextScale::new(2.0).unwrap());
        assert_eq!((w1, h1), (45.0, 9.0));
        assert_eq!((w2, h2), (90.0, 18.0));
    }
}
