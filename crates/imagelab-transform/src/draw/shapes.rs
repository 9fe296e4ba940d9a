// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Anti-aliased line, circle and rectangle primitives.

use image::RgbImage;
use imagelab_core::{Point, Stroke};

use super::raster::{Bounds, Segment, Vec2, paint, stroke_coverage, stroke_segments};

fn vec2(p: Point) -> Vec2 {
    Vec2::new(f64::from(p.x), f64::from(p.y))
}

/// Straight segment with round caps. Coincident endpoints draw a dot.
pub fn draw_line(image: &mut RgbImage, from: Point, to: Point, width: u32, color: [u8; 3]) {
    let segment = Segment::new(vec2(from), vec2(to));
    stroke_segments(image, &[segment], f64::from(width), color);
}

/// Circle outline, or a filled disc for [`Stroke::Filled`].
pub fn draw_circle(image: &mut RgbImage, center: Point, radius: u32, stroke: Stroke, color: [u8; 3]) {
    let c = vec2(center);
    let r = f64::from(radius);
    match stroke {
        Stroke::Outline(thickness) => {
            let width = f64::from(thickness.pixels());
            let Some(bounds) = Bounds::around([c], r + width / 2.0 + 1.0) else {
                return;
            };
            paint(image, color, bounds, |p| {
                let ring_distance = ((p.x - c.x).hypot(p.y - c.y) - r).abs();
                stroke_coverage(ring_distance, width)
            });
        }
        Stroke::Filled => {
            let Some(bounds) = Bounds::around([c], r + 1.0) else {
                return;
            };
            paint(image, color, bounds, |p| {
                let outside = ((p.x - c.x).hypot(p.y - c.y) - r).max(0.0);
                stroke_coverage(outside, 1.0)
            });
        }
    }
}

/// Axis-aligned rectangle from two opposite corners, outline or filled.
pub fn draw_rectangle(
    image: &mut RgbImage,
    corner: Point,
    opposite: Point,
    stroke: Stroke,
    color: [u8; 3],
) {
    let (a, b) = (vec2(corner), vec2(opposite));
    let min = Vec2::new(a.x.min(b.x), a.y.min(b.y));
    let max = Vec2::new(a.x.max(b.x), a.y.max(b.y));

    match stroke {
        Stroke::Outline(thickness) => {
            let top_right = Vec2::new(max.x, min.y);
            let bottom_left = Vec2::new(min.x, max.y);
            let edges = [
                Segment::new(min, top_right),
                Segment::new(top_right, max),
                Segment::new(max, bottom_left),
                Segment::new(bottom_left, min),
            ];
            stroke_segments(image, &edges, f64::from(thickness.pixels()), color);
        }
        Stroke::Filled => {
            let Some(bounds) = Bounds::around([min, max], 1.0) else {
                return;
            };
            paint(image, color, bounds, |p| {
                let dx = (min.x - p.x).max(p.x - max.x).max(0.0);
                let dy = (min.y - p.y).max(p.y - max.y).max(0.0);
                stroke_coverage(dx.hypot(dy), 1.0)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use imagelab_core::Thickness;

    const INK: [u8; 3] = [0, 255, 170];

    fn canvas() -> RgbImage {
        RgbImage::from_pixel(40, 40, Rgb([0, 0, 0]))
    }

    fn outline(px: i64) -> Stroke {
        Stroke::Outline(Thickness::new(px).unwrap())
    }

    fn inked(img: &RgbImage) -> usize {
        img.pixels().filter(|p| p.0 != [0, 0, 0]).count()
    }

    #[test]
    fn coincident_line_is_a_single_dot() {
        let mut img = canvas();
        draw_line(&mut img, Point::new(10, 10), Point::new(10, 10), 1, INK);
        assert_eq!(img.get_pixel(10, 10).0, INK);
        assert_eq!(inked(&img), 1);
    }

    #[test]
    fn horizontal_line_covers_its_span() {
        let mut img = canvas();
        draw_line(&mut img, Point::new(5, 20), Point::new(30, 20), 1, INK);
        for x in 5..=30 {
            assert_eq!(img.get_pixel(x, 20).0, INK, "x = {x}");
        }
        assert_eq!(img.get_pixel(5, 21).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(31, 20).0, [0, 0, 0]);
    }

    #[test]
    fn thick_line_is_wider() {
        let mut thin = canvas();
        let mut thick = canvas();
        draw_line(&mut thin, Point::new(5, 5), Point::new(30, 30), 1, INK);
        draw_line(&mut thick, Point::new(5, 5), Point::new(30, 30), 6, INK);
        assert!(inked(&thick) > 2 * inked(&thin));
    }

    #[test]
    fn diagonal_line_is_antialiased() {
        let mut img = canvas();
        draw_line(&mut img, Point::new(0, 0), Point::new(39, 13), 1, INK);
        let partial = img
            .pixels()
            .filter(|p| p.0 != [0, 0, 0] && p.0 != INK)
            .count();
        assert!(partial > 0, "expected blended edge pixels");
    }

    #[test]
    fn line_off_canvas_is_clipped() {
        let mut img = canvas();
        draw_line(&mut img, Point::new(-100, 20), Point::new(100, 20), 1, INK);
        assert_eq!(img.get_pixel(0, 20).0, INK);
        assert_eq!(img.get_pixel(39, 20).0, INK);
    }

    #[test]
    fn circle_outline_leaves_center_untouched() {
        let mut img = canvas();
        draw_circle(&mut img, Point::new(20, 20), 10, outline(1), INK);
        assert_eq!(img.get_pixel(20, 20).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(30, 20).0, INK);
        assert_eq!(img.get_pixel(20, 10).0, INK);
    }

    #[test]
    fn filled_circle_covers_center() {
        let mut img = canvas();
        draw_circle(&mut img, Point::new(20, 20), 10, Stroke::Filled, INK);
        assert_eq!(img.get_pixel(20, 20).0, INK);
        assert_eq!(img.get_pixel(27, 20).0, INK);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn zero_radius_circle_is_a_dot() {
        let mut img = canvas();
        draw_circle(&mut img, Point::new(8, 8), 0, outline(1), INK);
        assert_eq!(img.get_pixel(8, 8).0, INK);
        assert_eq!(inked(&img), 1);
    }

    #[test]
    fn rectangle_outline_corners_in_any_order() {
        let mut a = canvas();
        let mut b = canvas();
        draw_rectangle(&mut a, Point::new(5, 5), Point::new(30, 20), outline(2), INK);
        draw_rectangle(&mut b, Point::new(30, 20), Point::new(5, 5), outline(2), INK);
        assert_eq!(a, b);
        assert_eq!(a.get_pixel(5, 12).0, INK);
        assert_eq!(a.get_pixel(17, 20).0, INK);
        assert_eq!(a.get_pixel(17, 12).0, [0, 0, 0]);
    }

    #[test]
    fn filled_rectangle_covers_interior() {
        let mut img = canvas();
        draw_rectangle(&mut img, Point::new(5, 5), Point::new(30, 20), Stroke::Filled, INK);
        assert_eq!(img.get_pixel(17, 12).0, INK);
        assert_eq!(img.get_pixel(31, 12).0, [0, 0, 0]);
    }
}
