// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the imagelab-transform crate. Runs the
// dispatcher on a synthetic 512x512 gradient for the pixel operations and
// the heaviest annotation (thick text at the default scale).

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{Rgb, RgbImage};

use imagelab_core::{
    Annotation, BrightnessContrast, Color, Operation, Point, Shape, Stroke, TextScale, Thickness,
    Threshold,
};
use imagelab_transform::{NativeGrid, apply, resize};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn gradient(size: u32) -> NativeGrid {
    let mut img = RgbImage::new(size, size);
    for (x, y, px) in img.enumerate_pixels_mut() {
        *px = Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8]);
    }
    NativeGrid::from_bgr(img)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_pixel_operations(c: &mut Criterion) {
    let grid = gradient(512);
    let operations = [
        ("color_convert", Operation::ColorConvert),
        ("grayscale", Operation::Grayscale),
        ("threshold", Operation::Threshold(Threshold::new(125).unwrap())),
        (
            "brightness_contrast",
            Operation::BrightnessContrast(BrightnessContrast::new(20, 40).unwrap()),
        ),
    ];

    for (name, op) in operations {
        c.bench_function(&format!("{name} (512x512)"), |b| {
            b.iter(|| black_box(apply(black_box(&grid), &op).unwrap()));
        });
    }
}

fn bench_text_annotation(c: &mut Criterion) {
    let grid = gradient(512);
    let op = Operation::Annotate(
        Annotation::new(
            Shape::Text {
                origin: Point::new(20, 300),
                text: "Hello".into(),
                scale: TextScale::new(15.0).unwrap(),
            },
            Stroke::Outline(Thickness::new(6).unwrap()),
            Color::new(0, 255, 170),
        )
        .unwrap(),
    );

    c.bench_function("annotate text scale 15 (512x512)", |b| {
        b.iter(|| black_box(apply(black_box(&grid), &op).unwrap()));
    });
}

fn bench_downscale(c: &mut Criterion) {
    let grid = gradient(512);
    c.bench_function("area downscale 512 -> 410", |b| {
        b.iter(|| black_box(resize::resize_area(black_box(&grid), 410, 410).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_pixel_operations,
    bench_text_annotation,
    bench_downscale
);
criterion_main!(benches);
