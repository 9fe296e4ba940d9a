// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: validated operation parameters and the operation
// enumeration consumed by the transform dispatcher.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ImageLabError, Result};

// -- Color --------------------------------------------------------------------

/// An 8-bit RGB color. Always stored in R, G, B order; drawing code reorders
/// it for whatever channel layout the target grid uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ImageLabError::parameter(format!(
                "color must be 6 hex digits like #00FFAA, got {hex:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(ImageLabError::parameter)
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// `#RRGGBB`, upper-case.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels in R, G, B order.
    pub fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels in B, G, R order.
    pub fn bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

impl FromStr for Color {
    type Err = ImageLabError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ImageLabError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// -- Geometry -----------------------------------------------------------------

/// Integer pixel coordinate. May lie outside the image; drawing clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a point from raw control values, rejecting anything that does
    /// not fit in an `i32`.
    pub fn from_controls(x: i64, y: i64) -> Result<Self> {
        let coord = |v: i64, axis: &str| {
            i32::try_from(v)
                .map_err(|_| ImageLabError::parameter(format!("{axis} coordinate {v} is out of range")))
        };
        Ok(Self {
            x: coord(x, "x")?,
            y: coord(y, "y")?,
        })
    }
}

// -- Scalar parameters --------------------------------------------------------

/// Binarization cutoff in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Threshold(u8);

impl Threshold {
    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value).map(Self).map_err(|_| {
            ImageLabError::parameter(format!("threshold must be within 0..=255, got {value}"))
        })
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// A brightness or contrast slider value in `-100..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Level(i8);

impl Level {
    pub const MIN: i64 = -100;
    pub const MAX: i64 = 100;

    pub fn new(value: i64, name: &str) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ImageLabError::parameter(format!(
                "{name} must be within {}..={}, got {value}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value as i8))
    }

    pub fn value(self) -> i32 {
        i32::from(self.0)
    }
}

/// Linear brightness/contrast model: `out = in * gain + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BrightnessContrast {
    pub brightness: Level,
    pub contrast: Level,
}

impl BrightnessContrast {
    pub fn new(brightness: i64, contrast: i64) -> Result<Self> {
        Ok(Self {
            brightness: Level::new(brightness, "brightness")?,
            contrast: Level::new(contrast, "contrast")?,
        })
    }

    /// `(contrast + 100) / 100`, so contrast 0 is a gain of exactly 1.
    pub fn gain(self) -> f32 {
        (self.contrast.value() + 100) as f32 / 100.0
    }

    pub fn offset(self) -> f32 {
        self.brightness.value() as f32
    }
}

/// Stroke width in pixels, `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Thickness(u8);

impl Thickness {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 12;

    pub fn new(value: i64) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ImageLabError::parameter(format!(
                "thickness must be within {}..={}, got {value}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value as u8))
    }

    pub fn pixels(self) -> u32 {
        u32::from(self.0)
    }
}

impl Default for Thickness {
    fn default() -> Self {
        Self(1)
    }
}

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stroke {
    /// Draw only the outline with the given width.
    Outline(Thickness),
    /// Fill the interior (circle and rectangle only).
    Filled,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::Outline(Thickness::default())
    }
}

/// Text scale factor. At scale 1 the cap height is 9 px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextScale(f32);

impl TextScale {
    pub const MAX: f32 = 64.0;

    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 || value > f64::from(Self::MAX) {
            return Err(ImageLabError::parameter(format!(
                "text scale must be within (0, {}], got {value}",
                Self::MAX
            )));
        }
        Ok(Self(value as f32))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

// -- Annotation ---------------------------------------------------------------

/// The four annotation kinds offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnnotationKind {
    #[default]
    Line,
    Circle,
    Rectangle,
    Text,
}

impl AnnotationKind {
    pub const ALL: [Self; 4] = [Self::Line, Self::Circle, Self::Rectangle, Self::Text];

    pub fn label(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Circle => "Circle",
            Self::Rectangle => "Rectangle",
            Self::Text => "Text",
        }
    }
}

impl FromStr for AnnotationKind {
    type Err = ImageLabError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ImageLabError::parameter(format!("unknown annotation {s:?}")))
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Geometry of a single annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line { from: Point, to: Point },
    Circle { center: Point, radius: u32 },
    /// Axis-aligned; the corners may be given in any order.
    Rectangle { corner: Point, opposite: Point },
    /// `origin` is the bottom-left of the first character's baseline.
    Text {
        origin: Point,
        text: String,
        scale: TextScale,
    },
}

impl Shape {
    pub fn kind(&self) -> AnnotationKind {
        match self {
            Self::Line { .. } => AnnotationKind::Line,
            Self::Circle { .. } => AnnotationKind::Circle,
            Self::Rectangle { .. } => AnnotationKind::Rectangle,
            Self::Text { .. } => AnnotationKind::Text,
        }
    }
}

/// A shape plus how to paint it.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub shape: Shape,
    pub stroke: Stroke,
    pub color: Color,
}

impl Annotation {
    pub fn new(shape: Shape, stroke: Stroke, color: Color) -> Result<Self> {
        let annotation = Self {
            shape,
            stroke,
            color,
        };
        annotation.validate()?;
        Ok(annotation)
    }

    /// Check the constraints that span several fields.
    pub fn validate(&self) -> Result<()> {
        match (&self.shape, self.stroke) {
            (Shape::Line { .. } | Shape::Text { .. }, Stroke::Filled) => {
                Err(ImageLabError::parameter(format!(
                    "{} annotations cannot be filled",
                    self.shape.kind()
                )))
            }
            _ => Ok(()),
        }
    }
}

// -- Operation ----------------------------------------------------------------

/// The operation selector, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperationKind {
    #[default]
    ColorConvert,
    Grayscale,
    Threshold,
    BrightnessContrast,
    Annotate,
}

impl OperationKind {
    pub const ALL: [Self; 5] = [
        Self::ColorConvert,
        Self::Grayscale,
        Self::Threshold,
        Self::BrightnessContrast,
        Self::Annotate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ColorConvert => "RGB",
            Self::Grayscale => "Grayscale",
            Self::Threshold => "Binary",
            Self::BrightnessContrast => "Brightness/Contrast",
            Self::Annotate => "Annotation",
        }
    }
}

impl FromStr for OperationKind {
    type Err = ImageLabError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ImageLabError::parameter(format!("unknown operation {s:?}")))
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exactly one transformation applied to a decoded image.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Reorder channels for display, no pixel math.
    ColorConvert,
    Grayscale,
    Threshold(Threshold),
    BrightnessContrast(BrightnessContrast),
    Annotate(Annotation),
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::ColorConvert => OperationKind::ColorConvert,
            Self::Grayscale => OperationKind::Grayscale,
            Self::Threshold(_) => OperationKind::Threshold,
            Self::BrightnessContrast(_) => OperationKind::BrightnessContrast,
            Self::Annotate(_) => OperationKind::Annotate,
        }
    }
}

// -- Tests --------------------------------------------------------------------
