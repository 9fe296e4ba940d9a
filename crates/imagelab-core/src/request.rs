// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Control panel model — the raw values behind the UI widgets, and their
// validation into a typed `Operation`.
//
// Widgets hand over whatever the user typed (numbers as i64, the color as a
// hex string). Nothing is clamped here: out-of-range input becomes a
// `Parameter` error that the UI shows instead of an image.

use crate::config::AppConfig;
use crate::error::{ImageLabError, Result};
use crate::types::{
    Annotation, AnnotationKind, BrightnessContrast, Color, Operation, OperationKind, Point,
    Shape, Stroke, TextScale, Thickness, Threshold,
};

/// Current values of every control on the workbench.
///
/// Only the controls relevant to the selected operation (and annotation
/// kind) are read by [`ControlPanel::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    pub operation: OperationKind,

    // -- Binary --
    pub threshold: i64,

    // -- Brightness/Contrast --
    pub brightness: i64,
    pub contrast: i64,

    // -- Annotation (shared) --
    pub annotation: AnnotationKind,
    pub color: String,
    pub thickness: i64,
    pub filled: bool,

    // -- Line / Rectangle --
    pub start: (i64, i64),
    pub end: (i64, i64),

    // -- Circle --
    pub center: (i64, i64),
    pub radius: i64,

    // -- Text --
    pub text_origin: (i64, i64),
    pub text: String,
    pub text_scale: f64,
}

impl ControlPanel {
    /// Controls initialised from the configured defaults.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            operation: OperationKind::default(),
            threshold: i64::from(config.default_threshold),
            brightness: 0,
            contrast: 0,
            annotation: AnnotationKind::default(),
            color: config.default_color.to_hex(),
            thickness: i64::from(config.default_thickness),
            filled: false,
            start: (10, 10),
            end: (50, 50),
            center: (50, 50),
            radius: 50,
            text_origin: (150, 150),
            text: config.default_text.clone(),
            text_scale: f64::from(config.default_text_scale),
        }
    }

    /// Validate the controls for the selected operation.
    pub fn build(&self) -> Result<Operation> {
        match self.operation {
            OperationKind::ColorConvert => Ok(Operation::ColorConvert),
            OperationKind::Grayscale => Ok(Operation::Grayscale),
            OperationKind::Threshold => Ok(Operation::Threshold(Threshold::new(self.threshold)?)),
            OperationKind::BrightnessContrast => Ok(Operation::BrightnessContrast(
                BrightnessContrast::new(self.brightness, self.contrast)?,
            )),
            OperationKind::Annotate => Ok(Operation::Annotate(self.build_annotation()?)),
        }
    }

    fn build_annotation(&self) -> Result<Annotation> {
        let color = Color::from_hex(&self.color)?;
        // Fill only applies to closed shapes; the flag is ignored otherwise.
        let closed_shape = matches!(
            self.annotation,
            AnnotationKind::Circle | AnnotationKind::Rectangle
        );
        let stroke = if self.filled && closed_shape {
            Stroke::Filled
        } else {
            Stroke::Outline(Thickness::new(self.thickness)?)
        };

        let shape = match self.annotation {
            AnnotationKind::Line => Shape::Line {
                from: point(self.start)?,
                to: point(self.end)?,
            },
            AnnotationKind::Rectangle => Shape::Rectangle {
                corner: point(self.start)?,
                opposite: point(self.end)?,
            },
            AnnotationKind::Circle => Shape::Circle {
                center: point(self.center)?,
                radius: u32::try_from(self.radius).map_err(|_| {
                    ImageLabError::parameter(format!(
                        "radius must be a non-negative pixel count, got {}",
                        self.radius
                    ))
                })?,
            },
            AnnotationKind::Text => Shape::Text {
                origin: point(self.text_origin)?,
                text: self.text.clone(),
                scale: TextScale::new(self.text_scale)?,
            },
        };

        Annotation::new(shape, stroke, color)
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

fn point((x, y): (i64, i64)) -> Result<Point> {
    Point::from_controls(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(operation: OperationKind) -> ControlPanel {
        ControlPanel {
            operation,
            ..ControlPanel::default()
        }
    }

    #[test]
    fn defaults_follow_config() {
        let config = AppConfig {
            default_threshold: 42,
            default_text: "Hi".into(),
            ..AppConfig::default()
        };
        let controls = ControlPanel::from_config(&config);
        assert_eq!(controls.threshold, 42);
        assert_eq!(controls.text, "Hi");
        assert_eq!(controls.color, "#00FFAA");
    }

    #[test]
    fn default_controls_build_every_operation() {
        for kind in OperationKind::ALL {
            let op = panel(kind).build().unwrap();
            assert_eq!(op.kind(), kind);
        }
        for annotation in AnnotationKind::ALL {
            let controls = ControlPanel {
                annotation,
                ..panel(OperationKind::Annotate)
            };
            match controls.build().unwrap() {
                Operation::Annotate(a) => assert_eq!(a.shape.kind(), annotation),
                other => panic!("expected annotation, got {other:?}"),
            }
        }
    }

    #[test]
    fn out_of_range_threshold_is_a_parameter_error() {
        let controls = ControlPanel {
            threshold: 300,
            ..panel(OperationKind::Threshold)
        };
        assert!(matches!(controls.build(), Err(ImageLabError::Parameter(_))));
    }

    #[test]
    fn negative_radius_is_a_parameter_error() {
        let controls = ControlPanel {
            annotation: AnnotationKind::Circle,
            radius: -5,
            ..panel(OperationKind::Annotate)
        };
        assert!(matches!(controls.build(), Err(ImageLabError::Parameter(_))));
    }

    #[test]
    fn bad_color_is_a_parameter_error() {
        let controls = ControlPanel {
            color: "teal".into(),
            ..panel(OperationKind::Annotate)
        };
        assert!(matches!(controls.build(), Err(ImageLabError::Parameter(_))));
    }

    #[test]
    fn irrelevant_controls_are_ignored() {
        // A bad threshold does not matter while grayscale is selected.
        let controls = ControlPanel {
            threshold: 999,
            ..panel(OperationKind::Grayscale)
        };
        assert_eq!(controls.build().unwrap(), Operation::Grayscale);
    }

    #[test]
    fn fill_toggle_skips_thickness_validation() {
        let controls = ControlPanel {
            annotation: AnnotationKind::Rectangle,
            filled: true,
            thickness: 0,
            ..panel(OperationKind::Annotate)
        };
        match controls.build().unwrap() {
            Operation::Annotate(a) => assert_eq!(a.stroke, Stroke::Filled),
            other => panic!("expected annotation, got {other:?}"),
        }
    }

    #[test]
    fn fill_flag_left_over_from_a_closed_shape_is_ignored() {
        let rectangle = ControlPanel {
            annotation: AnnotationKind::Rectangle,
            filled: true,
            ..panel(OperationKind::Annotate)
        };
        assert!(rectangle.build().is_ok());

        for annotation in [AnnotationKind::Line, AnnotationKind::Text] {
            let switched = ControlPanel {
                annotation,
                thickness: 5,
                ..rectangle.clone()
            };
            match switched.build().unwrap() {
                Operation::Annotate(a) => {
                    assert_eq!(a.shape.kind(), annotation);
                    assert_eq!(a.stroke, Stroke::Outline(Thickness::new(5).unwrap()));
                }
                other => panic!("expected annotation, got {other:?}"),
            }
        }
    }

    #[test]
    fn hidden_fill_flag_still_validates_thickness() {
        let controls = ControlPanel {
            annotation: AnnotationKind::Line,
            filled: true,
            thickness: 0,
            ..panel(OperationKind::Annotate)
        };
        assert!(matches!(controls.build(), Err(ImageLabError::Parameter(_))));
    }
}
