// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

use crate::types::{Color, TextScale, Thickness};

/// Persistent application settings.
///
/// Every field has a default, so a config file written by an older version
/// (or edited by hand) only needs to name the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Downscale uploads to 80% before any operation is applied.
    pub downscale_on_load: bool,
    /// Initial value of the threshold slider.
    pub default_threshold: u8,
    /// Initial annotation color.
    pub default_color: Color,
    /// Initial annotation stroke width.
    pub default_thickness: u8,
    /// Initial text scale for text annotations.
    pub default_text_scale: f32,
    /// Initial text for text annotations.
    pub default_text: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            downscale_on_load: false,
            default_threshold: 125,
            default_color: Color::new(0x00, 0xFF, 0xAA),
            default_thickness: 1,
            default_text_scale: 15.0,
            default_text: "Hello".into(),
        }
    }
}

impl AppConfig {
    /// Reset every default that the workbench controls would reject to its
    /// built-in value. Returns the names of the fields that were reset.
    pub fn repair(&mut self) -> Vec<&'static str> {
        let defaults = Self::default();
        let mut reset = Vec::new();
        if Thickness::new(i64::from(self.default_thickness)).is_err() {
            self.default_thickness = defaults.default_thickness;
            reset.push("default_thickness");
        }
        if TextScale::new(f64::from(self.default_text_scale)).is_err() {
            self.default_text_scale = defaults.default_text_scale;
            reset.push("default_text_scale");
        }
        reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"downscale_on_load": true}"#).unwrap();
        assert!(config.downscale_on_load);
        assert_eq!(config.default_threshold, 125);
        assert_eq!(config.default_color, Color::new(0, 255, 170));
    }

    #[test]
    fn invalid_color_is_a_deserialization_error() {
        let parsed = serde_json::from_str::<AppConfig>(r##"{"default_color": "#XYZ"}"##);
        assert!(parsed.is_err());
    }

    #[test]
    fn repair_resets_out_of_range_defaults() {
        let mut config: AppConfig = serde_json::from_str(
            r#"{"default_thickness": 0, "default_text_scale": 0, "default_threshold": 9}"#,
        )
        .unwrap();
        assert_eq!(config.repair(), vec!["default_thickness", "default_text_scale"]);
        assert_eq!(config.default_thickness, 1);
        assert_eq!(config.default_text_scale, 15.0);
        assert_eq!(config.default_threshold, 9);
    }

    #[test]
    fn repair_keeps_valid_config() {
        let mut config = AppConfig {
            default_thickness: 12,
            default_text_scale: 64.0,
            ..AppConfig::default()
        };
        let before = config.clone();
        assert!(config.repair().is_empty());
        assert_eq!(config, before);
    }
}
