// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use imagelab_core::{AppConfig, ControlPanel};
use imagelab_transform::NativeGrid;

use crate::services::app_services::{AppServices, RenderedImage};

/// The decoded upload. Replaced wholesale when another file is opened.
#[derive(Debug, Clone)]
pub struct Source {
    /// File name as picked, for display.
    pub name: String,
    /// Decoded (and possibly downscaled) pixels. Never modified.
    pub grid: NativeGrid,
    /// The grid encoded for the "Original Image" preview.
    pub preview: RenderedImage,
}

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application settings as last saved. The Settings page edits a draft
    /// and only writes here once the save succeeds.
    pub config: AppConfig,
    /// Currently opened image, if any.
    pub source: Option<Source>,
    /// Values of the workbench controls.
    pub controls: ControlPanel,
    /// Status message for user feedback.
    pub status_message: Option<String>,
    /// Bumped every time an image is opened.
    pub opened: u64,
}

impl AppState {
    /// Create initial state from the backend services.
    pub fn new(svc: &AppServices) -> Self {
        let config = svc.config();
        let controls = ControlPanel::from_config(&config);
        Self {
            config,
            source: None,
            controls,
            status_message: None,
            opened: 0,
        }
    }

    /// Install a newly opened image and reset the controls to the
    /// configured defaults.
    pub fn open(&mut self, source: Source) {
        self.controls = ControlPanel {
            operation: self.controls.operation,
            ..ControlPanel::from_config(&self.config)
        };
        self.status_message = Some(format!(
            "Opened {} ({}x{})",
            source.name,
            source.grid.width(),
            source.grid.height()
        ));
        self.source = Some(source);
        self.opened += 1;
    }

    /// Adopt a config that has just been persisted.
    pub fn config_saved(&mut self, config: AppConfig) {
        self.config = config;
    }
}

impl Default for AppState {
    fn default() -> Self {
        let config = AppConfig::default();
        Self {
            controls: ControlPanel::from_config(&config),
            config,
            source: None,
            status_message: None,
            opened: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use imagelab_core::OperationKind;
    use imagelab_transform::PixelGrid;

    fn source() -> Source {
        let grid = NativeGrid::from_bgr(RgbImage::new(3, 2));
        let preview = RenderedImage::from_grid(&PixelGrid::Native(grid.clone())).unwrap();
        Source {
            name: "a.png".into(),
            grid,
            preview,
        }
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 100, 50]));
        let mut buffer = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    fn opened(svc: &AppServices, grid: NativeGrid) -> Source {
        Source {
            name: "a.png".into(),
            preview: svc.preview(&grid).unwrap(),
            grid,
        }
    }

    #[test]
    fn opening_resets_controls_but_keeps_operation() {
        let mut state = AppState::default();
        state.controls.operation = OperationKind::Threshold;
        state.controls.threshold = 3;
        state.open(source());
        assert_eq!(state.controls.operation, OperationKind::Threshold);
        assert_eq!(state.controls.threshold, 125);
        assert_eq!(state.status_message.as_deref(), Some("Opened a.png (3x2)"));
    }

    #[test]
    fn each_open_bumps_the_counter() {
        let mut state = AppState::default();
        state.open(source());
        state.open(source());
        assert_eq!(state.opened, 2);
    }

    #[test]
    fn unsaved_settings_affect_neither_uploads_nor_controls() {
        let dir = tempfile::tempdir().unwrap();
        let svc = AppServices::with_data_dir(dir.path().to_path_buf());
        let mut state = AppState::new(&svc);
        let bytes = png_bytes(50, 20);

        // Edited on the Settings page but not saved.
        let draft = AppConfig {
            downscale_on_load: true,
            default_threshold: 10,
            ..state.config.clone()
        };

        let grid = svc.open_upload("a.png", &bytes).unwrap();
        assert_eq!(grid.dimensions(), (50, 20));
        state.open(opened(&svc, grid));
        assert_eq!(state.controls.threshold, 125);

        svc.save_config(&draft).unwrap();
        state.config_saved(draft);

        let grid = svc.open_upload("a.png", &bytes).unwrap();
        assert_eq!(grid.dimensions(), (40, 16));
        state.open(opened(&svc, grid));
        assert_eq!(state.controls.threshold, 10);
    }
}
