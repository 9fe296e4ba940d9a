// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — owns the persisted configuration and turns UI
// input (file bytes, control values) into decoded grids and displayable
// results.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use imagelab_core::error::Result;
use imagelab_core::{AppConfig, ControlPanel};
use imagelab_transform::{LoadOptions, NativeGrid, PixelGrid};
use tracing::{info, warn};

use super::data_dir;

/// A result ready to be shown in an `img` element.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    /// `data:image/png;base64,...`
    pub data_url: String,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl RenderedImage {
    /// Encode a result as an inline PNG.
    pub fn from_grid(grid: &PixelGrid) -> Result<Self> {
        let png = grid.to_png_bytes()?;
        Ok(Self {
            data_url: format!("data:image/png;base64,{}", STANDARD.encode(png)),
            width: grid.width(),
            height: grid.height(),
            channels: grid.channels(),
        })
    }
}

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// Cheaply cloneable so that it can be moved into event handlers.
#[derive(Clone)]
pub struct AppServices {
    data_dir: PathBuf,
    config: Arc<Mutex<AppConfig>>,
}

impl AppServices {
    /// Initialise services in the platform data directory. Call once at app
    /// startup.
    pub fn init() -> Self {
        Self::with_data_dir(data_dir::data_dir())
    }

    /// Initialise services rooted at `dir`, loading `config.json` from it if
    /// present.
    pub fn with_data_dir(dir: PathBuf) -> Self {
        info!(path = %dir.display(), "initialising app services");
        let config = load_config(&dir).unwrap_or_default();
        Self {
            data_dir: dir,
            config: Arc::new(Mutex::new(config)),
        }
    }

    // -- Image pipeline ------------------------------------------------------

    /// Check the file name, decode the bytes and apply the configured
    /// downscale. Done once per upload.
    pub fn open_upload(&self, file_name: &str, bytes: &[u8]) -> Result<NativeGrid> {
        imagelab_transform::check_extension(file_name)?;
        let options = LoadOptions::from(&self.config());
        let grid = imagelab_transform::load(bytes, options)?;
        info!(
            file = %file_name,
            width = grid.width(),
            height = grid.height(),
            "upload opened"
        );
        Ok(grid)
    }

    /// Validate the controls, apply the selected operation to `source` and
    /// encode the result. Nothing is returned unless every step succeeds.
    pub fn render(&self, source: &NativeGrid, controls: &ControlPanel) -> Result<RenderedImage> {
        let operation = controls.build()?;
        let result = imagelab_transform::apply(source, &operation)?;
        RenderedImage::from_grid(&result)
    }

    /// The source image as decoded, for the "Original Image" preview.
    pub fn preview(&self, source: &NativeGrid) -> Result<RenderedImage> {
        RenderedImage::from_grid(&PixelGrid::Native(source.clone()))
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Update and persist the config.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        *self.config.lock().expect("config lock poisoned") = config.clone();
        persist_config(&self.data_dir, config)
    }

    /// Path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<AppConfig>(&data) {
        Ok(mut config) => {
            for field in config.repair() {
                warn!(path = %path.display(), field, "config value out of range, using default");
            }
            Some(config)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            None
        }
    }
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}
