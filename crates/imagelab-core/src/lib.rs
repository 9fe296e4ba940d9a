// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ImageLab — Core types, parameter validation and error definitions shared
// across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod request;
pub mod types;

pub use config::AppConfig;
pub use error::{ImageLabError, Result};
pub use request::ControlPanel;
pub use types::*;
