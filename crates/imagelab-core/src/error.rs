// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error type for ImageLab.

use thiserror::Error;

/// Top-level error type for all ImageLab operations.
#[derive(Debug, Error)]
pub enum ImageLabError {
    // -- Input --
    #[error("could not decode image: {0}")]
    Decode(String),

    #[error("invalid parameter: {0}")]
    Parameter(String),

    // -- Output --
    #[error("could not encode result: {0}")]
    Encode(String),

    // -- Configuration persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ImageLabError {
    /// Shorthand for building a `Parameter` error from anything displayable.
    pub fn parameter(detail: impl std::fmt::Display) -> Self {
        Self::Parameter(detail.to_string())
    }

    /// Shorthand for building a `Decode` error from anything displayable.
    pub fn decode(detail: impl std::fmt::Display) -> Self {
        Self::Decode(detail.to_string())
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ImageLabError>;
