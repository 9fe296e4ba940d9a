// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the workbench.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity drives how the UI presents it.

use crate::error::ImageLabError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user can fix it by changing a control.
    ActionRequired,
    /// Retrying with the same input will not help.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives colour in UI).
    pub severity: Severity,
}

/// Convert an `ImageLabError` into a `HumanError`.
pub fn humanize_error(err: &ImageLabError) -> HumanError {
    match err {
        ImageLabError::Decode(detail) => {
            if detail.contains("file type") || detail.contains("format") {
                HumanError {
                    message: "This type of file isn't supported.".into(),
                    suggestion: "Choose a JPEG or PNG image.".into(),
                    severity: Severity::Permanent,
                }
            } else {
                HumanError {
                    message: "We couldn't open this image.".into(),
                    suggestion: format!(
                        "The file may be damaged. Try saving it again as a JPEG or PNG. ({detail})"
                    ),
                    severity: Severity::Permanent,
                }
            }
        }

        ImageLabError::Parameter(detail) => HumanError {
            message: "One of the settings is out of range.".into(),
            suggestion: format!("Adjust the setting and the image will update. ({detail})"),
            severity: Severity::ActionRequired,
        },

        ImageLabError::Encode(detail) => HumanError {
            message: "The result couldn't be displayed.".into(),
            suggestion: format!("Try a smaller image. ({detail})"),
            severity: Severity::Permanent,
        },

        ImageLabError::Io(e) => HumanError {
            message: "A file couldn't be read or written.".into(),
            suggestion: format!("Check that the file still exists and is readable. ({e})"),
            severity: Severity::Permanent,
        },

        ImageLabError::Serialization(e) => HumanError {
            message: "The saved settings are damaged.".into(),
            suggestion: format!("Open Settings and save them again. ({e})"),
            severity: Severity::ActionRequired,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_errors_ask_for_action() {
        let human = humanize_error(&ImageLabError::parameter("threshold must be within 0..=255"));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.suggestion.contains("threshold"));
    }

    #[test]
    fn unsupported_format_is_permanent() {
        let human = humanize_error(&ImageLabError::decode("unsupported image format: gif"));
        assert_eq!(human.severity, Severity::Permanent);
        assert!(human.message.contains("isn't supported"));
    }

    #[test]
    fn corrupt_image_is_permanent() {
        let human = humanize_error(&ImageLabError::decode("unexpected end of stream"));
        assert_eq!(human.severity, Severity::Permanent);
        assert!(human.message.contains("couldn't open"));
    }
}
