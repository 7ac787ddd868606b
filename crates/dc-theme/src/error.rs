//! Error types for settings parsing and token export.

use thiserror::Error;

/// A settings keyword that doesn't name any known value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown export format {0:?} (expected css, scss, tailwind or json)")]
    ExportFormat(String),

    #[error("unknown color mode {0:?} (expected light or dark)")]
    ColorMode(String),

    #[error("unknown button text color {0:?} (expected auto, dark or light)")]
    ButtonTextColor(String),
}

/// Failure while rendering a theme into an export format.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize design tokens")]
    Json(#[from] serde_json::Error),
}
