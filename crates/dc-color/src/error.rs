// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised when a color string can't be turned into a color.
///
/// The conversion functions themselves return `Option`; this type exists for
/// callers that want a `Result` to propagate with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input was not 3 or 6 hex digits (after trimming and an optional `#`).
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}
