// SPDX-License-Identifier: MIT
//
// dc-color: color space primitives for dresscode.
//
// Everything downstream (palette ramps, contrast scoring, undo history,
// token export) speaks two representations: HSL as the canonical internal
// form, and uppercase `#RRGGBB` as the external one. This crate owns the
// conversions between them and the single validation gate for user-typed
// hex strings. No allocation beyond the returned `String`s, no state.

pub mod color;
pub mod error;

pub use color::{Hsl, Rgb, hex_to_hsl, hsl_to_hex, normalize_hex, normalize_hue};
pub use error::ColorError;
