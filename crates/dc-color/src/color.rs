// SPDX-License-Identifier: MIT
//
// dc-color color model: HSL canonical, hex external.
//
// Single-character variable names (r, g, b, h, s, l, a, k) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference formulas.
#![allow(clippy::many_single_char_names)]
//
// The UI layer thinks in HSL: a color wheel hands us a hue angle, the
// sliders hand us saturation and lightness percentages. Exports and
// clipboard copies want hex. Every conversion between the two goes
// through this module.
//
// Conversion pipeline:
//
//   hex string ↔ Rgb (u8 bytes) ↔ Hsl (f64, h in degrees, s/l in percent)
//
// Hsl values are kept exact (no rounding) so that hex → HSL → hex is
// lossless for every 24-bit color. Rounding only happens on display.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in Hue-Saturation-Lightness space.
///
/// Invariant: `h` lies in `[0, 360)`, `s` and `l` lie in `[0, 100]`.
/// [`Hsl::new`] enforces it permissively: hue wraps, saturation and
/// lightness clamp. Out-of-range input is never rejected.
///
/// # Examples
///
/// ```
/// use dc_color::Hsl;
///
/// let c = Hsl::new(-30.0, 120.0, 50.0);
/// assert_eq!(c.h, 330.0);
/// assert_eq!(c.s, 100.0);
///
/// assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_hex(), "#FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue angle in degrees, `[0, 360)`.
    pub h: f64,

    /// Saturation in percent, `[0, 100]`.
    pub s: f64,

    /// Lightness in percent, `[0, 100]`.
    pub l: f64,
}

impl Hsl {
    /// Build an HSL color, wrapping `h` and clamping `s`/`l`.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// Shift the hue by `degrees` (wraps around 360°).
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Set lightness to an absolute value (clamped to 0–100).
    #[inline]
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: clamp_percent(l),
            ..self
        }
    }

    /// Set saturation to an absolute value (clamped to 0–100).
    #[inline]
    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        Self {
            s: clamp_percent(s),
            ..self
        }
    }

    /// Round every component to the nearest integer.
    ///
    /// A rounded hue of 360 wraps back to 0.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::new(self.h.round(), self.s.round(), self.l.round())
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = normalize_hue(self.h);
        let s = clamp_percent(self.s) / 100.0;
        let l = clamp_percent(self.l) / 100.0;

        let a = s * l.min(1.0 - l);
        let channel = |n: f64| {
            let k = (n + h / 30.0) % 12.0;
            let x = (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
            to_u8(a.mul_add(-x, l))
        };

        Rgb::new(channel(0.0), channel(8.0), channel(4.0))
    }

    /// Convert to an uppercase `#RRGGBB` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// CSS functional notation with integer components: `hsl(217, 91%, 60%)`.
    #[must_use]
    pub fn to_css(self) -> String {
        let r = self.rounded();
        format!("hsl({}, {}%, {}%)", r.h, r.s, r.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 24-bit sRGB color.
///
/// This is the byte-level form every hex string parses into. Ramp
/// interpolation and luminance math both work on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB` (the `#` is optional, case-insensitive,
    /// surrounding whitespace ignored).
    ///
    /// Returns `None` for anything else, including the 4- and 8-digit
    /// alpha forms.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels as floats in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Exact conversion to HSL. No rounding is applied.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if self.r == self.g && self.g == self.b {
            // Achromatic: hue is undefined, use 0
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if (max - r).abs() < f64::EPSILON {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if (max - g).abs() < f64::EPSILON {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h * 60.0, s * 100.0, l * 100.0)
    }

    /// Linear per-channel interpolation toward `target`.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `target`. Each channel
    /// is rounded to the nearest byte.
    #[must_use]
    pub fn mix(self, target: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |from: u8, to: u8| {
            let from = f64::from(from);
            let to = f64::from(to);
            to_byte((to - from).mul_add(t, from))
        };
        Self::new(
            lerp(self.r, target.r),
            lerp(self.g, target.g),
            lerp(self.b, target.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

// ─── Free-function API ───────────────────────────────────────────────────────
//
// These are the string-level entry points the UI and export layers call.

/// Parse a hex color into HSL.
///
/// Accepts 3 or 6 hex digits with an optional leading `#`. Returns `None`
/// for anything else; never panics.
///
/// ```
/// use dc_color::hex_to_hsl;
///
/// let blue = hex_to_hsl("#3B82F6").unwrap().rounded();
/// assert_eq!((blue.h, blue.s, blue.l), (217.0, 91.0, 60.0));
/// assert!(hex_to_hsl("#12345").is_none());
/// ```
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    Rgb::from_hex(hex).map(Rgb::to_hsl)
}

/// Convert HSL components to an uppercase `#RRGGBB` string.
///
/// `h` wraps modulo 360 (negative values wrap positive); `s` and `l` clamp
/// to `[0, 100]`.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

/// Validate and canonicalize user-typed hex.
///
/// Trims whitespace, tolerates a missing `#`, expands 3-digit shorthand and
/// uppercases. Returns `None` on malformed input. This is the gate every
/// user-facing hex entry point goes through.
///
/// ```
/// use dc_color::normalize_hex;
///
/// assert_eq!(normalize_hex("  abc ").as_deref(), Some("#AABBCC"));
/// assert_eq!(normalize_hex("#zzzzzz"), None);
/// ```
#[must_use]
pub fn normalize_hex(input: &str) -> Option<String> {
    Rgb::from_hex(input).map(Rgb::to_hex)
}

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

#[inline]
fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
fn to_u8(v: f64) -> u8 {
    to_byte(v * 255.0)
}

/// Round a float in byte scale (0.0–255.0) to the nearest u8.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
