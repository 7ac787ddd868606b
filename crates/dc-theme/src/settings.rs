//! Design-system settings that shape audits and exports.
//!
//! | Setting             | Values                    | Default |
//! |---------------------|---------------------------|---------|
//! | `button_text_color` | `auto`, `dark`, `light`   | `auto`  |
//! | `border_radius`     | pixels                    | `8`     |
//! | `mode`              | `light`, `dark`           | `light` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::contrast::{DARK_TEXT, LIGHT_TEXT, accessible_text_color};
use crate::error::ParseError;

/// How button labels pick their text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonTextColor {
    /// Whichever reference color contrasts more with the button.
    #[default]
    Auto,
    Dark,
    Light,
}

impl ButtonTextColor {
    /// The text hex to use on a button filled with `bg`.
    #[must_use]
    pub fn text_for(self, bg: &str) -> &'static str {
        match self {
            Self::Auto => accessible_text_color(bg).hex(),
            Self::Dark => DARK_TEXT,
            Self::Light => LIGHT_TEXT,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ButtonTextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonTextColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ParseError::ButtonTextColor(s.to_string())),
        }
    }
}

/// Light or dark page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseError::ColorMode(s.to_string())),
        }
    }
}

/// Everything besides the colors themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    pub button_text_color: ButtonTextColor,
    /// Corner radius in pixels.
    pub border_radius: u32,
    pub mode: ColorMode,
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            button_text_color: ButtonTextColor::Auto,
            border_radius: 8,
            mode: ColorMode::Light,
        }
    }
}
