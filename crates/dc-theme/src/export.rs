//! Design token export.
//!
//! Renders a [`ColorTheme`] plus [`DesignSettings`] as CSS custom properties,
//! SCSS variables, a Tailwind `theme.extend` block, or a JSON token document.
//! Ramp stops are keyed `10, 20, … 90` by position, not by their percentage.
//!
//! The generation timestamp is passed in by the caller so the output of a given
//! theme is fully deterministic.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use dc_color::Hsl;
use serde::Serialize;

use crate::error::{ExportError, ParseError};
use crate::palette::ColorTheme;
use crate::settings::{ButtonTextColor, ColorMode, DesignSettings};

const FILE_STEM: &str = "dresscode-theme";
const SYSTEM_NAME: &str = "DressCode Design System";
const TOKEN_SCHEMA: &str = "https://design-tokens.github.io/community-group/format/";

/// Output format for [`export_theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    #[default]
    Css,
    Scss,
    Tailwind,
    Json,
}

impl ExportFormat {
    pub const ALL: [Self; 4] = [Self::Css, Self::Scss, Self::Tailwind, Self::Json];

    /// File extension, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "js",
            Self::Json => "json",
        }
    }

    /// Suggested download name, e.g. `dresscode-theme.scss`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{FILE_STEM}.{}", self.extension())
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS Variables",
            Self::Scss => "SCSS Variables",
            Self::Tailwind => "Tailwind Config",
            Self::Json => "JSON Tokens",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "scss" => Ok(Self::Scss),
            "tailwind" | "js" => Ok(Self::Tailwind),
            "json" => Ok(Self::Json),
            _ => Err(ParseError::ExportFormat(s.to_string())),
        }
    }
}

/// Render `theme` in the requested format.
///
/// # Errors
///
/// Only [`ExportFormat::Json`] can fail, if token serialisation fails.
pub fn export_theme(
    theme: &ColorTheme,
    settings: &DesignSettings,
    format: ExportFormat,
    generated_at: &str,
) -> Result<String, ExportError> {
    tracing::debug!(%format, "exporting theme");
    match format {
        ExportFormat::Css => Ok(render_css(theme, settings, generated_at)),
        ExportFormat::Scss => Ok(render_scss(theme, settings, generated_at)),
        ExportFormat::Tailwind => Ok(render_tailwind(theme, settings, generated_at)),
        ExportFormat::Json => render_json(theme, settings, generated_at),
    }
}

// ---------------------------------------------------------------------------
// Text formats
// ---------------------------------------------------------------------------

/// Position key of a ramp entry: 10 for the first, 90 for the ninth.
fn stop_key(index: usize) -> usize {
    (index + 1) * 10
}

/// One line per ramp entry, joined with newlines.
fn ramp_lines(ramp: &[String], line: impl Fn(usize, &str) -> String) -> String {
    ramp.iter()
        .enumerate()
        .map(|(i, color)| line(stop_key(i), color))
        .collect::<Vec<_>>()
        .join("\n")
}

fn css_var(prefix: &str) -> impl Fn(usize, &str) -> String + '_ {
    move |k, color| format!("  --{prefix}-{k}: {color};")
}

fn scss_var(prefix: &str) -> impl Fn(usize, &str) -> String + '_ {
    move |k, color| format!("${prefix}-{k}: {color};")
}

fn js_entry(indent: usize) -> impl Fn(usize, &str) -> String {
    move |k, color| format!("{:indent$}{k}: '{color}',", "")
}

fn render_css(theme: &ColorTheme, settings: &DesignSettings, generated_at: &str) -> String {
    let p = theme.primary.rounded();
    let c = theme.complementary.rounded();

    format!(
        "/* DressCode Design System Export */
/* Generated at {generated_at} */

:root {{
  /* Primary Color */
  --primary-h: {ph};
  --primary-s: {ps}%;
  --primary-l: {pl}%;
  --color-primary: hsl(var(--primary-h), var(--primary-s), var(--primary-l));
  --color-primary-hex: {primary_hex};

  /* Complementary Color */
  --comp-h: {ch};
  --comp-s: {cs}%;
  --comp-l: {cl}%;
  --color-complementary: hsl(var(--comp-h), var(--comp-s), var(--comp-l));
  --color-complementary-hex: {comp_hex};

  /* Design System Settings */
  --border-radius: {radius}px;
  --button-text-color: {button};

  /* Lighter Tones (Tints) */
{tints}

  /* Darker Tones (Shades) */
{shades}

  /* Neutral Lighter */
{nl}

  /* Neutral Darker */
{nd}
}}
",
        ph = p.h,
        ps = p.s,
        pl = p.l,
        primary_hex = theme.primary_hex(),
        ch = c.h,
        cs = c.s,
        cl = c.l,
        comp_hex = theme.complementary_hex(),
        radius = settings.border_radius,
        button = settings.button_text_color,
        tints = ramp_lines(&theme.tints, css_var("tint")),
        shades = ramp_lines(&theme.shades, css_var("shade")),
        nl = ramp_lines(&theme.neutral_lighter, css_var("neutral-light")),
        nd = ramp_lines(&theme.neutral_darker, css_var("neutral-dark")),
    )
}

fn render_scss(theme: &ColorTheme, settings: &DesignSettings, generated_at: &str) -> String {
    let p = theme.primary.rounded();
    let c = theme.complementary.rounded();

    format!(
        "// DressCode Design System Export (SCSS)
// Generated at {generated_at}

// Primary Color
$primary-h: {ph};
$primary-s: {ps}%;
$primary-l: {pl}%;
$color-primary: hsl($primary-h, $primary-s, $primary-l);
$color-primary-hex: {primary_hex};

// Complementary Color
$comp-h: {ch};
$comp-s: {cs}%;
$comp-l: {cl}%;
$color-complementary: hsl($comp-h, $comp-s, $comp-l);
$color-complementary-hex: {comp_hex};

// Design System Settings
$border-radius: {radius}px;
$button-text-color: {button};

// Lighter Tones (Tints)
{tints}

// Darker Tones (Shades)
{shades}

// Neutral Lighter
{nl}

// Neutral Darker
{nd}
",
        ph = p.h,
        ps = p.s,
        pl = p.l,
        primary_hex = theme.primary_hex(),
        ch = c.h,
        cs = c.s,
        cl = c.l,
        comp_hex = theme.complementary_hex(),
        radius = settings.border_radius,
        button = settings.button_text_color,
        tints = ramp_lines(&theme.tints, scss_var("tint")),
        shades = ramp_lines(&theme.shades, scss_var("shade")),
        nl = ramp_lines(&theme.neutral_lighter, scss_var("neutral-light")),
        nd = ramp_lines(&theme.neutral_darker, scss_var("neutral-dark")),
    )
}

fn render_tailwind(theme: &ColorTheme, settings: &DesignSettings, generated_at: &str) -> String {
    let primary_hex = theme.primary_hex();
    let comp_hex = theme.complementary_hex();
    let pick = |ramp: &[String], i: usize, fallback: &str| {
        ramp.get(i).map_or_else(|| fallback.to_string(), Clone::clone)
    };

    format!(
        "// DressCode Design System - Tailwind Config
// Generated at {generated_at}

/** @type {{import('tailwindcss').Config}} */
module.exports = {{
  theme: {{
    extend: {{
      colors: {{
        primary: {{
          DEFAULT: '{primary_hex}',
          light: '{primary_light}',
          dark: '{primary_dark}',
        }},
        complementary: {{
          DEFAULT: '{comp_hex}',
          light: '{comp_light}',
          dark: '{comp_dark}',
        }},
        tint: {{
{tints}
        }},
        shade: {{
{shades}
        }},
        neutral: {{
          light: {{
{nl}
          }},
          dark: {{
{nd}
          }},
        }},
      }},
      borderRadius: {{
        DEFAULT: '{radius}px',
      }},
    }},
  }},
}}
",
        primary_light = pick(&theme.tints, 2, &primary_hex),
        primary_dark = pick(&theme.shades, 2, &primary_hex),
        comp_light = pick(&theme.tints, 5, &comp_hex),
        comp_dark = pick(&theme.shades, 5, &comp_hex),
        tints = ramp_lines(&theme.tints, js_entry(10)),
        shades = ramp_lines(&theme.shades, js_entry(10)),
        nl = ramp_lines(&theme.neutral_lighter, js_entry(12)),
        nd = ramp_lines(&theme.neutral_darker, js_entry(12)),
        radius = settings.border_radius,
    )
}

// ---------------------------------------------------------------------------
// JSON tokens
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenDocument<'a> {
    #[serde(rename = "$schema")]
    schema: &'static str,
    name: &'static str,
    generated_at: &'a str,
    color: ColorTokens,
    spacing: SpacingTokens,
    settings: SettingsTokens,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ColorTokens {
    primary: BaseColorToken,
    complementary: BaseColorToken,
    tints: BTreeMap<String, String>,
    shades: BTreeMap<String, String>,
    neutral_lighter: BTreeMap<String, String>,
    neutral_darker: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct BaseColorToken {
    hsl: HslToken,
    hex: String,
}

#[derive(Serialize)]
struct HslToken {
    h: u16,
    s: u8,
    l: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpacingTokens {
    border_radius: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingsTokens {
    button_text_color: ButtonTextColor,
    mode: ColorMode,
}

impl BaseColorToken {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn new(hsl: Hsl) -> Self {
        let r = hsl.rounded();
        Self {
            hsl: HslToken {
                h: r.h as u16,
                s: r.s as u8,
                l: r.l as u8,
            },
            hex: hsl.to_hex(),
        }
    }
}

fn ramp_map(ramp: &[String]) -> BTreeMap<String, String> {
    ramp.iter()
        .enumerate()
        .map(|(i, color)| (stop_key(i).to_string(), color.clone()))
        .collect()
}

fn render_json(
    theme: &ColorTheme,
    settings: &DesignSettings,
    generated_at: &str,
) -> Result<String, ExportError> {
    let doc = TokenDocument {
        schema: TOKEN_SCHEMA,
        name: SYSTEM_NAME,
        generated_at,
        color: ColorTokens {
            primary: BaseColorToken::new(theme.primary),
            complementary: BaseColorToken::new(theme.complementary),
            tints: ramp_map(&theme.tints),
            shades: ramp_map(&theme.shades),
            neutral_lighter: ramp_map(&theme.neutral_lighter),
            neutral_darker: ramp_map(&theme.neutral_darker),
        },
        spacing: SpacingTokens {
            border_radius: settings.border_radius,
        },
        settings: SettingsTokens {
            button_text_color: settings.button_text_color,
            mode: settings.mode,
        },
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
