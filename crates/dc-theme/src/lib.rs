//! # dc-theme: palette and accessibility engine
//!
//! Derives a complete design-system palette from a primary/complementary
//! color pair, scores it against WCAG contrast thresholds, and renders it as
//! design tokens.
//!
//! # Architecture
//!
//! ```text
//! primary Hsl + complementary Hsl
//!     │
//!     ▼
//! palette.rs:  tints, shades, neutral ramps (ColorTheme)
//!     │
//!     ├──▶ contrast.rs: luminance, ratio, AA/AAA, text tone, suggestions
//!     │        │
//!     │        ▼
//!     │    audit.rs:    the seven standard checks + compliance score
//!     │
//!     └──▶ export.rs:   CSS / SCSS / Tailwind / JSON tokens
//! ```
//!
//! `presets.rs` holds the named starting colors; `settings.rs` the knobs
//! (button text color, border radius, light/dark mode) that audits and
//! exports read.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness names are inherently similar.
#![allow(clippy::similar_names)]
// Export templates are one long format string per target.
#![allow(clippy::too_many_lines)]

pub mod audit;
pub mod contrast;
pub mod error;
pub mod export;
pub mod palette;
pub mod presets;
pub mod settings;

pub use audit::{CheckKind, ComplianceScore, ContrastCheck, audit_theme};
pub use contrast::{
    Suggestion, TextTone, accessible_text_color, contrast_ratio, meets_wcag_aa, meets_wcag_aaa,
    relative_luminance, suggest_accessible_color,
};
pub use error::{ExportError, ParseError};
pub use export::{ExportFormat, export_theme};
pub use palette::{
    Anchor, ColorTheme, RAMP_STOPS, complementary_hue, generate_neutrals, generate_shades,
    generate_tints,
};
pub use presets::{ColorPreset, preset_by_id};
pub use settings::{ButtonTextColor, ColorMode, DesignSettings};
