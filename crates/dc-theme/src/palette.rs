//! Palette generation: from one primary color to four tonal ramps.
//!
//! Every ramp is indexed by the same percentage ladder ([`RAMP_STOPS`]), so
//! `tints[i]`, `shades[i]`, `neutral_lighter[i]` and `neutral_darker[i]` all
//! describe the same step away from the base color.
//!
//! - **Tints / shades** mix the base toward white / black per RGB channel.
//! - **Neutrals** keep the base hue but walk lightness toward the anchor while
//!   bleeding saturation off to gray, so the far end of the ramp is a true
//!   white or black instead of a pastel.
//!
//! All generators are pure. Malformed base hex yields an empty ramp.

use dc_color::{Hsl, Rgb, normalize_hue};
use serde::{Deserialize, Serialize};

/// The nine ramp stops, in percent away from the base color.
pub const RAMP_STOPS: [f64; 9] = [5.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

/// The hue directly opposite `hue` on the color wheel.
#[inline]
#[must_use]
pub fn complementary_hue(hue: f64) -> f64 {
    normalize_hue(hue + 180.0)
}

// ---------------------------------------------------------------------------
// Anchor
// ---------------------------------------------------------------------------

/// The endpoint a neutral ramp converges on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    White,
    Black,
}

impl Anchor {
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::White => Rgb::WHITE,
            Self::Black => Rgb::BLACK,
        }
    }

    /// HSL lightness of the anchor, in percent.
    #[must_use]
    pub const fn lightness(self) -> f64 {
        match self {
            Self::White => 100.0,
            Self::Black => 0.0,
        }
    }

    /// Accepts `#FFFFFF` / `#000000` in any hex spelling (`fff`, `#000`, …).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        match Rgb::from_hex(hex)? {
            Rgb::WHITE => Some(Self::White),
            Rgb::BLACK => Some(Self::Black),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Ramp generators
// ---------------------------------------------------------------------------

/// Mix `base_hex` toward white by each percentage.
///
/// Per channel: `c + (255 - c) * p / 100`. Output order and length follow
/// `percentages`. Percentages outside `[0, 100]` are clamped.
///
/// ```
/// use dc_theme::palette::generate_tints;
///
/// assert_eq!(generate_tints("#3B82F6", &[0.0, 100.0]), ["#3B82F6", "#FFFFFF"]);
/// ```
#[must_use]
pub fn generate_tints(base_hex: &str, percentages: &[f64]) -> Vec<String> {
    mix_ramp(base_hex, percentages, Rgb::WHITE)
}

/// Mix `base_hex` toward black by each percentage.
///
/// Per channel: `c * (1 - p / 100)`.
#[must_use]
pub fn generate_shades(base_hex: &str, percentages: &[f64]) -> Vec<String> {
    mix_ramp(base_hex, percentages, Rgb::BLACK)
}

/// Walk `base_hex` toward `anchor` in HSL, desaturating as it goes.
///
/// For stop `p`, lightness moves `p%` of the way to the anchor's lightness
/// and saturation drops by `p%`. Hue is untouched. `p = 0` reproduces the
/// base exactly; `p = 100` is exactly the anchor.
#[must_use]
pub fn generate_neutrals(base_hex: &str, percentages: &[f64], anchor: Anchor) -> Vec<String> {
    let Some(base) = Rgb::from_hex(base_hex) else {
        return Vec::new();
    };
    let hsl = base.to_hsl();
    let target_l = anchor.lightness();

    percentages
        .iter()
        .map(|&p| {
            let t = unit(p);
            let l = (target_l - hsl.l).mul_add(t, hsl.l);
            let s = hsl.s * (1.0 - t);
            Hsl::new(hsl.h, s, l).to_hex()
        })
        .collect()
}

fn mix_ramp(base_hex: &str, percentages: &[f64], target: Rgb) -> Vec<String> {
    let Some(base) = Rgb::from_hex(base_hex) else {
        return Vec::new();
    };
    percentages
        .iter()
        .map(|&p| base.mix(target, unit(p)).to_hex())
        .collect()
}

/// Percent → `[0, 1]`, clamped. NaN counts as 0.
fn unit(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 100.0) / 100.0 }
}

// ---------------------------------------------------------------------------
// ColorTheme
// ---------------------------------------------------------------------------

/// The full derived palette for a primary/complementary pair.
///
/// A pure projection: rebuild it with [`ColorTheme::derive`] whenever either
/// color changes, never edit the ramps in place. All four ramps are derived
/// from the primary color and are index-aligned with [`RAMP_STOPS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTheme {
    pub primary: Hsl,
    pub complementary: Hsl,
    pub tints: Vec<String>,
    pub shades: Vec<String>,
    pub neutral_lighter: Vec<String>,
    pub neutral_darker: Vec<String>,
}

impl ColorTheme {
    #[must_use]
    pub fn derive(primary: Hsl, complementary: Hsl) -> Self {
        let base = primary.to_hex();
        Self {
            primary,
            complementary,
            tints: generate_tints(&base, &RAMP_STOPS),
            shades: generate_shades(&base, &RAMP_STOPS),
            neutral_lighter: generate_neutrals(&base, &RAMP_STOPS, Anchor::White),
            neutral_darker: generate_neutrals(&base, &RAMP_STOPS, Anchor::Black),
        }
    }

    #[must_use]
    pub fn primary_hex(&self) -> String {
        self.primary.to_hex()
    }

    #[must_use]
    pub fn complementary_hex(&self) -> String {
        self.complementary.to_hex()
    }

    /// The darkest stop of the dark neutral ramp, used as a page background.
    ///
    /// Falls back to black if the ramp is somehow empty.
    #[must_use]
    pub fn darkest_neutral(&self) -> String {
        self.neutral_darker
            .last()
            .cloned()
            .unwrap_or_else(|| Rgb::BLACK.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── complementary_hue ───────────────────────────────────────────

    #[test]
    fn complement_of_brand_blue() {
        assert_eq!(complementary_hue(217.0), 37.0);
    }

    #[test]
    fn complement_wraps() {
        assert_eq!(complementary_hue(200.0), 20.0);
        assert_eq!(complementary_hue(0.0), 180.0);
        assert_eq!(complementary_hue(-90.0), 90.0);
    }

    #[test]
    fn complement_is_involution() {
        for h in [0.0, 37.5, 114.0, 180.0, 359.0] {
            assert_eq!(complementary_hue(complementary_hue(h)), h);
        }
    }

    // ── Tints / shades ──────────────────────────────────────────────

    #[test]
    fn tints_follow_channel_formula() {
        // 0x40 = 64: 64 + 191 * 0.5 = 159.5 -> 160 (0xA0)
        assert_eq!(generate_tints("#400000", &[50.0]), ["#A08080"]);
    }

    #[test]
    fn shades_follow_channel_formula() {
        // 200 * 0.8 = 160 (0xA0), 100 * 0.8 = 80 (0x50)
        assert_eq!(generate_shades("#C86464", &[20.0]), ["#A05050"]);
    }

    #[test]
    fn ramp_endpoints() {
        assert_eq!(generate_tints("#3B82F6", &[0.0]), ["#3B82F6"]);
        assert_eq!(generate_tints("#3B82F6", &[100.0]), ["#FFFFFF"]);
        assert_eq!(generate_shades("#3B82F6", &[0.0]), ["#3B82F6"]);
        assert_eq!(generate_shades("#3B82F6", &[100.0]), ["#000000"]);
    }

    #[test]
    fn ramp_preserves_order_and_length() {
        let ramp = generate_tints("#3B82F6", &[90.0, 5.0, 50.0]);
        assert_eq!(ramp.len(), 3);
        assert_eq!(ramp[1], generate_tints("#3B82F6", &[5.0])[0]);
    }

    #[test]
    fn out_of_range_percentages_clamp() {
        assert_eq!(generate_tints("#3B82F6", &[150.0, -10.0]), ["#FFFFFF", "#3B82F6"]);
    }

    #[test]
    fn shorthand_base_is_accepted() {
        assert_eq!(generate_shades("#fff", &[0.0]), ["#FFFFFF"]);
    }

    #[test]
    fn invalid_base_gives_empty_ramp() {
        assert!(generate_tints("nope", &RAMP_STOPS).is_empty());
        assert!(generate_shades("#12345", &RAMP_STOPS).is_empty());
        assert!(generate_neutrals("", &RAMP_STOPS, Anchor::White).is_empty());
    }

    #[test]
    fn tints_get_lighter() {
        let ramp = generate_tints("#3B82F6", &RAMP_STOPS);
        let lightness: Vec<f64> = ramp
            .iter()
            .map(|h| Rgb::from_hex(h).unwrap().to_hsl().l)
            .collect();
        assert!(lightness.windows(2).all(|w| w[0] <= w[1]), "{lightness:?}");
    }

    // ── Neutrals ────────────────────────────────────────────────────

    #[test]
    fn neutral_endpoints() {
        let base = "#3B82F6";
        assert_eq!(generate_neutrals(base, &[0.0], Anchor::White), [base]);
        assert_eq!(generate_neutrals(base, &[100.0], Anchor::White), ["#FFFFFF"]);
        assert_eq!(generate_neutrals(base, &[0.0], Anchor::Black), [base]);
        assert_eq!(generate_neutrals(base, &[100.0], Anchor::Black), ["#000000"]);
    }

    #[test]
    fn neutrals_desaturate() {
        let base = Rgb::from_hex("#3B82F6").unwrap().to_hsl();
        let ramp = generate_neutrals("#3B82F6", &[50.0], Anchor::Black);
        let mid = Rgb::from_hex(&ramp[0]).unwrap().to_hsl();
        assert!(mid.s < base.s, "saturation should drop: {} vs {}", mid.s, base.s);
        assert!(mid.l < base.l, "lightness should drop: {} vs {}", mid.l, base.l);
    }

    #[test]
    fn neutrals_keep_hue() {
        let ramp = generate_neutrals("#3B82F6", &[30.0], Anchor::White);
        let hsl = Rgb::from_hex(&ramp[0]).unwrap().to_hsl();
        assert!((hsl.h - 217.0).abs() < 3.0, "hue drifted: {}", hsl.h);
    }

    #[test]
    fn anchor_from_hex() {
        assert_eq!(Anchor::from_hex("#FFFFFF"), Some(Anchor::White));
        assert_eq!(Anchor::from_hex("000"), Some(Anchor::Black));
        assert_eq!(Anchor::from_hex("#808080"), None);
        assert_eq!(Anchor::from_hex("junk"), None);
    }

    // ── ColorTheme ──────────────────────────────────────────────────

    #[test]
    fn theme_ramps_are_index_aligned() {
        let theme = ColorTheme::derive(Hsl::new(114.0, 100.0, 58.0), Hsl::new(294.0, 100.0, 58.0));
        assert_eq!(theme.tints.len(), RAMP_STOPS.len());
        assert_eq!(theme.shades.len(), RAMP_STOPS.len());
        assert_eq!(theme.neutral_lighter.len(), RAMP_STOPS.len());
        assert_eq!(theme.neutral_darker.len(), RAMP_STOPS.len());
    }

    #[test]
    fn theme_ramps_derive_from_primary() {
        let primary = Hsl::new(217.0, 91.0, 60.0);
        let theme = ColorTheme::derive(primary, Hsl::new(37.0, 91.0, 60.0));
        assert_eq!(theme.tints, generate_tints(&primary.to_hex(), &RAMP_STOPS));
        assert_eq!(theme.primary_hex(), primary.to_hex());
    }

    #[test]
    fn theme_is_deterministic() {
        let a = ColorTheme::derive(Hsl::new(10.0, 50.0, 50.0), Hsl::new(190.0, 50.0, 50.0));
        let b = ColorTheme::derive(Hsl::new(10.0, 50.0, 50.0), Hsl::new(190.0, 50.0, 50.0));
        assert_eq!(a, b);
    }

    #[test]
    fn darkest_neutral_is_last_stop() {
        let theme = ColorTheme::derive(Hsl::new(217.0, 91.0, 60.0), Hsl::new(37.0, 91.0, 60.0));
        assert_eq!(theme.darkest_neutral(), theme.neutral_darker[8]);
    }
}
