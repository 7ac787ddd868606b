//! WCAG 2.x contrast evaluation.
//!
//! - Relative luminance: sRGB channel linearisation (0.03928 threshold) and
//!   the `0.2126 R + 0.7152 G + 0.0722 B` weighted sum.
//! - Contrast ratio: `(L_lighter + 0.05) / (L_darker + 0.05)`, in `[1, 21]`.
//! - AA passes at 4.5:1, AAA at 7:1 (normal-size text).
//!
//! The math is total over [`Rgb`]. The hex-string entry points parse first and
//! degrade gracefully on malformed input instead of panicking.

use dc_color::{Rgb, hex_to_hsl};
use serde::{Deserialize, Serialize};

/// Reference dark text color (Tailwind gray-900).
pub const DARK_TEXT: &str = "#111827";

/// Reference light text color.
pub const LIGHT_TEXT: &str = "#FFFFFF";

const DARK_TEXT_RGB: Rgb = Rgb::new(0x11, 0x18, 0x27);
const LIGHT_TEXT_RGB: Rgb = Rgb::WHITE;

/// Minimum contrast for WCAG AA, normal text.
pub const WCAG_AA: f64 = 4.5;

/// Minimum contrast for WCAG AAA, normal text.
pub const WCAG_AAA: f64 = 7.0;

/// Lightness steps tried by [`suggest_accessible_color`], lightening first.
const LIGHTEN_FIRST: [f64; 8] = [20.0, 15.0, 10.0, 5.0, -5.0, -10.0, -15.0, -20.0];

/// Lightness steps tried by [`suggest_accessible_color`], darkening first.
const DARKEN_FIRST: [f64; 8] = [-20.0, -15.0, -10.0, -5.0, 5.0, 10.0, 15.0, 20.0];

// ---------------------------------------------------------------------------
// Luminance and ratio
// ---------------------------------------------------------------------------

/// Remove the sRGB gamma from one channel in `[0, 1]`.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in `[0, 1]`.
#[must_use]
pub fn luminance(rgb: Rgb) -> f64 {
    let (r, g, b) = rgb.to_unit();
    0.2126f64.mul_add(
        srgb_to_linear(r),
        0.7152f64.mul_add(srgb_to_linear(g), 0.0722 * srgb_to_linear(b)),
    )
}

/// Contrast ratio between two colors, in `[1, 21]`, independent of
/// argument order.
#[must_use]
pub fn ratio(a: Rgb, b: Rgb) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Relative luminance of a hex color. `None` if the hex is malformed.
#[must_use]
pub fn relative_luminance(hex: &str) -> Option<f64> {
    Rgb::from_hex(hex).map(luminance)
}

/// Contrast ratio between two hex colors. `None` if either is malformed.
///
/// ```
/// use dc_theme::contrast::contrast_ratio;
///
/// let r = contrast_ratio("#FFFFFF", "#000000").unwrap();
/// assert!((r - 21.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    Some(ratio(Rgb::from_hex(a)?, Rgb::from_hex(b)?))
}

/// Whether `fg` on `bg` reaches 4.5:1. Malformed input never passes.
#[must_use]
pub fn meets_wcag_aa(fg: &str, bg: &str) -> bool {
    contrast_ratio(fg, bg).is_some_and(|r| r >= WCAG_AA)
}

/// Whether `fg` on `bg` reaches 7:1. Malformed input never passes.
#[must_use]
pub fn meets_wcag_aaa(fg: &str, bg: &str) -> bool {
    contrast_ratio(fg, bg).is_some_and(|r| r >= WCAG_AAA)
}

// ---------------------------------------------------------------------------
// Text tone
// ---------------------------------------------------------------------------

/// Which of the two reference text colors to put on a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTone {
    Dark,
    Light,
}

impl TextTone {
    /// The reference hex for this tone.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Dark => DARK_TEXT,
            Self::Light => LIGHT_TEXT,
        }
    }
}

/// Pick whichever reference text color contrasts more with `bg`.
///
/// Dark is evaluated first and wins ties. Malformed `bg` falls back to
/// [`TextTone::Dark`].
#[must_use]
pub fn accessible_text_color(bg: &str) -> TextTone {
    let Some(bg) = Rgb::from_hex(bg) else {
        return TextTone::Dark;
    };
    accessible_text_tone(bg)
}

/// [`accessible_text_color`] over a parsed color.
#[must_use]
pub fn accessible_text_tone(bg: Rgb) -> TextTone {
    let dark = ratio(DARK_TEXT_RGB, bg);
    let light = ratio(LIGHT_TEXT_RGB, bg);
    if dark >= light {
        TextTone::Dark
    } else {
        TextTone::Light
    }
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

/// A background tweak that brings a failing pair up to the target ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The background as passed in.
    pub original: String,
    /// The adjusted background, `#RRGGBB`.
    pub suggested: String,
    /// Human-readable description, e.g. `"Darken background by 10%"`.
    pub reason: String,
    /// New ratio minus old ratio.
    pub improvement: f64,
}

/// Search for a background lightness that makes `fg` readable on `bg`.
///
/// Returns `None` when the pair already meets `target_ratio`, when either
/// input is malformed, or when none of the fixed steps (±5..±20 lightness, in
/// steps of 5) gets there. This is a bounded greedy search: when dark text
/// reads better on `bg` than white does, lightening steps are tried first,
/// otherwise darkening steps. The first step that passes wins.
#[must_use]
pub fn suggest_accessible_color(bg: &str, fg: &str, target_ratio: f64) -> Option<Suggestion> {
    let bg_rgb = Rgb::from_hex(bg)?;
    let fg_rgb = Rgb::from_hex(fg)?;

    let current = ratio(fg_rgb, bg_rgb);
    if current >= target_ratio {
        return None;
    }

    let hsl = hex_to_hsl(bg)?;
    let text_is_dark = ratio(DARK_TEXT_RGB, bg_rgb) > ratio(LIGHT_TEXT_RGB, bg_rgb);
    let steps = if text_is_dark {
        &LIGHTEN_FIRST
    } else {
        &DARKEN_FIRST
    };

    for &step in steps {
        let candidate = hsl.with_lightness(hsl.l + step).to_rgb();
        let new_ratio = ratio(fg_rgb, candidate);
        if new_ratio >= target_ratio {
            let verb = if step > 0.0 { "Lighten" } else { "Darken" };
            return Some(Suggestion {
                original: bg.to_string(),
                suggested: candidate.to_hex(),
                reason: format!("{verb} background by {}%", step.abs()),
                improvement: new_ratio - current,
            });
        }
    }

    tracing::trace!(bg, fg, target_ratio, "no lightness step reaches target contrast");
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert_eq!(relative_luminance("#000000"), Some(0.0));
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance("#FFFFFF").unwrap();
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = relative_luminance("#FF0000").unwrap();
        assert!(approx_eq(lum, 0.2126, 1e-9), "Red luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance("#00FF00").unwrap();
        assert!(approx_eq(lum, 0.7152, 1e-9), "Green luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        // sRGB 0x80 linearizes to ~0.216
        let lum = relative_luminance("#808080").unwrap();
        assert!(approx_eq(lum, 0.2158, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn linearisation_threshold() {
        // Below the knee the curve is linear.
        assert!(approx_eq(srgb_to_linear(0.03), 0.03 / 12.92, 1e-12));
        assert!(srgb_to_linear(0.5) > 0.2 && srgb_to_linear(0.5) < 0.22);
    }

    #[test]
    fn luminance_invalid_is_none() {
        assert_eq!(relative_luminance("#GGGGGG"), None);
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let r = contrast_ratio("#FFFFFF", "#000000").unwrap();
        assert!(approx_eq(r, 21.0, 1e-9), "B/W contrast: {r}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        assert_eq!(contrast_ratio("#3B82F6", "#3B82F6"), Some(1.0));
    }

    #[test]
    fn contrast_is_symmetric() {
        let ab = contrast_ratio("#CC3344", "#1A1A66").unwrap();
        let ba = contrast_ratio("#1A1A66", "#CC3344").unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn contrast_invalid_is_none() {
        assert_eq!(contrast_ratio("#FFF", "nope"), None);
        assert_eq!(contrast_ratio("", "#000"), None);
    }

    // ── AA / AAA ────────────────────────────────────────────────────

    #[test]
    fn white_on_black_passes_everything() {
        assert!(meets_wcag_aa("#FFFFFF", "#000000"));
        assert!(meets_wcag_aaa("#FFFFFF", "#000000"));
    }

    #[test]
    fn mid_gray_on_white_fails_aa() {
        // #777777 on white is ~4.48:1, just under the line.
        assert!(!meets_wcag_aa("#777777", "#FFFFFF"));
        assert!(meets_wcag_aa("#767676", "#FFFFFF"));
    }

    #[test]
    fn aa_but_not_aaa() {
        // #595959 on white is ~7.0:1; #666666 is ~5.7:1.
        assert!(meets_wcag_aa("#666666", "#FFFFFF"));
        assert!(!meets_wcag_aaa("#666666", "#FFFFFF"));
    }

    #[test]
    fn malformed_never_passes() {
        assert!(!meets_wcag_aa("#FFFFFF", "black"));
        assert!(!meets_wcag_aaa("white", "#000000"));
    }

    // ── accessible_text_color ───────────────────────────────────────

    #[test]
    fn dark_text_on_light_background() {
        assert_eq!(accessible_text_color("#FFFFFF"), TextTone::Dark);
        assert_eq!(accessible_text_color("#FFC107"), TextTone::Dark);
    }

    #[test]
    fn light_text_on_dark_background() {
        assert_eq!(accessible_text_color("#000000"), TextTone::Light);
        assert_eq!(accessible_text_color("#3F51B5"), TextTone::Light);
    }

    #[test]
    fn tone_hex() {
        assert_eq!(TextTone::Dark.hex(), "#111827");
        assert_eq!(TextTone::Light.hex(), "#FFFFFF");
    }

    #[test]
    fn malformed_background_falls_back_to_dark() {
        assert_eq!(accessible_text_color("???"), TextTone::Dark);
    }

    #[test]
    fn chosen_tone_has_higher_contrast() {
        for bg in ["#3B82F6", "#10B981", "#EF4444", "#808080", "#4ECDC4"] {
            let tone = accessible_text_color(bg);
            let other = match tone {
                TextTone::Dark => TextTone::Light,
                TextTone::Light => TextTone::Dark,
            };
            let chosen = contrast_ratio(tone.hex(), bg).unwrap();
            let rejected = contrast_ratio(other.hex(), bg).unwrap();
            assert!(chosen >= rejected, "{bg}: {chosen} < {rejected}");
        }
    }

    // ── suggest_accessible_color ────────────────────────────────────

    #[test]
    fn no_suggestion_when_already_passing() {
        assert_eq!(suggest_accessible_color("#000000", "#FFFFFF", WCAG_AA), None);
    }

    #[test]
    fn no_suggestion_for_malformed_input() {
        assert_eq!(suggest_accessible_color("#zzz", "#FFFFFF", WCAG_AA), None);
        assert_eq!(suggest_accessible_color("#000000", "", WCAG_AA), None);
    }

    #[test]
    fn white_text_on_mid_blue_darkens_background() {
        // White on #3B82F6 is ~3.7:1. Dark text reads better on this blue,
        // so the lightening steps go first and all fail; -5 falls short and
        // -10 is the first darkening step that passes.
        let s = suggest_accessible_color("#3B82F6", "#FFFFFF", WCAG_AA).unwrap();
        assert_eq!(s.original, "#3B82F6");
        assert_eq!(s.reason, "Darken background by 10%");
        assert!(s.improvement > 0.0);
        let new_ratio = contrast_ratio("#FFFFFF", &s.suggested).unwrap();
        assert!(new_ratio >= WCAG_AA, "suggested ratio {new_ratio}");
    }

    #[test]
    fn dark_text_on_yellow_lightens_first() {
        // Dark text on olive: the dark reference wins, so the
        // lightening steps are tried before darkening.
        let bg = "#8A8A00";
        assert_eq!(accessible_text_color(bg), TextTone::Dark);
        let s = suggest_accessible_color(bg, DARK_TEXT, WCAG_AAA).unwrap();
        assert!(s.reason.starts_with("Lighten"), "{}", s.reason);
        assert!(contrast_ratio(DARK_TEXT, &s.suggested).unwrap() >= WCAG_AAA);
    }

    #[test]
    fn unreachable_target_gives_none() {
        // Mid gray text on mid gray: ±20 lightness can't reach 21:1.
        assert_eq!(suggest_accessible_color("#808080", "#777777", 21.0), None);
    }
}
