//! Accessibility audit: the standard set of contrast checks for a theme.
//!
//! A theme is audited as it will actually be used: primary and complementary
//! as button fills (with the configured button text color), and as text or
//! link colors on the page's light and dark backgrounds. Failing checks can be
//! fed to [`suggestions`] for a nudged background.

use serde::{Deserialize, Serialize};

use crate::contrast::{Suggestion, WCAG_AA, WCAG_AAA, contrast_ratio, suggest_accessible_color};
use crate::palette::ColorTheme;
use crate::settings::DesignSettings;

const WHITE: &str = "#FFFFFF";
const BLACK: &str = "#000000";

/// How the foreground is used in a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Text,
    Button,
    Link,
}

/// One foreground/background pairing and its WCAG verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastCheck {
    pub foreground: String,
    pub background: String,
    pub contrast: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
    pub label: String,
    pub kind: CheckKind,
}

impl ContrastCheck {
    /// Score `foreground` on `background`. Malformed hex scores 1:1 and fails.
    #[must_use]
    pub fn evaluate(foreground: &str, background: &str, label: &str, kind: CheckKind) -> Self {
        let contrast = contrast_ratio(foreground, background).unwrap_or(1.0);
        Self {
            foreground: foreground.to_string(),
            background: background.to_string(),
            contrast,
            meets_aa: contrast >= WCAG_AA,
            meets_aaa: contrast >= WCAG_AAA,
            label: label.to_string(),
            kind,
        }
    }

    /// `"AAA"`, `"AA"` or `"Fail"`.
    #[must_use]
    pub const fn grade(&self) -> &'static str {
        if self.meets_aaa {
            "AAA"
        } else if self.meets_aa {
            "AA"
        } else {
            "Fail"
        }
    }
}

/// Run the seven standard checks against `theme`.
///
/// In light mode the light page background is white and the dark one is the
/// darkest neutral; in dark mode they shift to the darkest neutral and black.
#[must_use]
pub fn audit_theme(theme: &ColorTheme, settings: &DesignSettings) -> Vec<ContrastCheck> {
    let primary = theme.primary_hex();
    let comp = theme.complementary_hex();
    let darkest = theme.darkest_neutral();

    let (bg_light, bg_dark) = if settings.mode.is_dark() {
        (darkest.as_str(), BLACK)
    } else {
        (WHITE, darkest.as_str())
    };

    let primary_text = settings.button_text_color.text_for(&primary);
    let comp_text = settings.button_text_color.text_for(&comp);

    vec![
        ContrastCheck::evaluate(primary_text, &primary, "Primary Button", CheckKind::Button),
        ContrastCheck::evaluate(comp_text, &comp, "Complementary Button", CheckKind::Button),
        ContrastCheck::evaluate(&primary, bg_light, "Primary Text on Light", CheckKind::Text),
        ContrastCheck::evaluate(&comp, bg_light, "Complementary Text on Light", CheckKind::Text),
        ContrastCheck::evaluate(&primary, bg_dark, "Primary Text on Dark", CheckKind::Text),
        ContrastCheck::evaluate(&comp, bg_dark, "Complementary Text on Dark", CheckKind::Text),
        ContrastCheck::evaluate(&primary, bg_light, "Primary Link", CheckKind::Link),
    ]
}

/// Background suggestions for every check that fails AA.
///
/// Checks for which the bounded search finds nothing are left out.
#[must_use]
pub fn suggestions(checks: &[ContrastCheck]) -> Vec<(&ContrastCheck, Suggestion)> {
    checks
        .iter()
        .filter(|c| !c.meets_aa)
        .filter_map(|c| {
            suggest_accessible_color(&c.background, &c.foreground, WCAG_AA).map(|s| (c, s))
        })
        .collect()
}

/// Pass counts over a set of checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceScore {
    pub total: usize,
    pub passing_aa: usize,
    pub passing_aaa: usize,
    /// Whole percent, rounded.
    pub percentage_aa: u32,
    /// Whole percent, rounded.
    pub percentage_aaa: u32,
}

impl ComplianceScore {
    #[must_use]
    pub fn from_checks(checks: &[ContrastCheck]) -> Self {
        let total = checks.len();
        let passing_aa = checks.iter().filter(|c| c.meets_aa).count();
        let passing_aaa = checks.iter().filter(|c| c.meets_aaa).count();
        Self {
            total,
            passing_aa,
            passing_aaa,
            percentage_aa: percent(passing_aa, total),
            percentage_aaa: percent(passing_aaa, total),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}
