//! Named preset colors, one-click starting points for a palette.
//!
//! Each preset is just a primary hex plus some labelling. Applying one goes
//! through the same path as typing the hex by hand, so the complementary
//! color and all ramps are re-derived from it.

/// A named primary color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    /// Primary color, `#RRGGBB`.
    pub primary: &'static str,
    pub description: &'static str,
}

const fn preset(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    primary: &'static str,
    description: &'static str,
) -> ColorPreset {
    ColorPreset {
        id,
        name,
        category,
        primary,
        description,
    }
}

const BRAND: &str = "Brand Colors";
const MATERIAL: &str = "Material Design";
const SCHEMES: &str = "Popular Schemes";

/// Every builtin preset, grouped by category in display order.
pub const PRESETS: &[ColorPreset] = &[
    preset("brand-blue", "Brand Blue", BRAND, "#3B82F6", "Modern blue for tech brands"),
    preset("brand-purple", "Brand Purple", BRAND, "#8B5CF6", "Creative purple for design brands"),
    preset("brand-green", "Brand Green", BRAND, "#10B981", "Fresh green for eco brands"),
    preset("brand-red", "Brand Red", BRAND, "#EF4444", "Bold red for action brands"),
    preset("brand-orange", "Brand Orange", BRAND, "#F59E0B", "Energetic orange for vibrant brands"),
    preset("brand-pink", "Brand Pink", BRAND, "#EC4899", "Playful pink for lifestyle brands"),
    preset("material-blue", "Material Blue", MATERIAL, "#2196F3", "Google Material Design blue"),
    preset("material-indigo", "Material Indigo", MATERIAL, "#3F51B5", "Google Material Design indigo"),
    preset("material-teal", "Material Teal", MATERIAL, "#009688", "Google Material Design teal"),
    preset("material-amber", "Material Amber", MATERIAL, "#FFC107", "Google Material Design amber"),
    preset(
        "material-deep-orange",
        "Material Deep Orange",
        MATERIAL,
        "#FF5722",
        "Google Material Design deep orange",
    ),
    preset("monochrome-blue", "Monochrome Blue", SCHEMES, "#4A90E2", "Monochromatic blue palette"),
    preset(
        "complementary-orange",
        "Complementary Orange",
        SCHEMES,
        "#FF6B35",
        "Orange-blue complementary scheme",
    ),
    preset("triadic-green", "Triadic Green", SCHEMES, "#4ECDC4", "Green-purple-orange triadic scheme"),
    preset(
        "analogous-purple",
        "Analogous Purple",
        SCHEMES,
        "#9B59B6",
        "Purple-blue-pink analogous scheme",
    ),
];

/// Look up a preset by id.
///
/// Returns `None` if the id is not recognized.
#[must_use]
pub fn preset_by_id(id: &str) -> Option<&'static ColorPreset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Presets grouped by category, categories in first-appearance order.
#[must_use]
pub fn presets_by_category() -> Vec<(&'static str, Vec<&'static ColorPreset>)> {
    let mut groups: Vec<(&'static str, Vec<&'static ColorPreset>)> = Vec::new();
    for p in PRESETS {
        match groups.iter_mut().find(|(cat, _)| *cat == p.category) {
            Some((_, members)) => members.push(p),
            None => groups.push((p.category, vec![p])),
        }
    }
    groups
}

/// List all preset ids.
pub fn preset_ids() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.id)
}
