//! Property-based invariant tests for the color space converter.
//!
//! Verifies:
//! 1. hex → HSL → hex reproduces every 24-bit color (within ±1 per channel)
//! 2. normalize_hex output is always canonical and idempotent
//! 3. Hsl::new keeps h in [0, 360) and s/l in [0, 100] for any finite input
//! 4. 3-digit shorthand expands nibble-by-nibble

use dc_color::{Hsl, Rgb, hex_to_hsl, hsl_to_hex, normalize_hex};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn channel_delta(a: u8, b: u8) -> u8 {
    a.abs_diff(b)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Roundtrip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hex_hsl_roundtrip(rgb in arb_rgb()) {
        let hex = rgb.to_hex();
        let hsl = hex_to_hsl(&hex).expect("own output parses");
        let back = Rgb::from_hex(&hsl_to_hex(hsl.h, hsl.s, hsl.l)).expect("parses");
        prop_assert!(channel_delta(rgb.r, back.r) <= 1, "{} -> {}", hex, back);
        prop_assert!(channel_delta(rgb.g, back.g) <= 1, "{} -> {}", hex, back);
        prop_assert!(channel_delta(rgb.b, back.b) <= 1, "{} -> {}", hex, back);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. normalize_hex
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalize_is_canonical(rgb in arb_rgb(), lower in any::<bool>(), hash in any::<bool>()) {
        let mut input = format!("{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b);
        if !lower {
            input = input.to_uppercase();
        }
        if hash {
            input.insert(0, '#');
        }
        let normalized = normalize_hex(&input).expect("valid hex");
        prop_assert_eq!(&normalized, &rgb.to_hex());
        prop_assert_eq!(normalize_hex(&normalized), Some(normalized.clone()));
    }

    #[test]
    fn normalize_rejects_wrong_lengths(s in "[0-9a-f]{0,10}") {
        prop_assume!(s.len() != 3 && s.len() != 6);
        prop_assert_eq!(normalize_hex(&s), None);
    }

    #[test]
    fn normalize_never_panics(s in ".{0,12}") {
        let _ = normalize_hex(&s);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Hsl::new range invariant
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hsl_components_in_range(h in -1.0e6f64..1.0e6, s in -500.0f64..500.0, l in -500.0f64..500.0) {
        let c = Hsl::new(h, s, l);
        prop_assert!((0.0..360.0).contains(&c.h), "h = {}", c.h);
        prop_assert!((0.0..=100.0).contains(&c.s), "s = {}", c.s);
        prop_assert!((0.0..=100.0).contains(&c.l), "l = {}", c.l);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Shorthand expansion
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn shorthand_expands(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
        let short = format!("#{r:x}{g:x}{b:x}");
        let long = format!("#{r:X}{r:X}{g:X}{g:X}{b:X}{b:X}");
        prop_assert_eq!(normalize_hex(&short), Some(long));
    }
}
