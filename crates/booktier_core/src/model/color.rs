//! Tier color helpers.
//!
//! # Responsibility
//! - Derive the light/dark contrast decision the rendering layer uses to
//!   pick readable text on a tier row.

/// YIQ weight numerator above which a color counts as light.
///
/// Equals luminance 160 on the 0-255 scale, kept scaled by 1000 so the
/// comparison stays exact in integer math.
const LIGHT_WEIGHT_THRESHOLD: u32 = 160_000;

/// Returns whether a `#rrggbb` color is light enough to need dark text.
///
/// Uses the YIQ luminance formula `(299 r + 587 g + 114 b) / 1000`.
/// Malformed color strings resolve as not-light rather than failing.
pub fn is_color_light(hex_color: &str) -> bool {
    let Some((r, g, b)) = parse_hex_rgb(hex_color) else {
        return false;
    };
    let weight = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    weight > LIGHT_WEIGHT_THRESHOLD
}

fn parse_hex_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}
