// File: ./src/color_utils.rs

// Colour mappings for task cards and budget figures.
// No GUI dependencies, so the CLI, the mobile binding and tests can share it.

use crate::model::{Emphasis, Priority};

/// Brand accent used for the logo badge and primary buttons.
pub const BRAND_ACCENT: &str = "#EF2324";

/// Side bar colour of a task card, or `None` when the bar is transparent.
/// Components are in [0.0, 1.0].
pub fn emphasis_rgb(emphasis: Emphasis) -> Option<(f32, f32, f32)> {
    match emphasis {
        Emphasis::Highlighted => Some((1.0, 0.0, 0.0)),
        Emphasis::Neutral => None,
        Emphasis::Muted => Some((0.53, 0.53, 0.53)),
    }
}

/// Text colour of the priority tag, adapted to the theme so normal tags stay
/// readable.
pub fn priority_tag_rgb(priority: Priority, is_dark_theme: bool) -> (f32, f32, f32) {
    match (priority, is_dark_theme) {
        (Priority::Urgent, _) => (1.0, 0.0, 0.0),
        (Priority::Normal, true) => (1.0, 1.0, 1.0),
        (Priority::Normal, false) => (0.0, 0.0, 0.0),
    }
}

/// Colour of a budget variance: red when over budget, green otherwise.
pub fn variance_rgb(variance: i64) -> (f32, f32, f32) {
    if variance < 0 {
        (1.0, 0.2, 0.2)
    } else {
        (0.3, 0.85, 0.4)
    }
}

/// Determines if text on top of this color should be black or white.
/// Input components are expected in [0.0, 1.0] range.
pub fn is_dark(r: f32, g: f32, b: f32) -> bool {
    // Perceptual luminance approximation
    let brightness = 0.299 * r + 0.587 * g + 0.114 * b;
    brightness < 0.5
}

/// Parse a hex color string like "#RRGGBB" or "RRGGBB" into u8 tuple.
pub fn parse_hex_to_u8(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Float colour to "#RRGGBB".
pub fn rgb_to_hex(rgb: (f32, f32, f32)) -> String {
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02X}{:02X}{:02X}", to_u8(rgb.0), to_u8(rgb.1), to_u8(rgb.2))
}
