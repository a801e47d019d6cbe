//! Basic color naming for swatch labels

use super::conversion::hex_to_rgb;
use super::Color;

/// Label used for anything outside the table
pub const UNKNOWN: &str = "Unknown";

const NAMED_COLORS: [(Color, &str); 20] = [
    (Color::new(0xFF, 0x00, 0x00), "Red"),
    (Color::new(0x00, 0xFF, 0x00), "Green"),
    (Color::new(0x00, 0x00, 0xFF), "Blue"),
    (Color::new(0xFF, 0xFF, 0x00), "Yellow"),
    (Color::new(0xFF, 0x00, 0xFF), "Magenta"),
    (Color::new(0x00, 0xFF, 0xFF), "Cyan"),
    (Color::new(0xFF, 0xA5, 0x00), "Orange"),
    (Color::new(0x80, 0x00, 0x80), "Purple"),
    (Color::new(0xFF, 0xC0, 0xCB), "Pink"),
    (Color::new(0xA5, 0x2A, 0x2A), "Brown"),
    (Color::new(0x00, 0x00, 0x00), "Black"),
    (Color::new(0xFF, 0xFF, 0xFF), "White"),
    (Color::new(0x80, 0x80, 0x80), "Gray"),
    (Color::new(0x00, 0x80, 0x80), "Teal"),
    (Color::new(0x4B, 0x00, 0x82), "Indigo"),
    (Color::new(0xEE, 0x82, 0xEE), "Violet"),
    (Color::new(0xFF, 0x14, 0x93), "Deep Pink"),
    (Color::new(0x32, 0xCD, 0x32), "Lime Green"),
    (Color::new(0xFF, 0xD7, 0x00), "Gold"),
    (Color::new(0xDC, 0x14, 0x3C), "Crimson"),
];

/// Exact-match name of a color, or `"Unknown"`
pub fn name_of(color: Color) -> &'static str {
    NAMED_COLORS
        .iter()
        .find(|(named, _)| *named == color)
        .map_or(UNKNOWN, |&(_, name)| name)
}

/// Name of a `#RRGGBB` string; anything else is `"Unknown"`
pub fn color_name(hex: &str) -> &'static str {
    if !hex.starts_with('#') {
        return UNKNOWN;
    }
    hex_to_rgb(hex).map_or(UNKNOWN, name_of)
}
