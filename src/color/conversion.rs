//! Color space conversion utilities
//!
//! Provides conversions between the representations a color crosses on its way
//! through the crate:
//! - Hex strings (`#RRGGBB`, case-insensitive, optional `#`)
//! - 8-bit RGB triples
//! - HSL (hue in degrees, saturation and lightness in percent)
//!
//! Distances are Euclidean in RGB space. This is not perceptually uniform.

use std::fmt;
use std::str::FromStr;

use palette::encoding::Srgb as SrgbEncoding;
use palette::{FromColor, Hsl as PaletteHsl, Srgb};
use serde::{Deserialize, Serialize};

use crate::{ColorError, Result};

/// An opaque 8-bit sRGB color
///
/// Serializes as its lowercase hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL coordinates: hue in degrees [0, 360), saturation and lightness in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string
    pub fn from_hex(hex: &str) -> Result<Self> {
        hex_to_rgb(hex)
    }

    /// Lowercase `#rrggbb` representation
    pub fn to_hex(self) -> String {
        rgb_to_hex(f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl.h, hsl.s, hsl.l)
    }

    /// HSL saturation in percent
    pub fn saturation(self) -> f64 {
        self.to_hsl().s
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        hex_to_rgb(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Parse a hex color string to RGB
///
/// Accepts exactly six hex digits after an optional `#`.
///
/// # Errors
///
/// Returns `ColorError::InvalidColorFormat` for any other input
pub fn hex_to_rgb(hex: &str) -> Result<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_color(hex));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::invalid_color(hex))
    };

    Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Encode RGB channels as a lowercase hex string
///
/// Each channel is clamped to [0, 255] and rounded before encoding.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Color::new(to_channel(r), to_channel(g), to_channel(b)).to_string()
}

fn to_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

/// Double-precision HSL over the sRGB encoding
type HslF64 = PaletteHsl<SrgbEncoding, f64>;

/// Convert 8-bit RGB to HSL
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let srgb: Srgb<f64> = Srgb::<u8>::new(r, g, b).into_format();
    let hsl = HslF64::from_color(srgb);

    Hsl {
        h: hsl.hue.into_positive_degrees().rem_euclid(360.0),
        s: hsl.saturation * 100.0,
        l: hsl.lightness * 100.0,
    }
}

/// Convert HSL to 8-bit RGB
///
/// Hue is taken modulo 360. Saturation and lightness are clamped to [0, 100].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Color {
    let hsl = HslF64::new(
        h.rem_euclid(360.0),
        s.clamp(0.0, 100.0) / 100.0,
        l.clamp(0.0, 100.0) / 100.0,
    );
    let srgb = Srgb::<f64>::from_color(hsl);

    Color::new(
        to_channel(srgb.red * 255.0),
        to_channel(srgb.green * 255.0),
        to_channel(srgb.blue * 255.0),
    )
}

/// Euclidean distance in RGB space, in [0, ~441.7]
pub fn distance(a: Color, b: Color) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Weighted luma in [0, 1]
pub fn relative_luminance(color: Color) -> f64 {
    (0.299 * f64::from(color.r) + 0.587 * f64::from(color.g) + 0.114 * f64::from(color.b)) / 255.0
}

pub fn is_light(color: Color) -> bool {
    relative_luminance(color) > 0.5
}

/// Black on light backgrounds, white on dark ones
pub fn contrast_color(background: Color) -> Color {
    if is_light(background) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}
