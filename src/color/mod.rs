//! Color representation and conversion module
//!
//! This module holds the color value types, the hex/RGB/HSL conversions,
//! RGB distance and luminance helpers, and basic color naming.

pub mod conversion;
pub mod names;

pub use conversion::{
    contrast_color, distance, hex_to_rgb, hsl_to_rgb, is_light, relative_luminance, rgb_to_hex,
    rgb_to_hsl, Color, Hsl,
};
pub use names::color_name;
