//! Color harmony and tonal ramp module
//!
//! Derives related colors from a single seed by moving it around the HSL
//! color wheel (harmonies) or along its lightness axis (ramps).

pub mod ramp;
pub mod wheel;

pub use ramp::{generate_palette, generate_palette_hex};
pub use wheel::{generate_harmonies, generate_harmonies_hex, HarmonyKind, HarmonySet};
