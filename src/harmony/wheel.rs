//! Color wheel harmonies
//!
//! Every harmony rotates the seed's hue and keeps its saturation and
//! lightness:
//! - Complementary: 180°
//! - Analogous: -30° and +30°
//! - Triadic: 120° and 240°
//! - Split-complementary: 150° and 210°
//! - Tetradic: 90°, 180° and 270°

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{Color, Hsl};
use crate::Result;

/// Harmony family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonyKind {
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
    Tetradic,
}

impl HarmonyKind {
    /// All harmony families in display order
    pub const ALL: [HarmonyKind; 5] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::SplitComplementary,
        Self::Tetradic,
    ];

    /// Hue rotations in degrees, in output order
    pub fn offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &[180.0],
            Self::Analogous => &[-30.0, 30.0],
            Self::Triadic => &[120.0, 240.0],
            Self::SplitComplementary => &[150.0, 210.0],
            Self::Tetradic => &[90.0, 180.0, 270.0],
        }
    }

    /// Short description for swatch sections
    pub fn description(self) -> &'static str {
        match self {
            Self::Complementary => "Opposite colors on the color wheel for high contrast",
            Self::Analogous => "Colors next to each other for harmonious looks",
            Self::Triadic => "Three colors equally spaced for balanced combinations",
            Self::SplitComplementary => "A softer contrast around the complementary color",
            Self::Tetradic => "Four colors spaced evenly for rich combinations",
        }
    }

    /// Rotate `seed` by each of this family's offsets
    pub fn colors(self, seed: Color) -> Vec<Color> {
        let hsl = seed.to_hsl();
        self.offsets()
            .iter()
            .map(|&offset| rotate(hsl, offset))
            .collect()
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complementary => write!(f, "Complementary"),
            Self::Analogous => write!(f, "Analogous"),
            Self::Triadic => write!(f, "Triadic"),
            Self::SplitComplementary => write!(f, "Split Complementary"),
            Self::Tetradic => write!(f, "Tetradic"),
        }
    }
}

/// All five harmony families derived from one seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonySet {
    pub complementary: Color,
    /// `[hue - 30°, hue + 30°]`
    pub analogous: [Color; 2],
    pub triadic: [Color; 2],
    /// `[complement - 30°, complement + 30°]`
    pub split_complementary: [Color; 2],
    pub tetradic: [Color; 3],
}

impl HarmonySet {
    /// Colors of one family, in output order
    pub fn colors(&self, kind: HarmonyKind) -> &[Color] {
        match kind {
            HarmonyKind::Complementary => std::slice::from_ref(&self.complementary),
            HarmonyKind::Analogous => &self.analogous,
            HarmonyKind::Triadic => &self.triadic,
            HarmonyKind::SplitComplementary => &self.split_complementary,
            HarmonyKind::Tetradic => &self.tetradic,
        }
    }
}

fn rotate(hsl: Hsl, degrees: f64) -> Color {
    Color::from_hsl(Hsl {
        h: (hsl.h + degrees).rem_euclid(360.0),
        ..hsl
    })
}

/// Derive every harmony family from a seed color
pub fn generate_harmonies(seed: Color) -> HarmonySet {
    let hsl = seed.to_hsl();
    let at = |degrees: f64| rotate(hsl, degrees);

    HarmonySet {
        complementary: at(180.0),
        analogous: [at(-30.0), at(30.0)],
        triadic: [at(120.0), at(240.0)],
        split_complementary: [at(150.0), at(210.0)],
        tetradic: [at(90.0), at(180.0), at(270.0)],
    }
}

/// Parse a hex seed and derive its harmonies
///
/// # Errors
///
/// Returns `ColorError::InvalidColorFormat` for a malformed seed
pub fn generate_harmonies_hex(seed: &str) -> Result<HarmonySet> {
    Ok(generate_harmonies(seed.parse()?))
}
