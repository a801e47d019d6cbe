//! Tonal ramps: lighter and darker variants of a base color
//!
//! Hue and saturation stay fixed; lightness moves in fixed steps and is
//! clamped to [0, 100].

use crate::color::{Color, Hsl};
use crate::constants::ramp::LIGHTNESS_STEP;
use crate::{ColorError, Result};

/// Build a ramp of exactly `variations` colors
///
/// Index 0 is `base` itself, followed by `variations / 2` lighter steps and
/// then `variations / 2` darker steps, truncated to `variations`. With an
/// even length the lighter side therefore holds one color more.
///
/// # Errors
///
/// Returns `ColorError::InvalidParameter` if `variations` is zero
pub fn generate_palette(base: Color, variations: usize) -> Result<Vec<Color>> {
    if variations == 0 {
        return Err(ColorError::invalid_parameter("variations", variations));
    }

    let hsl = base.to_hsl();
    let steps = variations / 2;
    let with_lightness = |l: f64| Color::from_hsl(Hsl { l, ..hsl });

    let lighter =
        (1..=steps).map(|i| with_lightness((hsl.l + i as f64 * LIGHTNESS_STEP).min(100.0)));
    let darker =
        (1..=steps).map(|i| with_lightness((hsl.l - i as f64 * LIGHTNESS_STEP).max(0.0)));

    Ok(std::iter::once(base)
        .chain(lighter)
        .chain(darker)
        .take(variations)
        .collect())
}

/// Parse a hex base color and build its ramp
///
/// # Errors
///
/// Returns `ColorError::InvalidColorFormat` for a malformed base and
/// `ColorError::InvalidParameter` if `variations` is zero
pub fn generate_palette_hex(base: &str, variations: usize) -> Result<Vec<Color>> {
    generate_palette(base.parse()?, variations)
}
