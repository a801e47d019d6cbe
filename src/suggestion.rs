//! Product suggestions built from color harmonies
//!
//! Two entry points feed the catalog matcher:
//! - Lookboards: extract a combined profile from the board's images, take its
//!   primary color as the seed, and match the complementary, first analogous
//!   and first triadic colors.
//! - Picked colors: label the seed's harmonies, build its tonal ramp, and
//!   match the seed itself.

use log::debug;
use serde::Serialize;

use crate::color::{color_name, contrast_color, Color};
use crate::config::SuggestionConfig;
use crate::extraction::{ColorExtractor, ColorProfile};
use crate::harmony::{generate_harmonies, generate_palette, HarmonyKind, HarmonySet};
use crate::image_loader::ImageFetcher;
use crate::matching::{CatalogItem, CatalogMatcher, Match};
use crate::Result;

/// Suggestions for a whole lookboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookSuggestions<'a, T> {
    pub profile: ColorProfile,
    /// Color the harmonies were derived from
    pub seed: Color,
    pub harmonies: HarmonySet,
    pub complementary: Vec<Match<'a, T>>,
    pub analogous: Vec<Match<'a, T>>,
    pub triadic: Vec<Match<'a, T>>,
}

/// A color with its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelledColor {
    pub color: Color,
    pub name: &'static str,
}

impl From<Color> for LabelledColor {
    fn from(color: Color) -> Self {
        Self {
            color,
            name: color_name(&color.to_hex()),
        }
    }
}

/// One harmony family ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarmonySection {
    pub kind: HarmonyKind,
    pub description: &'static str,
    pub colors: Vec<LabelledColor>,
}

/// Suggestions for a single picked color
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSuggestions<'a, T> {
    pub seed: LabelledColor,
    /// Black or white, whichever reads better on the seed
    pub text_color: Color,
    pub harmonies: Vec<HarmonySection>,
    pub palette: Vec<Color>,
    pub matches: Vec<Match<'a, T>>,
}

/// Suggest products for the images of a lookboard
///
/// Images are fetched in order; unreadable ones are skipped.
///
/// # Errors
///
/// Returns `ColorError::NoColorsExtracted` if `images` is empty or no image
/// could be read, and `ColorError::InvalidParameter` for a bad configuration
pub fn suggest_for_lookboard<'a, F, S, T>(
    fetcher: &F,
    images: &[S],
    catalog: &'a [T],
    config: &SuggestionConfig,
) -> Result<LookSuggestions<'a, T>>
where
    F: ImageFetcher + ?Sized,
    S: AsRef<str>,
    T: CatalogItem,
{
    let extractor = ColorExtractor::from_config(&config.extraction)?;
    let matcher = CatalogMatcher::from_config(&config.look_matches)?;

    let profile = extractor.extract_batch(fetcher, images)?;
    let seed = profile.primary_color();
    let harmonies = generate_harmonies(seed);
    debug!("Lookboard seed color {} from {} image(s)", seed, images.len());

    let complementary = matcher.find_matches(harmonies.complementary, catalog);
    let analogous = matcher.find_matches(harmonies.analogous[0], catalog);
    let triadic = matcher.find_matches(harmonies.triadic[0], catalog);

    Ok(LookSuggestions {
        profile,
        seed,
        harmonies,
        complementary,
        analogous,
        triadic,
    })
}

/// Suggest products and companion colors for a picked color
///
/// # Errors
///
/// Returns `ColorError::InvalidParameter` for a bad configuration
pub fn suggest_for_color<'a, T>(
    seed: Color,
    catalog: &'a [T],
    config: &SuggestionConfig,
) -> Result<ColorSuggestions<'a, T>>
where
    T: CatalogItem,
{
    let matcher = CatalogMatcher::from_config(&config.color_matches)?;
    let harmony_set = generate_harmonies(seed);

    let harmonies = HarmonyKind::ALL
        .iter()
        .map(|&kind| HarmonySection {
            kind,
            description: kind.description(),
            colors: harmony_set
                .colors(kind)
                .iter()
                .map(|&color| LabelledColor::from(color))
                .collect(),
        })
        .collect();

    Ok(ColorSuggestions {
        seed: LabelledColor::from(seed),
        text_color: contrast_color(seed),
        harmonies,
        palette: generate_palette(seed, config.palette_variations)?,
        matches: matcher.find_matches(seed, catalog),
    })
}

/// Like [`suggest_for_color`] with a hex seed
///
/// # Errors
///
/// Also returns `ColorError::InvalidColorFormat` for a malformed seed
pub fn suggest_for_hex<'a, T>(
    seed: &str,
    catalog: &'a [T],
    config: &SuggestionConfig,
) -> Result<ColorSuggestions<'a, T>>
where
    T: CatalogItem,
{
    suggest_for_color(seed.parse()?, catalog, config)
}
