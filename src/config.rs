//! Configuration structures for color extraction and suggestions.
//!
//! All knobs are plain parameters; nothing is read from the environment.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use lookboard_colors::SuggestionConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = SuggestionConfig::from_json_file(Path::new("colors.json"))?;
//!
//! // Or use defaults
//! let config = SuggestionConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ExtractionConfig`]: dominant color caps and cross-image merging
//! - [`MatchConfig`]: catalog matcher result cap and distance cutoff
//! - [`SuggestionConfig`]: the pipelines built on both

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{grouping, matching, ramp, suggestions};
use crate::{ColorError, Result};

/// Color extraction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Dominant colors kept for a single image
    pub max_colors: usize,

    /// Dominant colors each image contributes to a lookboard profile
    pub max_colors_per_image: usize,

    /// RGB distance under which colors from different images are merged
    pub merge_distance: f64,

    /// Merged colors kept in a lookboard profile
    pub max_merged_colors: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_colors: grouping::MAX_COLORS,
            max_colors_per_image: grouping::MAX_COLORS_PER_IMAGE,
            merge_distance: grouping::MERGE_DISTANCE,
            max_merged_colors: grouping::MAX_MERGED_COLORS,
        }
    }
}

impl ExtractionConfig {
    /// Reject zero caps and negative merge distances
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("max_colors", self.max_colors),
            ("max_colors_per_image", self.max_colors_per_image),
            ("max_merged_colors", self.max_merged_colors),
        ] {
            if value == 0 {
                return Err(ColorError::invalid_parameter(name, value));
            }
        }
        if !(self.merge_distance >= 0.0 && self.merge_distance.is_finite()) {
            return Err(ColorError::invalid_parameter(
                "merge_distance",
                self.merge_distance,
            ));
        }
        Ok(())
    }
}

/// Catalog matching parameters.
///
/// Missing fields take the matcher defaults; inside a [`SuggestionConfig`]
/// they take that pipeline's defaults instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Maximum number of matches returned
    pub max_results: usize,

    /// RGB distance at which similarity reaches 0
    pub threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_results: matching::MAX_RESULTS,
            threshold: matching::SIMILARITY_THRESHOLD,
        }
    }
}

impl MatchConfig {
    fn look_defaults() -> Self {
        Self {
            max_results: suggestions::LOOK_MAX_RESULTS,
            threshold: suggestions::THRESHOLD,
        }
    }

    fn color_defaults() -> Self {
        Self {
            max_results: suggestions::COLOR_MAX_RESULTS,
            threshold: suggestions::THRESHOLD,
        }
    }
}

/// A match section where every field is optional
#[derive(Deserialize)]
struct PartialMatchConfig {
    max_results: Option<usize>,
    threshold: Option<f64>,
}

impl PartialMatchConfig {
    fn or(self, defaults: MatchConfig) -> MatchConfig {
        MatchConfig {
            max_results: self.max_results.unwrap_or(defaults.max_results),
            threshold: self.threshold.unwrap_or(defaults.threshold),
        }
    }
}

fn look_matches<'de, D>(deserializer: D) -> std::result::Result<MatchConfig, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(PartialMatchConfig::deserialize(deserializer)?.or(MatchConfig::look_defaults()))
}

fn color_matches<'de, D>(deserializer: D) -> std::result::Result<MatchConfig, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(PartialMatchConfig::deserialize(deserializer)?.or(MatchConfig::color_defaults()))
}

/// Suggestion pipeline parameters.
///
/// Lookboard suggestions extract a profile and match three harmony colors;
/// color suggestions match a picked color directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    pub extraction: ExtractionConfig,

    /// Matcher settings per harmony family for lookboard suggestions
    #[serde(deserialize_with = "look_matches")]
    pub look_matches: MatchConfig,

    /// Matcher settings for a picked color
    #[serde(deserialize_with = "color_matches")]
    pub color_matches: MatchConfig,

    /// Length of the tonal ramp returned with color suggestions
    pub palette_variations: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            look_matches: MatchConfig::look_defaults(),
            color_matches: MatchConfig::color_defaults(),
            palette_variations: ramp::DEFAULT_VARIATIONS,
        }
    }
}

impl SuggestionConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
