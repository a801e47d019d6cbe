//! Single-image color profile extraction
//!
//! Derives dominant, average, vibrant and muted colors from one RGBA buffer:
//! - Strided sampling with transparent pixels skipped
//! - Quantization of each channel to the nearest multiple of the bucket size
//! - Frequency ranking of buckets, capped to `max_colors`
//! - A separate, denser sampling pass for the average color
//!
//! Dominant percentages are normalized over the kept buckets only, so they
//! sum to 100 even when the tail of rarer buckets was cut off.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::ExtractionConfig;
use crate::constants::{grouping, sampling};
use crate::image_loader::{ImageFetcher, PixelBuffer};
use crate::{ColorError, Result};

/// One quantized color with its sampled frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    pub color: Color,
    /// Number of sampled pixels that fell into this color's bucket
    pub raw_count: u32,
    /// Share of the kept samples, in [0, 100]
    pub percentage: f64,
}

/// Color summary of one image or of a whole lookboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorProfile {
    /// Ordered by descending count
    pub dominant_colors: Vec<ColorSample>,
    pub average_color: Color,
    /// Most saturated dominant color
    pub vibrant_color: Color,
    /// Least saturated dominant color
    pub muted_color: Color,
}

impl ColorProfile {
    /// First dominant color, falling back to the average
    pub fn primary_color(&self) -> Color {
        self.dominant_colors
            .first()
            .map_or(self.average_color, |sample| sample.color)
    }
}

/// Stateless extractor holding the tunable caps and thresholds
#[derive(Debug, Clone)]
pub struct ColorExtractor {
    pub(crate) max_colors: usize,
    pub(crate) max_colors_per_image: usize,
    pub(crate) merge_distance: f64,
    pub(crate) max_merged_colors: usize,
}

impl Default for ColorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorExtractor {
    /// Create an extractor with default parameters
    pub fn new() -> Self {
        Self {
            max_colors: grouping::MAX_COLORS,
            max_colors_per_image: grouping::MAX_COLORS_PER_IMAGE,
            merge_distance: grouping::MERGE_DISTANCE,
            max_merged_colors: grouping::MAX_MERGED_COLORS,
        }
    }

    /// Create an extractor from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidParameter` if a cap is zero or the merge
    /// distance is negative
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            max_colors: config.max_colors,
            max_colors_per_image: config.max_colors_per_image,
            merge_distance: config.merge_distance,
            max_merged_colors: config.max_merged_colors,
        })
    }

    /// Extract a profile from decoded pixels, keeping up to `max_colors` dominant colors
    pub fn extract(&self, pixels: &PixelBuffer) -> ColorProfile {
        profile_from_rgba(pixels.rgba(), self.max_colors)
    }

    /// Extract a profile from a raw interleaved RGBA slice
    ///
    /// # Errors
    ///
    /// Returns `ColorError::ImageLoadFailed` if the slice is empty or not a
    /// whole number of RGBA pixels
    pub fn extract_from_rgba(&self, rgba: &[u8]) -> Result<ColorProfile> {
        if rgba.is_empty() || rgba.len() % sampling::BYTES_PER_PIXEL != 0 {
            return Err(ColorError::image_load_msg(format!(
                "Malformed RGBA buffer of {} bytes",
                rgba.len()
            )));
        }
        Ok(profile_from_rgba(rgba, self.max_colors))
    }

    /// Fetch one image and extract its profile
    ///
    /// # Errors
    ///
    /// Propagates `ColorError::ImageLoadFailed` from the fetcher
    pub fn extract_from_source<F>(&self, fetcher: &F, reference: &str) -> Result<ColorProfile>
    where
        F: ImageFetcher + ?Sized,
    {
        let pixels = fetcher.fetch(reference)?;
        let profile = self.extract(&pixels);
        debug!(
            "Extracted {} dominant colors from {} ({}x{})",
            profile.dominant_colors.len(),
            reference,
            pixels.width(),
            pixels.height()
        );
        Ok(profile)
    }
}

pub(crate) fn profile_from_rgba(rgba: &[u8], max_colors: usize) -> ColorProfile {
    let dominant_colors = dominant_colors(rgba, max_colors);
    let average_color = average_color(rgba);
    let vibrant_color = most_saturated(&dominant_colors);
    let muted_color = least_saturated(&dominant_colors);

    ColorProfile {
        dominant_colors,
        average_color,
        vibrant_color,
        muted_color,
    }
}

/// Visible pixels at every `stride`-th position
fn sampled_pixels(rgba: &[u8], stride: usize) -> impl Iterator<Item = [u8; 3]> + '_ {
    rgba.chunks_exact(sampling::BYTES_PER_PIXEL)
        .step_by(stride)
        .filter(|px| px[3] >= sampling::MIN_VISIBLE_ALPHA)
        .map(|px| [px[0], px[1], px[2]])
}

/// Nearest multiple of the bucket size; 255 rounds up past the channel range
fn bucket_key([r, g, b]: [u8; 3]) -> [u16; 3] {
    let size = f64::from(sampling::BUCKET_SIZE);
    let quantize = |c: u8| ((f64::from(c) / size).round() * size) as u16;
    [quantize(r), quantize(g), quantize(b)]
}

fn bucket_color(key: [u16; 3]) -> Color {
    let clamp = |c: u16| c.min(u16::from(u8::MAX)) as u8;
    Color::new(clamp(key[0]), clamp(key[1]), clamp(key[2]))
}

fn dominant_colors(rgba: &[u8], max_colors: usize) -> Vec<ColorSample> {
    // Buckets in first-seen order so the stable sort breaks count ties by it
    let mut index: HashMap<[u16; 3], usize> = HashMap::new();
    let mut buckets: Vec<([u16; 3], u32)> = Vec::new();

    for rgb in sampled_pixels(rgba, sampling::DOMINANT_STRIDE) {
        let key = bucket_key(rgb);
        match index.get(&key) {
            Some(&slot) => buckets[slot].1 += 1,
            None => {
                index.insert(key, buckets.len());
                buckets.push((key, 1));
            }
        }
    }

    buckets.sort_by(|a, b| b.1.cmp(&a.1));
    buckets.truncate(max_colors);

    let kept_total: u32 = buckets.iter().map(|&(_, count)| count).sum();
    buckets
        .into_iter()
        .map(|(key, count)| ColorSample {
            color: bucket_color(key),
            raw_count: count,
            percentage: f64::from(count) / f64::from(kept_total) * 100.0,
        })
        .collect()
}

fn average_color(rgba: &[u8]) -> Color {
    let mut sums = [0u64; 3];
    let mut count = 0u64;

    for rgb in sampled_pixels(rgba, sampling::AVERAGE_STRIDE) {
        for (sum, channel) in sums.iter_mut().zip(rgb) {
            *sum += u64::from(channel);
        }
        count += 1;
    }

    if count == 0 {
        return Color::from(sampling::NEUTRAL_GRAY);
    }

    let mean = |sum: u64| (sum as f64 / count as f64).round() as u8;
    Color::new(mean(sums[0]), mean(sums[1]), mean(sums[2]))
}

/// Most saturated sample; the first one wins ties
pub(crate) fn most_saturated(samples: &[ColorSample]) -> Color {
    pick_by_saturation(samples, |candidate, best| candidate > best)
}

/// Least saturated sample; the first one wins ties
pub(crate) fn least_saturated(samples: &[ColorSample]) -> Color {
    pick_by_saturation(samples, |candidate, best| candidate < best)
}

fn pick_by_saturation(samples: &[ColorSample], better: impl Fn(f64, f64) -> bool) -> Color {
    let mut iter = samples.iter();
    let Some(first) = iter.next() else {
        return Color::from(sampling::NEUTRAL_GRAY);
    };

    let mut best = (first.color, first.color.saturation());
    for sample in iter {
        let saturation = sample.color.saturation();
        if better(saturation, best.1) {
            best = (sample.color, saturation);
        }
    }
    best.0
}
