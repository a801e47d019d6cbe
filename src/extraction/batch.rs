//! Lookboard-wide extraction across several images
//!
//! Images are fetched one after another. A failed image is logged and
//! skipped; the batch fails only when nothing at all was extracted.

use log::{debug, warn};

use super::profile::{least_saturated, most_saturated, profile_from_rgba, ColorSample};
use super::{ColorExtractor, ColorProfile};
use crate::color::{distance, Color};
use crate::image_loader::ImageFetcher;
use crate::{ColorError, Result};

impl ColorExtractor {
    /// Extract one combined profile from an ordered list of image references
    ///
    /// Each image contributes up to `max_colors_per_image` dominant colors.
    /// Samples closer than `merge_distance` are merged into the earlier group,
    /// and the largest `max_merged_colors` groups form the result.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::NoColorsExtracted` if the list is empty or no
    /// image yielded a single color
    pub fn extract_batch<F, S>(&self, fetcher: &F, references: &[S]) -> Result<ColorProfile>
    where
        F: ImageFetcher + ?Sized,
        S: AsRef<str>,
    {
        let mut pooled: Vec<ColorSample> = Vec::new();

        for reference in references {
            let reference = reference.as_ref();
            match fetcher.fetch(reference) {
                Ok(pixels) => {
                    let profile = profile_from_rgba(pixels.rgba(), self.max_colors_per_image);
                    pooled.extend(profile.dominant_colors);
                }
                Err(error) => {
                    warn!("Failed to extract colors from {}: {}", reference, error);
                }
            }
        }

        if pooled.is_empty() {
            return Err(ColorError::NoColorsExtracted {
                attempted: references.len(),
            });
        }

        let mut groups = group_similar_colors(pooled, self.merge_distance);
        debug!(
            "Merged lookboard colors into {} groups from {} image(s)",
            groups.len(),
            references.len()
        );
        groups.truncate(self.max_merged_colors);

        let average_color = mean_color(&groups);
        let vibrant_color = most_saturated(&groups);
        let muted_color = least_saturated(&groups);

        Ok(ColorProfile {
            dominant_colors: groups,
            average_color,
            vibrant_color,
            muted_color,
        })
    }
}

/// Merge samples within `max_distance` of an existing group's representative
///
/// Groups keep their first sample's color, are ordered by descending count
/// (ties keep creation order), and carry percentages relative to all groups.
pub fn group_similar_colors(samples: Vec<ColorSample>, max_distance: f64) -> Vec<ColorSample> {
    let mut groups: Vec<ColorSample> = Vec::new();

    for sample in samples {
        match groups
            .iter_mut()
            .find(|group| distance(sample.color, group.color) <= max_distance)
        {
            Some(group) => {
                group.raw_count += sample.raw_count;
                group.percentage += sample.percentage;
            }
            None => groups.push(sample),
        }
    }

    groups.sort_by(|a, b| b.raw_count.cmp(&a.raw_count));

    let total: u32 = groups.iter().map(|group| group.raw_count).sum();
    if total > 0 {
        for group in &mut groups {
            group.percentage = f64::from(group.raw_count) / f64::from(total) * 100.0;
        }
    }

    groups
}

/// Rounded per-channel mean of the group colors
fn mean_color(groups: &[ColorSample]) -> Color {
    let count = groups.len() as f64;
    let mean = |channel: fn(&Color) -> u8| {
        let sum: f64 = groups.iter().map(|g| f64::from(channel(&g.color))).sum();
        (sum / count).round() as u8
    };
    Color::new(mean(|c| c.r), mean(|c| c.g), mean(|c| c.b))
}
