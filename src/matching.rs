//! Catalog matching by per-color RGB similarity
//!
//! Every catalog color within `threshold` of the target becomes a candidate
//! with a similarity that falls linearly from 100 (identical) to 0 (exactly
//! `threshold` away). Candidates are ranked by similarity with a stable sort,
//! so equal scores keep catalog order, then reduced to one match per item.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::color::{distance, Color};
use crate::config::MatchConfig;
use crate::constants::matching::{MAX_RESULTS, SIMILARITY_THRESHOLD};
use crate::{ColorError, Result};

/// Read-only view of a catalog entry
pub trait CatalogItem {
    type Id: Eq + Hash + Debug;

    /// Identifier, unique within one catalog query
    fn id(&self) -> &Self::Id;

    /// Candidate colors as hex strings; may be empty
    fn colors(&self) -> &[String];
}

/// Product as served by the catalog API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub brand_id: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
}

impl CatalogItem for Product {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn colors(&self) -> &[String] {
        &self.colors
    }
}

/// A catalog item close to the target color
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match<'a, T> {
    pub item: &'a T,
    /// In [0, 100]; 100 means identical
    pub similarity: f64,
    /// The item's own spelling of the color that matched
    pub matched_color: &'a str,
}

/// Ranks catalog items against a target color
#[derive(Debug, Clone)]
pub struct CatalogMatcher {
    max_results: usize,
    threshold: f64,
}

impl Default for CatalogMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogMatcher {
    /// Create a matcher with default parameters
    pub fn new() -> Self {
        Self {
            max_results: MAX_RESULTS,
            threshold: SIMILARITY_THRESHOLD,
        }
    }

    /// Create a matcher with custom parameters
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidParameter` if `max_results` is zero or
    /// `threshold` is not a positive number
    pub fn with_params(max_results: usize, threshold: f64) -> Result<Self> {
        if max_results == 0 {
            return Err(ColorError::invalid_parameter("max_results", max_results));
        }
        if !(threshold > 0.0 && threshold.is_finite()) {
            return Err(ColorError::invalid_parameter("threshold", threshold));
        }
        Ok(Self {
            max_results,
            threshold,
        })
    }

    pub fn from_config(config: &MatchConfig) -> Result<Self> {
        Self::with_params(config.max_results, config.threshold)
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Similarity for a given distance, or `None` beyond the threshold
    pub fn similarity(&self, distance: f64) -> Option<f64> {
        (distance <= self.threshold)
            .then(|| (100.0 - (distance / self.threshold) * 100.0).max(0.0))
    }

    /// Ranked, deduplicated matches for `target`
    ///
    /// Item colors that fail to parse are logged and skipped.
    pub fn find_matches<'a, T>(&self, target: Color, catalog: &'a [T]) -> Vec<Match<'a, T>>
    where
        T: CatalogItem,
    {
        let mut candidates: Vec<Match<'a, T>> = Vec::new();

        for item in catalog {
            for hex in item.colors() {
                let color = match hex.parse::<Color>() {
                    Ok(color) => color,
                    Err(error) => {
                        warn!("Skipping color of catalog item {:?}: {}", item.id(), error);
                        continue;
                    }
                };

                if let Some(similarity) = self.similarity(distance(target, color)) {
                    candidates.push(Match {
                        item,
                        similarity,
                        matched_color: hex,
                    });
                }
            }
        }

        candidates.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

        let mut seen: HashSet<&T::Id> = HashSet::new();
        candidates.retain(|candidate| seen.insert(candidate.item.id()));
        candidates.truncate(self.max_results);

        debug!(
            "Matched {} of {} catalog items against {}",
            candidates.len(),
            catalog.len(),
            target
        );
        candidates
    }
}

/// Ranked, deduplicated catalog matches for `target`
///
/// # Errors
///
/// Returns `ColorError::InvalidParameter` if `max_results` is zero or
/// `threshold` is not a positive number
pub fn find_matches<'a, T>(
    target: Color,
    catalog: &'a [T],
    max_results: usize,
    threshold: f64,
) -> Result<Vec<Match<'a, T>>>
where
    T: CatalogItem,
{
    Ok(CatalogMatcher::with_params(max_results, threshold)?.find_matches(target, catalog))
}

/// Like [`find_matches`] with a hex target
///
/// # Errors
///
/// Also returns `ColorError::InvalidColorFormat` for a malformed target
pub fn find_matches_hex<'a, T>(
    target: &str,
    catalog: &'a [T],
    max_results: usize,
    threshold: f64,
) -> Result<Vec<Match<'a, T>>>
where
    T: CatalogItem,
{
    find_matches(target.parse()?, catalog, max_results, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, colors: &[&str]) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: None,
            price: None,
            image_url: None,
            brand_id: None,
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_exact_match() {
        let catalog = vec![product("p1", &["#FF6B6B"])];
        let matches = find_matches_hex("#FF6B6B", &catalog, 10, 80.0).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].similarity, 100.0);
        assert_eq!(matches[0].matched_color, "#FF6B6B");
        assert_eq!(matches[0].item.id, "p1");
    }

    #[test]
    fn test_dedup_keeps_best_color() {
        // #FF3232 is ~70.7 away, so both reds are candidates before dedup
        let catalog = vec![product("p1", &["#FF3232", "#FF0000", "#00FF00"])];
        let matcher = CatalogMatcher::with_params(10, 100.0).unwrap();
        let near = distance(Color::new(255, 0, 0), Color::new(255, 50, 50));
        assert!(matcher.similarity(near).is_some());

        let matches = matcher.find_matches(Color::new(255, 0, 0), &catalog);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched_color, "#FF0000");
        assert_eq!(matches[0].similarity, 100.0);
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        // (30, 40, 0) is exactly 50 away from black
        let catalog = vec![product("p1", &["#1E2800"])];

        let matches = find_matches(Color::BLACK, &catalog, 10, 50.0).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].similarity, 0.0);

        let matches = find_matches(Color::BLACK, &catalog, 10, 50.0 - 1e-9).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_linear_similarity() {
        let matcher = CatalogMatcher::with_params(5, 80.0).unwrap();
        assert_eq!(matcher.similarity(0.0), Some(100.0));
        assert_eq!(matcher.similarity(20.0), Some(75.0));
        assert_eq!(matcher.similarity(80.0), Some(0.0));
        assert_eq!(matcher.similarity(80.5), None);
    }

    #[test]
    fn test_ranking_ties_and_truncation() {
        let catalog = vec![
            product("far", &["#000032"]),    // 50 away
            product("tie-a", &["#00000A"]),  // 10 away
            product("empty", &[]),
            product("tie-b", &["#0A0000"]),  // 10 away
            product("exact", &["#000000"]),
            product("out", &["#FFFFFF"]),
        ];
        let matches = find_matches(Color::BLACK, &catalog, 3, 100.0).unwrap();
        let ids: Vec<&str> = matches.iter().map(|m| m.item.id.as_str()).collect();

        assert_eq!(ids, vec!["exact", "tie-a", "tie-b"]);
        assert!((matches[1].similarity - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_item_colors_are_skipped() {
        let catalog = vec![
            product("p1", &["not-a-color", "#FF0000"]),
            product("p2", &["#F00"]),
        ];
        let matches = find_matches(Color::new(255, 0, 0), &catalog, 10, 100.0).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].item.id, "p1");
    }

    #[test]
    fn test_invalid_parameters() {
        let catalog: Vec<Product> = Vec::new();
        assert!(matches!(
            find_matches(Color::BLACK, &catalog, 0, 80.0),
            Err(ColorError::InvalidParameter { .. })
        ));
        assert!(matches!(
            find_matches(Color::BLACK, &catalog, 5, 0.0),
            Err(ColorError::InvalidParameter { .. })
        ));
        assert!(matches!(
            find_matches_hex("oops", &catalog, 5, 80.0),
            Err(ColorError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn test_product_from_api_json() {
        let json = r##"{
            "id": "product-1",
            "name": "Crimson Blouse",
            "price": 89.99,
            "imageUrl": "https://example.com/p1.jpg",
            "colors": ["#DC143C", "#B22222", "#8B0000"],
            "brandId": "brand-1"
        }"##;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.colors().len(), 3);
        assert_eq!(product.image_url.as_deref(), Some("https://example.com/p1.jpg"));
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_match_serialization() {
        let catalog = vec![product("p1", &["#FF6B6B"])];
        let matches = find_matches_hex("#ff6b6b", &catalog, 1, 80.0).unwrap();
        let value = serde_json::to_value(&matches[0]).unwrap();
        assert_eq!(value["matchedColor"], "#FF6B6B");
        assert_eq!(value["item"]["id"], "p1");
        assert_eq!(value["similarity"], 100.0);
    }
}
