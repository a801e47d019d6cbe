//! # Lookboard Colors
//!
//! A Rust crate for color-driven fashion suggestions.
//!
//! This library turns lookboard images and picked colors into product
//! suggestions by:
//! - Sampling image pixels for dominant, average, vibrant and muted colors
//! - Converting between hex, RGB and HSL and measuring RGB distance
//! - Deriving color wheel harmonies and tonal ramps from a seed color
//! - Ranking catalog products by color similarity
//!
//! ## Example
//!
//! ```rust,no_run
//! use lookboard_colors::{suggest_for_lookboard, FileFetcher, Product, SuggestionConfig};
//!
//! let catalog: Vec<Product> = serde_json::from_str(&std::fs::read_to_string("products.json")?)?;
//! let images = ["look-1.jpg", "look-2.png"];
//!
//! let config = SuggestionConfig::default();
//! let looks = suggest_for_lookboard(&FileFetcher, &images, &catalog, &config)?;
//! for m in &looks.complementary {
//!     println!("{} ({:.0}% match)", m.item.name, m.similarity);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod extraction;
pub mod harmony;
pub mod image_loader;
pub mod matching;
pub mod suggestion;

pub use color::{color_name, Color, Hsl};
pub use config::{ExtractionConfig, MatchConfig, SuggestionConfig};
pub use error::{ColorError, Result};
pub use extraction::{ColorExtractor, ColorProfile, ColorSample};
pub use harmony::{generate_harmonies, generate_palette, HarmonyKind, HarmonySet};
pub use image_loader::{FileFetcher, ImageFetcher, MemoryFetcher, PixelBuffer};
pub use matching::{find_matches, CatalogItem, CatalogMatcher, Match, Product};
pub use suggestion::{
    suggest_for_color, suggest_for_hex, suggest_for_lookboard, ColorSuggestions, LookSuggestions,
};
