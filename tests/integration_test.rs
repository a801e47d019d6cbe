//! Integration tests for extraction, harmonies and catalog matching
//!
//! These tests drive the public API end to end:
//! - Encoded images decoded through the fetchers
//! - Single-image and lookboard-wide color profiles
//! - Harmony and ramp generation from extracted seeds
//! - Catalog ranking and the suggestion pipelines
//! - Error handling for unreadable images and malformed colors

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use lookboard_colors::color::{hex_to_rgb, rgb_to_hex};
use lookboard_colors::{
    find_matches, generate_harmonies, generate_palette, suggest_for_hex, suggest_for_lookboard,
    Color, ColorError, ColorExtractor, FileFetcher, MemoryFetcher, Product, SuggestionConfig,
};

// ============================================================================
// Helpers
// ============================================================================

/// Encode an image whose left `split` columns are `left` and the rest `right`
fn encode_split_png(
    width: u32,
    height: u32,
    split: u32,
    left: [u8; 4],
    right: [u8; 4],
) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < split {
            Rgba(left)
        } else {
            Rgba(right)
        }
    });
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn encode_solid_png(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    encode_split_png(width, height, width, pixel, pixel)
}

fn product(id: &str, colors: &[&str]) -> Product {
    Product {
        id: id.to_string(),
        name: id.replace('-', " "),
        description: None,
        price: Some(49.99),
        image_url: None,
        brand_id: Some("brand-1".to_string()),
        colors: colors.iter().map(|c| c.to_string()).collect(),
    }
}

fn catalog() -> Vec<Product> {
    vec![
        product("crimson-blouse", &["#DC143C", "#B22222", "#8B0000"]),
        product("navy-suit", &["#000080", "#191970"]),
        product("sky-shirt", &["#87CEEB", "#ADD8E6"]),
        product("coral-top", &["#FF7F50", "#FF6B6B"]),
        product("teal-scarf", &["#008080", "#00CED1"]),
        product("broken-tags", &["red", "#12345"]),
        product("plain-tote", &[]),
    ]
}

// ============================================================================
// Color Space Scenarios
// ============================================================================

#[test]
fn test_rgb_to_hex_clamps_out_of_range() {
    assert_eq!(rgb_to_hex(300.0, -10.0, 128.0), "#ff0080");
}

#[test]
fn test_hex_round_trip_is_case_insensitive() {
    let color = hex_to_rgb("#AbCdEf").unwrap();
    let (r, g, b) = (f64::from(color.r), f64::from(color.g), f64::from(color.b));
    assert_eq!(rgb_to_hex(r, g, b), "#abcdef");
}

#[test]
fn test_red_complementary_is_cyan() {
    let set = generate_harmonies(hex_to_rgb("#FF0000").unwrap());
    assert_eq!(set.complementary.to_hex(), "#00ffff");
}

#[test]
fn test_palette_length_and_endpoints() {
    let base = hex_to_rgb("#3366CC").unwrap();
    let palette = generate_palette(base, 5).unwrap();
    let l = base.to_hsl().l;

    assert_eq!(palette.len(), 5);
    assert_eq!(palette[0], base);
    assert!(palette[1..3].iter().all(|c| c.to_hsl().l > l));
    assert!(palette[3..].iter().all(|c| c.to_hsl().l < l));
}

// ============================================================================
// Matching Scenarios
// ============================================================================

#[test]
fn test_exact_color_scores_full_similarity() {
    let catalog = vec![product("coral", &["#FF6B6B"])];
    let matches = find_matches(hex_to_rgb("#FF6B6B").unwrap(), &catalog, 10, 80.0).unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].similarity, 100.0);
    assert_eq!(matches[0].matched_color, "#FF6B6B");
}

#[test]
fn test_matches_are_unique_and_ranked() {
    let catalog = catalog();
    let matches = find_matches(hex_to_rgb("#DC143C").unwrap(), &catalog, 10, 100.0).unwrap();

    let ids: Vec<&str> = matches.iter().map(|m| m.item.id.as_str()).collect();
    assert_eq!(ids[0], "crimson-blouse");
    assert_eq!(ids.iter().filter(|&&id| id == "crimson-blouse").count(), 1);
    // The exact color wins over the item's other, farther reds
    assert_eq!(matches[0].matched_color, "#DC143C");
    assert_eq!(matches[0].similarity, 100.0);
    assert!(!ids.contains(&"broken-tags"));
    assert!(!ids.contains(&"plain-tote"));
    assert!(matches.windows(2).all(|w| w[0].similarity >= w[1].similarity));
}

// ============================================================================
// Extraction Scenarios
// ============================================================================

#[test]
fn test_single_image_profile() {
    // 30 coral columns, 10 gray columns
    let bytes = encode_split_png(40, 10, 30, [255, 107, 107, 255], [128, 128, 128, 255]);
    let fetcher = MemoryFetcher::new().with_image("look", bytes);
    let profile = ColorExtractor::new()
        .extract_from_source(&fetcher, "look")
        .unwrap();

    assert_eq!(profile.dominant_colors.len(), 2);
    assert_eq!(profile.dominant_colors[0].color, Color::new(255, 110, 110));
    assert_eq!(profile.dominant_colors[1].color, Color::new(130, 130, 130));
    assert!((profile.dominant_colors[0].percentage - 75.0).abs() < 1e-9);

    let total: f64 = profile.dominant_colors.iter().map(|s| s.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);

    assert_eq!(profile.vibrant_color, Color::new(255, 110, 110));
    assert_eq!(profile.muted_color, Color::new(130, 130, 130));
    assert!(profile.average_color.r > profile.average_color.b);
}

#[test]
fn test_single_image_load_failure_propagates() {
    let fetcher = MemoryFetcher::new().with_image("corrupt", b"GIF89a-truncated".to_vec());
    let result = ColorExtractor::new().extract_from_source(&fetcher, "corrupt");
    assert!(matches!(result, Err(ColorError::ImageLoadFailed { .. })));
}

#[test]
fn test_batch_extraction_over_zero_images() {
    let images: Vec<&str> = Vec::new();
    let result = ColorExtractor::new().extract_batch(&MemoryFetcher::new(), &images);
    assert!(matches!(result, Err(ColorError::NoColorsExtracted { attempted: 0 })));
}

#[test]
fn test_batch_extraction_merges_across_images() {
    let fetcher = MemoryFetcher::new()
        .with_image("red-1", encode_solid_png(10, 10, [200, 20, 20, 255]))
        .with_image("red-2", encode_solid_png(10, 10, [210, 30, 30, 255]))
        .with_image("blue", encode_solid_png(10, 5, [20, 20, 200, 255]));

    let profile = ColorExtractor::new()
        .extract_batch(&fetcher, &["red-1", "missing", "red-2", "blue"])
        .unwrap();

    assert_eq!(profile.dominant_colors.len(), 2);
    // First image's bucket represents the merged reds
    assert_eq!(profile.dominant_colors[0].color, Color::new(200, 20, 20));
    assert_eq!(profile.dominant_colors[0].raw_count, 20);
    assert_eq!(profile.dominant_colors[1].raw_count, 5);
    assert_eq!(profile.average_color, Color::new(110, 20, 110));
}

#[test]
fn test_file_fetcher_reads_from_disk() {
    let path = std::env::temp_dir().join(format!("lookboard_colors_{}.png", std::process::id()));
    std::fs::write(&path, encode_solid_png(8, 8, [0, 128, 128, 255])).unwrap();

    let result = ColorExtractor::new().extract_from_source(&FileFetcher, path.to_str().unwrap());
    std::fs::remove_file(&path).unwrap();

    let profile = result.unwrap();
    assert_eq!(profile.average_color, Color::new(0, 128, 128));
}

// ============================================================================
// Suggestion Pipelines
// ============================================================================

#[test]
fn test_lookboard_suggestions_end_to_end() {
    // A cyan lookboard: its complement is red, close to the crimson family
    let fetcher = MemoryFetcher::new()
        .with_image("board-1", encode_solid_png(20, 20, [0, 220, 220, 255]))
        .with_image("board-2", encode_solid_png(20, 20, [0, 215, 225, 255]));
    let catalog = catalog();
    let looks = suggest_for_lookboard(
        &fetcher,
        &["board-1", "board-2"],
        &catalog,
        &SuggestionConfig::default(),
    )
    .unwrap();

    assert_eq!(looks.seed, Color::new(0, 220, 220));
    assert!(looks.complementary.len() <= 4);
    assert_eq!(looks.complementary[0].item.id, "crimson-blouse");
    assert!(looks
        .analogous
        .iter()
        .chain(&looks.triadic)
        .all(|m| m.similarity >= 0.0 && m.similarity <= 100.0));

    let json = serde_json::to_value(&looks).unwrap();
    assert_eq!(json["seed"], "#00dcdc");
}

#[test]
fn test_color_suggestions_end_to_end() {
    let catalog = catalog();
    let suggestions = suggest_for_hex("#FF6B6B", &catalog, &SuggestionConfig::default()).unwrap();

    assert_eq!(suggestions.matches[0].item.id, "coral-top");
    assert_eq!(suggestions.matches[0].matched_color, "#FF6B6B");
    assert_eq!(suggestions.palette.len(), 5);
    assert_eq!(suggestions.text_color, Color::BLACK);
}

#[test]
fn test_user_facing_messages() {
    let err = suggest_for_hex("#GGGGGG", &catalog(), &SuggestionConfig::default()).unwrap_err();
    assert!(!err.is_recoverable());
    assert!(err.user_message().contains("#GGGGGG"));
}
