//! Sampling, grouping and matching constants
//!
//! Bucket quantization and cross-image merging are two separate similarity
//! policies and are kept as separate constants.

/// Pixel sampling parameters for single-image extraction
pub mod sampling {
    /// Bytes per RGBA pixel
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Every Nth pixel is sampled for dominant color counting
    pub const DOMINANT_STRIDE: usize = 10;

    /// Every Nth pixel is sampled for the average color (denser pass)
    pub const AVERAGE_STRIDE: usize = 5;

    /// Pixels with alpha below this value are treated as transparent
    pub const MIN_VISIBLE_ALPHA: u8 = 128;

    /// Channel values are rounded to the nearest multiple of this size
    pub const BUCKET_SIZE: u8 = 10;

    /// Fallback color when nothing visible was sampled
    pub const NEUTRAL_GRAY: [u8; 3] = [0x80, 0x80, 0x80];
}

/// Extraction caps and cross-image merge policy
pub mod grouping {
    /// Default dominant color cap for a single image
    pub const MAX_COLORS: usize = 5;

    /// Default dominant color cap per image inside a batch
    pub const MAX_COLORS_PER_IMAGE: usize = 3;

    /// RGB distance under which samples from different images are merged
    pub const MERGE_DISTANCE: f64 = 30.0;

    /// Number of merged groups kept in a batch profile
    pub const MAX_MERGED_COLORS: usize = 8;
}

/// Catalog matching defaults
pub mod matching {
    /// Default result cap
    pub const MAX_RESULTS: usize = 10;

    /// Default RGB distance cutoff
    pub const SIMILARITY_THRESHOLD: f64 = 100.0;
}

/// Tonal ramp parameters
pub mod ramp {
    /// Lightness change per ramp step, in percentage points
    pub const LIGHTNESS_STEP: f64 = 15.0;

    /// Default ramp length
    pub const DEFAULT_VARIATIONS: usize = 5;
}

/// Suggestion pipeline defaults
pub mod suggestions {
    /// Matches per harmony family for lookboard suggestions
    pub const LOOK_MAX_RESULTS: usize = 4;

    /// Direct matches for a picked color
    pub const COLOR_MAX_RESULTS: usize = 8;

    /// Matcher cutoff used by both suggestion pipelines
    pub const THRESHOLD: f64 = 80.0;
}
