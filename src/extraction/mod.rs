//! Image color extraction module
//!
//! Samples RGBA pixel buffers to derive color profiles, for a single image
//! or for all images of a lookboard at once.

pub mod batch;
pub mod profile;

pub use batch::group_similar_colors;
pub use profile::{ColorExtractor, ColorProfile, ColorSample};
