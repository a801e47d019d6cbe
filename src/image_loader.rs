//! Image acquisition and decoding to RGBA pixel buffers
//!
//! Extraction only ever sees a flat buffer of interleaved R, G, B, A bytes.
//! This module turns encoded images (files on disk, bytes already downloaded
//! by the caller) into that buffer.
//!
//! ## Supported Formats
//!
//! Whatever the `image` crate decodes. Files are decoded as the format
//! their extension names; in-memory bytes are sniffed from their header.
//!
//! ## Fetchers
//!
//! Batch extraction resolves each lookboard image reference through an
//! [`ImageFetcher`]. [`FileFetcher`] treats references as filesystem paths;
//! [`MemoryFetcher`] serves bytes the caller already holds. Network download
//! and timeouts stay with the caller, which should report an expired fetch
//! as `ColorError::ImageLoadFailed`.

use std::collections::HashMap;
use std::path::Path;

use crate::constants::sampling::BYTES_PER_PIXEL;
use crate::error::{ColorError, Result};

/// Decoded image as interleaved 8-bit RGBA
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap a raw RGBA buffer
    ///
    /// # Errors
    ///
    /// Returns `ColorError::ImageLoadFailed` if the buffer is empty or its
    /// length is not `width * height * 4`
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if rgba.is_empty() || expected == 0 {
            return Err(ColorError::image_load_msg("Image has no pixel data"));
        }
        if rgba.len() != expected {
            return Err(ColorError::image_load_msg(format!(
                "Pixel buffer holds {} bytes, expected {} for {}x{} RGBA",
                rgba.len(),
                expected,
                width,
                height
            )));
        }

        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Interleaved R, G, B, A bytes
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixel_count(&self) -> usize {
        self.rgba.len() / BYTES_PER_PIXEL
    }
}

/// Load an image from disk and convert it to an RGBA pixel buffer
///
/// # Errors
///
/// Returns `ColorError::ImageLoadFailed` if:
/// - The extension names no format the `image` crate knows
/// - File cannot be opened
/// - Decoding fails or the image is empty
///
/// # Example
///
/// ```rust,no_run
/// use lookboard_colors::image_loader::load_image;
/// use std::path::Path;
///
/// let pixels = load_image(Path::new("look.jpg"))?;
/// println!("Loaded image: {}x{}", pixels.width(), pixels.height());
/// # Ok::<(), lookboard_colors::ColorError>(())
/// ```
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    use image::{ImageFormat, ImageReader};

    let format = ImageFormat::from_path(path).map_err(|e| {
        ColorError::image_load(format!("Unknown image format for file: {}", path.display()), e)
    })?;

    let mut reader = ImageReader::open(path).map_err(|e| {
        ColorError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;
    reader.set_format(format);

    let img = reader.decode().map_err(|e| {
        ColorError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    into_pixel_buffer(img)
}

/// Decode an in-memory encoded image (format sniffed from its header)
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer> {
    if bytes.is_empty() {
        return Err(ColorError::image_load_msg("Image data is empty"));
    }

    let img = image::load_from_memory(bytes)
        .map_err(|e| ColorError::image_load("Failed to decode image data", e))?;

    into_pixel_buffer(img)
}

fn into_pixel_buffer(img: image::DynamicImage) -> Result<PixelBuffer> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::new(width, height, rgba.into_raw())
}

/// Resolves an image reference (path, URL, key) to decoded pixels
pub trait ImageFetcher {
    /// # Errors
    ///
    /// Returns `ColorError::ImageLoadFailed` when the image is unreachable,
    /// undecodable or empty
    fn fetch(&self, reference: &str) -> Result<PixelBuffer>;
}

/// Treats every reference as a filesystem path
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl ImageFetcher for FileFetcher {
    fn fetch(&self, reference: &str) -> Result<PixelBuffer> {
        load_image(Path::new(reference))
    }
}

/// Serves encoded images the caller has already downloaded
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    images: HashMap<String, Vec<u8>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register encoded bytes under a reference
    pub fn insert(&mut self, reference: impl Into<String>, bytes: Vec<u8>) {
        self.images.insert(reference.into(), bytes);
    }

    pub fn with_image(mut self, reference: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(reference, bytes);
        self
    }
}

impl ImageFetcher for MemoryFetcher {
    fn fetch(&self, reference: &str) -> Result<PixelBuffer> {
        let bytes = self
            .images
            .get(reference)
            .ok_or_else(|| ColorError::image_load_msg(format!("Image not found: {}", reference)))?;
        decode_image(bytes)
    }
}

impl<F> ImageFetcher for F
where
    F: Fn(&str) -> Result<PixelBuffer>,
{
    fn fetch(&self, reference: &str) -> Result<PixelBuffer> {
        self(reference)
    }
}
