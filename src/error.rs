//! Error types for the lookboard_colors library

use thiserror::Error;

/// Result type alias for lookboard_colors operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error taxonomy for color conversion, extraction and matching
#[derive(Error, Debug)]
pub enum ColorError {
    /// Hex input did not match `#?RRGGBB`
    #[error("Invalid color format: {input:?}")]
    InvalidColorFormat { input: String },

    /// Image could not be fetched, decoded, or held no pixel data
    #[error("Failed to load image: {message}")]
    ImageLoadFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Every image of a batch failed (or the batch was empty)
    #[error("No colors could be extracted from {attempted} image(s)")]
    NoColorsExtracted { attempted: usize },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl ColorError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an image load error that has no underlying cause
    pub fn image_load_msg(message: impl Into<String>) -> Self {
        Self::ImageLoadFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid color error for the given input
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error can be skipped when it happens inside a batch
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ColorError::ImageLoadFailed { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidColorFormat { input } => {
                format!("\"{}\" is not a valid color. Use a hex value like #FF6B6B.", input)
            }
            ColorError::ImageLoadFailed { .. } => {
                "Could not load the image. Please check the link or file and try again.".to_string()
            }
            ColorError::NoColorsExtracted { .. } => {
                "No colors could be extracted from this lookboard. Please add images and try again."
                    .to_string()
            }
            ColorError::InvalidParameter { .. } => {
                "Color suggestions are misconfigured. Please try again later.".to_string()
            }
        }
    }
}
