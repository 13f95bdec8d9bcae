//! Error types for asset generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for asset operations
pub type Result<T> = std::result::Result<T, AssetError>;

/// Errors that can occur while generating or verifying assets
#[derive(Error, Debug)]
pub enum AssetError {
    /// Reading or writing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The zlib stream for an IDAT chunk could not be produced
    #[error("zlib compression failed: {0}")]
    Compress(#[source] std::io::Error),

    /// Encoding or decoding through the `image` crate failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Malformed JSON configuration or glyph map
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A color string that is not `#rrggbb` or `#rrggbbaa`
    #[error("invalid color {0:?}, expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    /// Zero-sized or oversized image
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length does not match `width * height * channels`
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    PixelBufferSize { expected: usize, actual: usize },

    /// Bitmap font could not be built
    #[error("font error: {0}")]
    Font(String),

    /// A generated file does not match what the configuration describes
    #[error("verification failed: {0}")]
    Verify(String),
}

impl AssetError {
    /// Wrap an `io::Error` together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssetError::Io { path: path.into(), source }
    }
}
