//! Error type shared by the segmenter, the codec and the image helpers.

/// Errors produced by the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The image has a zero dimension or a channel count other than 3.
    #[error("invalid image: {height}x{width}x{channels}")]
    InvalidImage {
        height: usize,
        width: usize,
        channels: usize,
    },

    /// A run in a compressed sequence has a count of zero.
    #[error("invalid run at index {index}: count {count}")]
    InvalidRun { index: usize, count: usize },

    /// A flat buffer does not hold exactly `height * width * channels` samples.
    #[error("shape mismatch: expected {expected} samples, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Segmenter configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Image bytes could not be decoded, or an image could not be written.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Decoded output is too large to allocate.
    #[error("allocation failed: {0}")]
    Allocation(#[from] std::collections::TryReserveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
