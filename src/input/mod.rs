mod file;

pub use file::FileSource;

use crate::error::Result;
use crate::frame::{self, Image};

/// Trait for image sources
pub trait ImageSource {
    /// Load a single image with R, G, B channels
    fn load(&mut self) -> Result<Image>;
}

/// Decode PNG, JPEG or any other format the `image` crate recognizes
///
/// Alpha and grayscale inputs are converted to three-channel RGB.
pub fn load_image(bytes: &[u8]) -> Result<Image> {
    let _span = tracing::debug_span!("load_image", len = bytes.len()).entered();

    let decoded = image::load_from_memory(bytes)?;
    tracing::debug!(
        "Decoded {}x{} image ({:?})",
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(frame::from_rgb(&decoded.to_rgb8()))
}
