use crate::error::Result;
use crate::frame::Image;
use ndarray::Array2;

/// Binary mask: 255 = foreground, 0 = background.
/// Dimensions match the normalized image.
pub type Mask = Array2<u8>;

pub const FOREGROUND: u8 = 255;
pub const BACKGROUND: u8 = 0;

/// Result of segmenting one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    /// Input resized to the segmenter's output size.
    pub normalized: Image,
    /// `normalized` with every background pixel set to black.
    pub segmented: Image,
    /// Denoised foreground mask that produced `segmented`.
    pub mask: Mask,
}

/// Trait for segmenters
/// Allows swapping the color threshold rule for another foreground detector
pub trait Segmenter {
    /// Normalize `image` and black out its background
    ///
    /// # Arguments
    /// * `image` - Input image of any size with R, G, B channels
    ///
    /// # Returns
    /// * The normalized image, its segmented counterpart and the mask, all at `output_size()`
    fn segment(&self, image: &Image) -> Result<Segmentation>;

    /// Compute the foreground mask of an image already at `output_size()`
    fn mask(&self, normalized: &Image) -> Result<Mask>;

    /// Get the output dimensions
    ///
    /// Returns (width, height)
    fn output_size(&self) -> (u32, u32);
}
