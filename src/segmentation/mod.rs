mod hsv;
pub mod morphology;
mod preprocess;
mod threshold;
pub mod types;

pub use hsv::{HsvSegmenter, SegmentConfig};
pub use preprocess::Preprocessor;
pub use threshold::{HsvRange, MAX_HUE};
pub use types::{Mask, Segmentation, Segmenter};

use crate::error::Result;
use crate::frame::Image;

/// Segment with the default HSV configuration
pub fn segment(image: &Image) -> Result<Segmentation> {
    HsvSegmenter::default().segment(image)
}
