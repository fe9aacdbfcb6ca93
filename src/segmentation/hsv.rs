use super::morphology;
use super::preprocess::Preprocessor;
use super::threshold::HsvRange;
use super::types::{Mask, Segmentation, Segmenter};
use crate::error::{Error, Result};
use crate::frame::Image;
use image::imageops::FilterType;

/// Settings for [`HsvSegmenter`].
///
/// # Default Configuration
/// - Output size: 200x200, bilinear (`Triangle`) resampling
/// - Foreground: hue 30..=90, saturation 40..=255, value 40..=255
/// - Opening with a 3x3 square element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentConfig {
    pub target_width: u32,
    pub target_height: u32,
    pub filter: FilterType,
    pub range: HsvRange,
    /// Side of the square structuring element. Must be odd.
    pub kernel_size: usize,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            target_width: 200,
            target_height: 200,
            filter: FilterType::Triangle,
            range: HsvRange::default(),
            kernel_size: 3,
        }
    }
}

impl SegmentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 || self.target_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "target size {}x{} has a zero dimension",
                self.target_width, self.target_height
            )));
        }
        if self.kernel_size % 2 == 0 {
            return Err(Error::InvalidConfig(format!(
                "kernel size {} must be odd and at least 1",
                self.kernel_size
            )));
        }
        self.range.validate()
    }
}

/// Segmenter that keeps pixels whose HSV color falls in a fixed band
///
/// Background pixels are zeroed, which turns most of a typical product shot
/// into a few long runs of black.
pub struct HsvSegmenter {
    config: SegmentConfig,
    preprocessor: Preprocessor,
}

impl HsvSegmenter {
    pub fn new(config: SegmentConfig) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            "HSV segmenter: {}x{}, range {:?}..={:?}, kernel {}",
            config.target_width,
            config.target_height,
            config.range.lower,
            config.range.upper,
            config.kernel_size
        );

        let preprocessor =
            Preprocessor::new(config.target_width, config.target_height, config.filter);

        Ok(Self {
            config,
            preprocessor,
        })
    }

    pub fn config(&self) -> &SegmentConfig {
        &self.config
    }
}

impl Default for HsvSegmenter {
    fn default() -> Self {
        let config = SegmentConfig::default();
        let preprocessor =
            Preprocessor::new(config.target_width, config.target_height, config.filter);
        Self {
            config,
            preprocessor,
        }
    }
}

impl Segmenter for HsvSegmenter {
    fn segment(&self, image: &Image) -> Result<Segmentation> {
        let _span = tracing::debug_span!("hsv_segment").entered();

        let normalized = self.preprocessor.normalize(image)?;
        let mask = self.mask(&normalized)?;
        let segmented = Preprocessor::apply_mask(&normalized, &mask);

        Ok(Segmentation {
            normalized,
            segmented,
            mask,
        })
    }

    fn mask(&self, normalized: &Image) -> Result<Mask> {
        crate::frame::validate(normalized)?;

        let hsv = Preprocessor::to_hsv(normalized);
        let mask = self.config.range.threshold(&hsv);
        let opened = morphology::open(&mask, self.config.kernel_size);

        tracing::debug!(
            "Foreground pixels: {} before opening, {} after",
            mask.iter().filter(|&&v| v != 0).count(),
            opened.iter().filter(|&&v| v != 0).count()
        );

        Ok(opened)
    }

    fn output_size(&self) -> (u32, u32) {
        (self.config.target_width, self.config.target_height)
    }
}
