use super::types::{Mask, BACKGROUND, FOREGROUND};
use crate::error::{Error, Result};
use crate::frame::Image;

/// Largest hue on the 8-bit scale (degrees halved).
pub const MAX_HUE: u8 = 180;

/// Inclusive per-channel HSV bounds selecting the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl Default for HsvRange {
    /// Green and yellow-green hues, skipping shadows and washed-out pixels.
    fn default() -> Self {
        Self {
            lower: [30, 40, 40],
            upper: [90, 255, 255],
        }
    }
}

impl HsvRange {
    pub fn validate(&self) -> Result<()> {
        if self.upper[0] > MAX_HUE {
            return Err(Error::InvalidConfig(format!(
                "upper hue {} exceeds {}",
                self.upper[0], MAX_HUE
            )));
        }
        for (channel, name) in ["hue", "saturation", "value"].iter().enumerate() {
            if self.lower[channel] > self.upper[channel] {
                return Err(Error::InvalidConfig(format!(
                    "{} lower bound {} is above upper bound {}",
                    name, self.lower[channel], self.upper[channel]
                )));
            }
        }
        Ok(())
    }

    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }

    /// Build a mask from an HSV image (channel order H, S, V)
    pub fn threshold(&self, hsv: &Image) -> Mask {
        let _span = tracing::debug_span!("threshold").entered();

        let (height, width, _) = hsv.dim();
        Mask::from_shape_fn((height, width), |(y, x)| {
            if self.contains([hsv[[y, x, 0]], hsv[[y, x, 1]], hsv[[y, x, 2]]]) {
                FOREGROUND
            } else {
                BACKGROUND
            }
        })
    }
}
