use super::types::{Mask, FOREGROUND};
use crate::error::Result;
use crate::frame::{self, Image};
use image::imageops::{self, FilterType};
use ndarray::Array3;

/// Preprocessor for bringing images to a fixed size and into HSV space
pub struct Preprocessor {
    target_width: u32,
    target_height: u32,
    filter: FilterType,
}

impl Preprocessor {
    pub fn new(target_width: u32, target_height: u32, filter: FilterType) -> Self {
        Self {
            target_width,
            target_height,
            filter,
        }
    }

    /// Resize an RGB image to the target dimensions
    ///
    /// Returns a fresh buffer even when no resize is needed; the input is
    /// never modified.
    pub fn normalize(&self, image: &Image) -> Result<Image> {
        let _span = tracing::debug_span!("resize").entered();

        frame::validate(image)?;
        let (height, width, _) = image.dim();

        if (width as u32, height as u32) == (self.target_width, self.target_height) {
            return Ok(image.clone());
        }

        let rgb = frame::to_rgb(image)?;
        let resized = imageops::resize(&rgb, self.target_width, self.target_height, self.filter);
        Ok(frame::from_rgb(&resized))
    }

    /// Convert an RGB image to 8-bit HSV, channel order H, S, V
    ///
    /// Hue is on the 0..=180 scale, saturation and value on 0..=255.
    pub fn to_hsv(image: &Image) -> Image {
        let _span = tracing::debug_span!("hsv").entered();

        let (height, width, _) = image.dim();
        let mut hsv = Array3::<u8>::zeros((height, width, 3));

        for y in 0..height {
            for x in 0..width {
                let [h, s, v] = rgb_to_hsv(image[[y, x, 0]], image[[y, x, 1]], image[[y, x, 2]]);
                hsv[[y, x, 0]] = h;
                hsv[[y, x, 1]] = s;
                hsv[[y, x, 2]] = v;
            }
        }

        hsv
    }

    /// Convert mask to grayscale RGB image for visualization
    pub fn mask_to_rgb(mask: &Mask) -> Image {
        Array3::from_shape_fn((mask.nrows(), mask.ncols(), 3), |(y, x, _)| mask[[y, x]])
    }

    /// Keep pixels under foreground mask entries, zero the rest
    pub fn apply_mask(image: &Image, mask: &Mask) -> Image {
        Array3::from_shape_fn(image.dim(), |(y, x, c)| {
            if mask[[y, x]] == FOREGROUND {
                image[[y, x, c]]
            } else {
                0
            }
        })
    }
}

const HSV_SHIFT: i32 = 12;
const HSV_ROUND: i32 = 1 << (HSV_SHIFT - 1);

/// `round((255 << HSV_SHIFT) / v)`, indexed by value.
const SATURATION_DIV: [i32; 256] = reciprocal_table(255 << HSV_SHIFT, 1);
/// `round((180 << HSV_SHIFT) / (6 * diff))`, indexed by chroma.
const HUE_DIV: [i32; 256] = reciprocal_table(180 << HSV_SHIFT, 6);

const fn reciprocal_table(numerator: i32, scale: i32) -> [i32; 256] {
    let mut table = [0; 256];
    let mut i = 1;
    while i < 256 {
        let d = scale * i as i32;
        table[i] = (2 * numerator + d) / (2 * d);
        i += 1;
    }
    table
}

/// Convert RGB to HSV color space
///
/// Fixed-point arithmetic with 12 fractional bits, bit-exact with OpenCV's
/// 8-bit `RGB2HSV` (hue range 180).
fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (r, g, b) = (r as i32, g as i32, b as i32);

    let v = r.max(g).max(b);
    let diff = v - r.min(g).min(b);

    let s = (diff * SATURATION_DIV[v as usize] + HSV_ROUND) >> HSV_SHIFT;

    // Position within the hexcone, in units of one sixth of a turn times diff.
    let sector = if v == r {
        g - b
    } else if v == g {
        b - r + 2 * diff
    } else {
        r - g + 4 * diff
    };
    let h = (sector * HUE_DIV[diff as usize] + HSV_ROUND) >> HSV_SHIFT;
    let h = if h < 0 { h + 180 } else { h };

    [h as u8, s as u8, v as u8]
}
