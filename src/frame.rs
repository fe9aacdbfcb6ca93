//! In-memory image representation and the flat pixel ordering the codec relies on.
//!
//! An [`Image`] is indexed `[[y, x, channel]]`. Channels are always in R, G, B
//! order, the order produced by the `image` crate decoders.

use crate::error::{Error, Result};
use image::{Rgb, RgbImage};
use ndarray::Array3;

/// Pixel buffer with shape `(height, width, channels)`.
pub type Image = Array3<u8>;

/// Number of channels every segmenter input must carry.
pub const CHANNELS: usize = 3;

/// Reject images with a zero dimension or a channel count other than 3.
pub fn validate(image: &Image) -> Result<()> {
    let (height, width, channels) = image.dim();
    if height == 0 || width == 0 || channels != CHANNELS {
        return Err(Error::InvalidImage {
            height,
            width,
            channels,
        });
    }
    Ok(())
}

pub fn from_rgb(rgb: &RgbImage) -> Image {
    let (width, height) = rgb.dimensions();
    Array3::from_shape_fn(
        (height as usize, width as usize, CHANNELS),
        |(y, x, c)| rgb.get_pixel(x as u32, y as u32)[c],
    )
}

pub fn to_rgb(image: &Image) -> Result<RgbImage> {
    validate(image)?;
    let (height, width, _) = image.dim();
    Ok(RgbImage::from_fn(width as u32, height as u32, |x, y| {
        let (x, y) = (x as usize, y as usize);
        Rgb([image[[y, x, 0]], image[[y, x, 1]], image[[y, x, 2]]])
    }))
}

/// Flatten row by row, each pixel contributing its channels in order.
pub fn flatten(image: &Image) -> Vec<u8> {
    // Logical iteration order is row-major whatever the memory layout.
    image.iter().copied().collect()
}

/// Inverse of [`flatten`].
pub fn unflatten(data: Vec<u8>, height: usize, width: usize, channels: usize) -> Result<Image> {
    if height == 0 || width == 0 || channels == 0 {
        return Err(Error::InvalidImage {
            height,
            width,
            channels,
        });
    }
    let expected = height * width * channels;
    let actual = data.len();
    if actual != expected {
        return Err(Error::ShapeMismatch { expected, actual });
    }
    Array3::from_shape_vec((height, width, channels), data)
        .map_err(|_| Error::ShapeMismatch { expected, actual })
}
