//! Color segmentation and lossless run-length coding of image buffers.
//!
//! The pipeline is: [`segmentation::segment`] an image so its background is
//! black, [`frame::flatten`] it, [`codec::encode`] the samples into runs, and
//! [`codec::decode`] them back.

pub mod codec;
pub mod error;
pub mod frame;
pub mod input;
pub mod output;
pub mod segmentation;

pub use error::{Error, Result};
pub use frame::Image;
