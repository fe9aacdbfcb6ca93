mod png;

pub use png::PngDirectory;

use crate::error::Result;
use crate::frame::Image;

/// Trait for output destinations
pub trait OutputSink {
    /// Write an image under the given name
    fn write_image(&mut self, name: &str, image: &Image) -> Result<()>;
}
