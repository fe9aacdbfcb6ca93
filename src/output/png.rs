use super::OutputSink;
use crate::error::Result;
use crate::frame::{self, Image};
use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes each image as `<name>.png` inside a directory.
pub struct PngDirectory {
    dir: PathBuf,
}

impl PngDirectory {
    /// Create the directory (and parents) if missing.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        tracing::info!("Writing images to {}", dir.display());

        fs::create_dir_all(dir)?;

        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }
}

impl OutputSink for PngDirectory {
    fn write_image(&mut self, name: &str, image: &Image) -> Result<()> {
        let path = self.path_for(name);
        let rgb = frame::to_rgb(image)?;

        rgb.save_with_format(&path, ImageFormat::Png)?;
        tracing::debug!("Wrote {}", path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn written_png_reads_back_identical() {
        let dir = std::env::temp_dir().join(format!("segrle-png-{}", std::process::id()));
        let image = Array3::from_shape_fn((4, 5, 3), |(y, x, c)| (y * 50 + x * 10 + c) as u8);

        let mut sink = PngDirectory::new(&dir).unwrap();
        sink.write_image("sample", &image).unwrap();

        let bytes = fs::read(sink.path_for("sample")).unwrap();
        let restored = crate::input::load_image(&bytes).unwrap();
        assert_eq!(restored, image);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn rejects_non_rgb_image() {
        let dir = std::env::temp_dir().join(format!("segrle-png-bad-{}", std::process::id()));
        let mut sink = PngDirectory::new(&dir).unwrap();
        assert!(sink.write_image("gray", &Image::zeros((2, 2, 1))).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
