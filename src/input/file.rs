use super::{load_image, ImageSource};
use crate::error::Result;
use crate::frame::Image;
use std::path::{Path, PathBuf};

/// Image stored in a file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSource for FileSource {
    fn load(&mut self) -> Result<Image> {
        tracing::info!("Loading image from {}", self.path.display());

        let bytes = std::fs::read(&self.path)?;
        let image = load_image(&bytes)?;

        let (height, width, _) = image.dim();
        tracing::info!("Loaded {}x{} image", width, height);

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn missing_file_is_io_error() {
        let mut source = FileSource::new("/nonexistent/segrle/input.png");
        assert!(matches!(source.load(), Err(Error::Io(_))));
    }
}
