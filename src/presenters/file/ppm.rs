use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::controllers::ports::presenter::{FramePresenterPort, PresentError};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::storage::write_ppm::write_ppm;

/// Headless display: every presented frame overwrites one PPM file.
#[derive(Debug, Clone)]
pub struct PpmFilePresenter {
    path: PathBuf,
}

impl FramePresenterPort for PpmFilePresenter {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), PresentError> {
        let file = File::create(&self.path)?;
        write_ppm(frame, BufWriter::new(file))?;

        log::info!("saved frame to {}", self.path.display());
        Ok(())
    }
}

impl PpmFilePresenter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::raster::RasterDimensions;

    #[test]
    fn test_present_writes_file() {
        let path = std::env::temp_dir().join(format!("ppm_presenter_{}.ppm", std::process::id()));
        let mut presenter = PpmFilePresenter::new(&path);
        let frame = FrameBuffer::new(RasterDimensions::new(3, 2).unwrap());

        presenter.present(&frame).unwrap();

        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), "P6\n3 2\n255\n".len() + 18);
    }

    #[test]
    fn test_present_reports_unwritable_path() {
        let path = std::env::temp_dir().join("missing_dir_for_ppm_presenter").join("frame.ppm");
        let mut presenter = PpmFilePresenter::new(path);
        let frame = FrameBuffer::new(RasterDimensions::new(1, 1).unwrap());

        assert!(presenter.present(&frame).is_err());
    }
}
