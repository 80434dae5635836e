use crate::core::errors::ConfigurationError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelCoordinate {
    pub x: u32,
    pub y: u32,
}

/// Raster size in pixels. Both sides are non-zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RasterDimensions {
    width: u32,
    height: u32,
}

impl RasterDimensions {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigurationError> {
        if width == 0 || height == 0 {
            return Err(ConfigurationError::InvalidRasterDimensions { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains(&self, pixel: PixelCoordinate) -> bool {
        pixel.x < self.width && pixel.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
