use crate::core::data::colour::PixelColour;
use crate::core::data::raster::{PixelCoordinate, RasterDimensions};
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameBufferError {
    #[error("pixel at x:{}, y:{} outside of {}x{} raster", .pixel.x, .pixel.y, .dims.width(), .dims.height())]
    PixelOutsideBounds {
        pixel: PixelCoordinate,
        dims: RasterDimensions,
    },

    #[error("destination size {actual} does not match expected {expected}")]
    BoundsMismatch { expected: usize, actual: usize },
}

/// One complete frame of RGB pixels, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    dims: RasterDimensions,
    buffer: Vec<u8>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(dims: RasterDimensions) -> Self {
        Self {
            dims,
            buffer: vec![0; dims.size() * BYTES_PER_PIXEL],
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> RasterDimensions {
        self.dims
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    fn index_of(&self, pixel: PixelCoordinate) -> Result<usize, FrameBufferError> {
        if !self.dims.contains(pixel) {
            return Err(FrameBufferError::PixelOutsideBounds {
                pixel,
                dims: self.dims,
            });
        }

        let offset = pixel.y as usize * self.dims.width() as usize + pixel.x as usize;

        Ok(offset * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, pixel: PixelCoordinate, colour: PixelColour) -> Result<(), FrameBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, pixel: PixelCoordinate) -> Result<PixelColour, FrameBufferError> {
        let index = self.index_of(pixel)?;

        Ok(PixelColour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Copies the frame into an RGBA surface of the same raster, alpha 255.
    pub fn copy_into_rgba(&self, dst: &mut [u8]) -> Result<(), FrameBufferError> {
        let expected = self.dims.size() * 4;

        if dst.len() != expected {
            return Err(FrameBufferError::BoundsMismatch {
                expected,
                actual: dst.len(),
            });
        }

        for (src_pixel, dst_pixel) in self.buffer.chunks_exact(BYTES_PER_PIXEL).zip(dst.chunks_exact_mut(4)) {
            dst_pixel[..3].copy_from_slice(src_pixel);
            dst_pixel[3] = 255;
        }

        Ok(())
    }
}
