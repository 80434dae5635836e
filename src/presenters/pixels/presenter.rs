use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::controllers::ports::presenter::{FramePresenterPort, PresentError};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::raster::RasterDimensions;

/// Blits frames onto a window through a `pixels` surface, which scales the
/// raster to the window size.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    buffer_dims: RasterDimensions,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, dims: RasterDimensions) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(dims.width(), dims.height(), surface_texture)?;

        Ok(Self {
            pixels,
            buffer_dims: dims,
        })
    }

    /// Shows the last presented frame again, e.g. after the window was exposed.
    pub fn redisplay(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}

impl FramePresenterPort for PixelsPresenter {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), PresentError> {
        let dims = frame.dimensions();

        if dims != self.buffer_dims {
            self.pixels.resize_buffer(dims.width(), dims.height())?;
            self.buffer_dims = dims;
        }

        frame.copy_into_rgba(self.pixels.frame_mut())?;
        self.pixels.render()?;

        Ok(())
    }
}
