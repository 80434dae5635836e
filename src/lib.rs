mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use controllers::commands::{Command, PanDirection};
pub use controllers::frame_controller::{FrameController, FrameControllerError, FrameState, RenderOutcome};
pub use controllers::ports::presenter::{FramePresenterPort, PresentError};
pub use crate::core::actions::compute_frame::compute_frame::{
    ComputeFrameError, compute_frame, compute_frame_using, compute_frame_with,
};
pub use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::data::colour::PixelColour;
pub use crate::core::data::complex::ComplexPoint;
pub use crate::core::data::explorer_config::{ExplorerConfig, TileExecutor};
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
pub use crate::core::data::raster::{PixelCoordinate, RasterDimensions};
pub use crate::core::data::tile::{Tile, partition_columns};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::errors::ConfigurationError;
pub use crate::core::fractals::mandelbrot::algorithm::{ESCAPE_RADIUS, MandelbrotAlgorithm, escape_time};
pub use crate::core::fractals::mandelbrot::colour_map::{MandelbrotHsvColourMap, hsv_to_rgb};
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
pub use presenters::file::ppm::PpmFilePresenter;
pub use storage::write_ppm::write_ppm;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
