use crate::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::ComplexPoint;
use crate::core::data::raster::{PixelCoordinate, RasterDimensions};
use crate::core::data::viewport::Viewport;
use crate::core::errors::ConfigurationError;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Any orbit leaving this radius diverges.
pub const ESCAPE_RADIUS: f64 = 2.0;
const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Counts how many `z = z² + c` steps, starting from zero, it takes for `|z|`
/// to exceed the escape radius. Returns `max_iterations` for points that never
/// escape within budget.
#[must_use]
pub fn escape_time(c: ComplexPoint, max_iterations: u32) -> u32 {
    let mut z = ComplexPoint::ZERO;
    let mut iterations = 0;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iterations < max_iterations {
        z = z * z + c;
        iterations += 1;
    }

    iterations
}

/// Escape-time evaluation bound to one frame's raster and viewport snapshot.
#[derive(Debug, Copy, Clone)]
pub struct MandelbrotAlgorithm {
    dims: RasterDimensions,
    viewport: Viewport,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(dims: RasterDimensions, viewport: Viewport, max_iterations: u32) -> Result<Self, ConfigurationError> {
        if max_iterations == 0 {
            return Err(ConfigurationError::ZeroMaxIterations);
        }

        Ok(Self { dims, viewport, max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: PixelCoordinate) -> u32 {
        let c = pixel_to_complex_coords(pixel, self.dims, &self.viewport);

        escape_time(c, self.max_iterations)
    }
}
