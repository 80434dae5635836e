use crate::core::data::complex::ComplexPoint;
use crate::core::data::raster::{PixelCoordinate, RasterDimensions};
use crate::core::data::viewport::Viewport;

/// Maps a pixel to its point in the viewport.
///
/// Pixel `(0, 0)` lands on `(re_min, im_min)`; the far edge `(width, height)`
/// would land on the max bounds, so the last pixel stops one step short.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel: PixelCoordinate,
    dims: RasterDimensions,
    viewport: &Viewport,
) -> ComplexPoint {
    let re = viewport.re_min() + (pixel.x as f64 / dims.width() as f64) * viewport.width();
    let im = viewport.im_min() + (pixel.y as f64 / dims.height() as f64) * viewport.height();

    ComplexPoint { re, im }
}
