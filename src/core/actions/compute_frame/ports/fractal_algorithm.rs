use crate::core::data::raster::PixelCoordinate;

pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: PixelCoordinate) -> Self::Success;
}
