use std::panic::{self, AssertUnwindSafe};
use std::thread;
use std::time::Instant;

use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::PixelColour;
use crate::core::data::explorer_config::TileExecutor;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::raster::{PixelCoordinate, RasterDimensions};
use crate::core::data::tile::{Tile, partition_columns};
use crate::core::data::viewport::Viewport;
use crate::core::errors::ConfigurationError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotHsvColourMap;

#[derive(Debug, Error)]
pub enum ComputeFrameError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("worker for columns {}..{} panicked", .tile.start, .tile.end)]
    WorkerPanicked { tile: Tile },

    #[error("frame buffer error: {0}")]
    FrameBuffer(#[from] FrameBufferError),
}

/// Colours computed by one worker, column-major within its tile.
#[derive(Debug)]
struct TileOutput {
    tile: Tile,
    colours: Vec<PixelColour>,
}

fn tile_pixels(tile: Tile, height: u32) -> impl Iterator<Item = PixelCoordinate> {
    tile.columns()
        .flat_map(move |x| (0..height).map(move |y| PixelCoordinate { x, y }))
}

fn evaluate_tile<Alg, CMap>(tile: Tile, height: u32, algorithm: &Alg, colour_map: &CMap) -> TileOutput
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let mut colours = Vec::with_capacity(tile.width() as usize * height as usize);

    for pixel in tile_pixels(tile, height) {
        colours.push(colour_map.map(algorithm.compute(pixel)));
    }

    log::trace!("tile {}..{} done", tile.start, tile.end);

    TileOutput { tile, colours }
}

fn run_scoped_threads<Alg, CMap>(
    tiles: &[Tile],
    height: u32,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<Vec<TileOutput>, ComputeFrameError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    thread::scope(|scope| {
        let handles = tiles
            .iter()
            .map(|&tile| {
                (tile, scope.spawn(move || evaluate_tile(tile, height, algorithm, colour_map)))
            })
            .collect::<Vec<_>>();

        // join every handle before reporting, so no panic escapes the scope
        handles
            .into_iter()
            .map(|(tile, handle)| handle.join().map_err(|_| ComputeFrameError::WorkerPanicked { tile }))
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    })
}

fn run_rayon<Alg, CMap>(
    tiles: &[Tile],
    height: u32,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<Vec<TileOutput>, ComputeFrameError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    tiles
        .par_iter()
        .map(|&tile| {
            panic::catch_unwind(AssertUnwindSafe(|| evaluate_tile(tile, height, algorithm, colour_map)))
                .map_err(|_| ComputeFrameError::WorkerPanicked { tile })
        })
        .collect()
}

fn merge_tiles(dims: RasterDimensions, outputs: Vec<TileOutput>) -> Result<FrameBuffer, FrameBufferError> {
    let mut frame = FrameBuffer::new(dims);

    for output in outputs {
        for (pixel, colour) in tile_pixels(output.tile, dims.height()).zip(output.colours) {
            frame.set_pixel(pixel, colour)?;
        }
    }

    Ok(frame)
}

/// Computes a whole frame with any algorithm and colour map.
///
/// The raster is split into column tiles, each tile is evaluated into a
/// buffer owned by its worker, and the buffers are merged after every worker
/// has joined. The frame is only returned once complete.
pub fn compute_frame_with<Alg, CMap>(
    dims: RasterDimensions,
    parallelism: usize,
    executor: TileExecutor,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<FrameBuffer, ComputeFrameError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let tiles = partition_columns(dims.width(), parallelism)?;
    let start = Instant::now();

    let outputs = match executor {
        TileExecutor::ScopedThreads => run_scoped_threads(&tiles, dims.height(), algorithm, colour_map)?,
        TileExecutor::Rayon => run_rayon(&tiles, dims.height(), algorithm, colour_map)?,
    };

    let frame = merge_tiles(dims, outputs)?;

    log::debug!(
        "computed {}x{} frame in {:?} ({} tiles, {:?})",
        dims.width(),
        dims.height(),
        start.elapsed(),
        tiles.len(),
        executor
    );

    Ok(frame)
}

/// Computes one Mandelbrot frame for `viewport` with the HSV colour map,
/// one scoped thread per tile.
pub fn compute_frame(
    dims: RasterDimensions,
    viewport: Viewport,
    max_iterations: u32,
    parallelism: usize,
) -> Result<FrameBuffer, ComputeFrameError> {
    compute_frame_using(dims, viewport, max_iterations, parallelism, TileExecutor::ScopedThreads)
}

pub fn compute_frame_using(
    dims: RasterDimensions,
    viewport: Viewport,
    max_iterations: u32,
    parallelism: usize,
    executor: TileExecutor,
) -> Result<FrameBuffer, ComputeFrameError> {
    let algorithm = MandelbrotAlgorithm::new(dims, viewport, max_iterations)?;
    let colour_map = MandelbrotHsvColourMap::new(max_iterations);

    compute_frame_with(dims, parallelism, executor, &algorithm, &colour_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Colours each pixel by its own coordinates so misplaced pixels show up.
    #[derive(Debug)]
    struct StubCoordinateAlgorithm {}

    impl FractalAlgorithm for StubCoordinateAlgorithm {
        type Success = PixelCoordinate;

        fn compute(&self, pixel: PixelCoordinate) -> PixelCoordinate {
            pixel
        }
    }

    #[derive(Debug)]
    struct StubCoordinateColourMap {}

    impl ColourMap<PixelCoordinate> for StubCoordinateColourMap {
        fn map(&self, pixel: PixelCoordinate) -> PixelColour {
            PixelColour {
                r: pixel.x as u8,
                g: pixel.y as u8,
                b: 1,
            }
        }
    }

    #[derive(Debug)]
    struct StubPanickingAlgorithm {
        panic_at_column: u32,
    }

    impl FractalAlgorithm for StubPanickingAlgorithm {
        type Success = PixelCoordinate;

        fn compute(&self, pixel: PixelCoordinate) -> PixelCoordinate {
            if pixel.x == self.panic_at_column {
                panic!("stub failure at column {}", pixel.x);
            }

            pixel
        }
    }

    const EXECUTORS: [TileExecutor; 2] = [TileExecutor::ScopedThreads, TileExecutor::Rayon];

    fn dims(width: u32, height: u32) -> RasterDimensions {
        RasterDimensions::new(width, height).unwrap()
    }

    fn assert_every_pixel_in_place(frame: &FrameBuffer) {
        let dims = frame.dimensions();

        for x in 0..dims.width() {
            for y in 0..dims.height() {
                let colour = frame.pixel(PixelCoordinate { x, y }).unwrap();

                assert_eq!(
                    colour,
                    PixelColour { r: x as u8, g: y as u8, b: 1 },
                    "pixel ({}, {}) missing or misplaced",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_every_pixel_written_once_for_any_parallelism() {
        for executor in EXECUTORS {
            for parallelism in [1, 2, 3, 7, 8, 16, 64] {
                let frame = compute_frame_with(
                    dims(37, 11),
                    parallelism,
                    executor,
                    &StubCoordinateAlgorithm {},
                    &StubCoordinateColourMap {},
                )
                .unwrap();

                assert_eq!(frame.bytes().len(), 37 * 11 * 3);
                assert_every_pixel_in_place(&frame);
            }
        }
    }

    #[test]
    fn test_single_pixel_raster() {
        let frame = compute_frame_with(
            dims(1, 1),
            8,
            TileExecutor::ScopedThreads,
            &StubCoordinateAlgorithm {},
            &StubCoordinateColourMap {},
        )
        .unwrap();

        assert_every_pixel_in_place(&frame);
    }

    #[test]
    fn test_compute_frame_is_deterministic() {
        let first = compute_frame(dims(64, 48), Viewport::default(), 100, 8).unwrap();
        let second = compute_frame(dims(64, 48), Viewport::default(), 100, 8).unwrap();

        assert_eq!(first.bytes(), second.bytes());
    }

    #[test]
    fn test_tile_count_does_not_change_frame() {
        let serial = compute_frame(dims(101, 40), Viewport::default(), 100, 1).unwrap();
        let parallel = compute_frame(dims(101, 40), Viewport::default(), 100, 8).unwrap();

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_executor_does_not_change_frame() {
        let mut viewport = Viewport::default();
        viewport.zoom(0.5);
        viewport.pan(-0.3, 0.1);

        let scoped = compute_frame_using(dims(80, 60), viewport, 64, 6, TileExecutor::ScopedThreads).unwrap();
        let rayon = compute_frame_using(dims(80, 60), viewport, 64, 6, TileExecutor::Rayon).unwrap();

        assert_eq!(scoped, rayon);
    }

    #[test]
    fn test_frame_matches_per_pixel_pipeline() {
        let dims = dims(20, 10);
        let viewport = Viewport::default();
        let algorithm = MandelbrotAlgorithm::new(dims, viewport, 50).unwrap();
        let colour_map = MandelbrotHsvColourMap::new(50);
        let frame = compute_frame(dims, viewport, 50, 3).unwrap();

        for x in 0..dims.width() {
            for y in 0..dims.height() {
                let pixel = PixelCoordinate { x, y };

                assert_eq!(frame.pixel(pixel).unwrap(), colour_map.map(algorithm.compute(pixel)));
            }
        }
    }

    #[test]
    fn test_interior_pixels_are_black() {
        // a tiny viewport around the origin lies inside the main cardioid
        let viewport = Viewport::new(-0.1, 0.1, -0.1, 0.1).unwrap();
        let frame = compute_frame(dims(16, 16), viewport, 100, 4).unwrap();

        assert!(frame.bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_exterior_pixels_escape_immediately() {
        // every point here has |c| > 2, so n = 1 and hue = 360 * 1 / 100 = 3 degrees
        let viewport = Viewport::new(3.0, 4.0, 3.0, 4.0).unwrap();
        let frame = compute_frame(dims(8, 8), viewport, 100, 2).unwrap();
        let expected = MandelbrotHsvColourMap::new(100).map(1);

        for x in 0..8 {
            for y in 0..8 {
                assert_eq!(frame.pixel(PixelCoordinate { x, y }).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_zero_parallelism_is_a_configuration_error() {
        let result = compute_frame(dims(10, 10), Viewport::default(), 100, 0);

        assert!(matches!(
            result,
            Err(ComputeFrameError::Configuration(ConfigurationError::ZeroParallelism))
        ));
    }

    #[test]
    fn test_zero_max_iterations_is_a_configuration_error() {
        let result = compute_frame(dims(10, 10), Viewport::default(), 0, 4);

        assert!(matches!(
            result,
            Err(ComputeFrameError::Configuration(ConfigurationError::ZeroMaxIterations))
        ));
    }

    #[test]
    fn test_worker_panic_is_reported_with_its_tile() {
        for executor in EXECUTORS {
            let result = compute_frame_with(
                dims(12, 4),
                4,
                executor,
                &StubPanickingAlgorithm { panic_at_column: 7 },
                &StubCoordinateColourMap {},
            );

            match result {
                Err(ComputeFrameError::WorkerPanicked { tile }) => {
                    assert_eq!(tile, Tile { start: 6, end: 9 });
                }
                other => panic!("expected a worker panic, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_error_displays_tile_columns() {
        let err = ComputeFrameError::WorkerPanicked { tile: Tile { start: 6, end: 9 } };

        assert_eq!(err.to_string(), "worker for columns 6..9 panicked");
    }
}
