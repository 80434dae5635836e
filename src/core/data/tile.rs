use std::ops::Range;

use crate::core::errors::ConfigurationError;

/// Half-open column range `[start, end)` evaluated by one worker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tile {
    pub start: u32,
    pub end: u32,
}

impl Tile {
    #[must_use]
    pub fn columns(&self) -> Range<u32> {
        self.start..self.end
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.end - self.start
    }
}

/// Splits `[0, width)` into contiguous equal-width tiles.
///
/// The tile count is capped at `width` so no tile is empty, and the last
/// tile takes the columns left over by the integer division.
pub fn partition_columns(width: u32, parallelism: usize) -> Result<Vec<Tile>, ConfigurationError> {
    if parallelism == 0 {
        return Err(ConfigurationError::ZeroParallelism);
    }

    if width == 0 {
        return Err(ConfigurationError::InvalidRasterDimensions { width, height: 0 });
    }

    let tile_count = parallelism.min(width as usize) as u32;
    let tile_width = width / tile_count;

    let tiles = (0..tile_count)
        .map(|tile_idx| {
            let start = tile_idx * tile_width;
            let end = if tile_idx == tile_count - 1 {
                width
            } else {
                start + tile_width
            };

            Tile { start, end }
        })
        .collect();

    Ok(tiles)
}
