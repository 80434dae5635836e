use crate::core::data::raster::RasterDimensions;
use crate::core::data::viewport::Viewport;
use crate::core::errors::ConfigurationError;

const DEFAULT_WIDTH: u32 = 1000;
const DEFAULT_HEIGHT: u32 = 1000;
const DEFAULT_MAX_ITERATIONS: u32 = 100;
const DEFAULT_ZOOM_STEP: f64 = 1.02;
const DEFAULT_PAN_STEP: f64 = 0.03;
const DEFAULT_PARALLELISM: usize = 8;

/// How tiles are handed to workers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TileExecutor {
    /// A fresh cohort of scoped threads per frame, one per tile.
    #[default]
    ScopedThreads,
    /// Tiles submitted to rayon's global work-stealing pool.
    Rayon,
}

/// Startup settings, read once and immutable for the session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    /// Zoom in multiplies the viewport by `1 / zoom_step`, zoom out by `zoom_step`.
    pub zoom_step: f64,
    pub pan_step: f64,
    pub parallelism: usize,
    pub executor: TileExecutor,
    pub viewport: Viewport,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_step: DEFAULT_ZOOM_STEP,
            pan_step: DEFAULT_PAN_STEP,
            parallelism: DEFAULT_PARALLELISM,
            executor: TileExecutor::default(),
            viewport: Viewport::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.dimensions()?;

        if self.max_iterations == 0 {
            return Err(ConfigurationError::ZeroMaxIterations);
        }

        if self.parallelism == 0 {
            return Err(ConfigurationError::ZeroParallelism);
        }

        if !self.zoom_step.is_finite() || self.zoom_step <= 1.0 {
            return Err(ConfigurationError::InvalidZoomStep(self.zoom_step));
        }

        if !self.pan_step.is_finite() || self.pan_step <= 0.0 {
            return Err(ConfigurationError::InvalidPanStep(self.pan_step));
        }

        self.viewport.validate()
    }

    pub fn dimensions(&self) -> Result<RasterDimensions, ConfigurationError> {
        RasterDimensions::new(self.width, self.height)
    }
}
