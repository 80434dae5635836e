use thiserror::Error;

/// Rejected startup settings. Raised before any frame is computed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("raster dimensions must be positive: {width}x{height}")]
    InvalidRasterDimensions { width: u32, height: u32 },

    #[error("parallelism must be greater than zero")]
    ZeroParallelism,

    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,

    #[error("zoom step must be finite and greater than 1, got {0}")]
    InvalidZoomStep(f64),

    #[error("pan step must be finite and greater than 0, got {0}")]
    InvalidPanStep(f64),

    #[error(
        "viewport bounds must be finite with min < max: re [{re_min}, {re_max}], im [{im_min}, {im_max}]"
    )]
    InvalidViewport {
        re_min: f64,
        re_max: f64,
        im_min: f64,
        im_max: f64,
    },
}
