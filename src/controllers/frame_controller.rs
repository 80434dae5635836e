use std::time::{Duration, Instant};

use thiserror::Error;

use crate::controllers::commands::{Command, PanDirection};
use crate::controllers::ports::presenter::{FramePresenterPort, PresentError};
use crate::core::actions::compute_frame::compute_frame::{ComputeFrameError, compute_frame_using};
use crate::core::data::explorer_config::ExplorerConfig;
use crate::core::data::raster::RasterDimensions;
use crate::core::data::viewport::Viewport;
use crate::core::errors::ConfigurationError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameState {
    /// The presented frame no longer matches the view.
    Dirty,
    /// The presented frame is current; rendering is skipped.
    Clean,
    /// Quit was requested. Nothing else is accepted.
    Terminated,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Presented { duration: Duration },
    Skipped,
}

#[derive(Debug, Error)]
pub enum FrameControllerError {
    #[error("frame computation failed: {0}")]
    Compute(#[from] ComputeFrameError),

    #[error("presenting frame failed: {0}")]
    Present(#[source] PresentError),

    #[error("controller has quit")]
    Terminated,
}

/// Owns the view state and decides when a frame must be recomputed.
///
/// Commands mark the frame dirty; `render` recomputes and presents only when
/// dirty. Only the thread driving the controller touches the viewport, and
/// workers get a copy of it for the duration of one frame.
pub struct FrameController<P: FramePresenterPort> {
    config: ExplorerConfig,
    dims: RasterDimensions,
    viewport: Viewport,
    state: FrameState,
    presenter: P,
    frames_presented: u64,
}

impl<P: FramePresenterPort> FrameController<P> {
    pub fn new(config: ExplorerConfig, presenter: P) -> Result<Self, ConfigurationError> {
        config.validate()?;

        Ok(Self {
            dims: config.dimensions()?,
            viewport: config.viewport,
            config,
            state: FrameState::Dirty,
            presenter,
            frames_presented: 0,
        })
    }

    pub fn apply(&mut self, command: Command) -> Result<(), FrameControllerError> {
        match command {
            Command::ZoomIn => self.zoom_in(),
            Command::ZoomOut => self.zoom_out(),
            Command::Pan(direction) => self.pan(direction),
            Command::Resize(dims) => self.resize(dims),
            Command::Quit => {
                self.quit();
                Ok(())
            }
        }
    }

    pub fn zoom_in(&mut self) -> Result<(), FrameControllerError> {
        let factor = 1.0 / self.config.zoom_step;

        self.update(|controller| controller.viewport.zoom(factor))
    }

    pub fn zoom_out(&mut self) -> Result<(), FrameControllerError> {
        let factor = self.config.zoom_step;

        self.update(|controller| controller.viewport.zoom(factor))
    }

    pub fn pan(&mut self, direction: PanDirection) -> Result<(), FrameControllerError> {
        let (unit_re, unit_im) = direction.unit_offset();
        let step = self.config.pan_step;

        self.update(|controller| controller.viewport.pan(unit_re * step, unit_im * step))
    }

    pub fn resize(&mut self, dims: RasterDimensions) -> Result<(), FrameControllerError> {
        self.update(|controller| controller.dims = dims)
    }

    pub fn quit(&mut self) {
        if self.state != FrameState::Terminated {
            log::debug!("frame controller terminated after {} frames", self.frames_presented);
        }

        self.state = FrameState::Terminated;
    }

    /// Recomputes and presents the frame if anything changed since the last
    /// successful render. A presenter failure leaves the frame dirty.
    pub fn render(&mut self) -> Result<RenderOutcome, FrameControllerError> {
        match self.state {
            FrameState::Terminated => return Err(FrameControllerError::Terminated),
            FrameState::Clean => return Ok(RenderOutcome::Skipped),
            FrameState::Dirty => {}
        }

        let start = Instant::now();
        let frame = compute_frame_using(
            self.dims,
            self.viewport,
            self.config.max_iterations,
            self.config.parallelism,
            self.config.executor,
        )?;

        self.presenter.present(&frame).map_err(FrameControllerError::Present)?;

        let duration = start.elapsed();
        self.state = FrameState::Clean;
        self.frames_presented += 1;

        log::debug!(
            "frame {} presented in {:?}, view re [{}, {}] im [{}, {}]",
            self.frames_presented,
            duration,
            self.viewport.re_min(),
            self.viewport.re_max(),
            self.viewport.im_min(),
            self.viewport.im_max()
        );

        Ok(RenderOutcome::Presented { duration })
    }

    fn update(&mut self, change: impl FnOnce(&mut Self)) -> Result<(), FrameControllerError> {
        if self.state == FrameState::Terminated {
            log::warn!("command ignored, controller has quit");
            return Err(FrameControllerError::Terminated);
        }

        change(self);
        self.state = FrameState::Dirty;

        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> FrameState {
        self.state
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state == FrameState::Terminated
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn dimensions(&self) -> RasterDimensions {
        self.dims
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
