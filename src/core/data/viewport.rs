use crate::core::errors::ConfigurationError;

/// Visible rectangle of the complex plane.
///
/// Bounds are validated once at construction. `zoom` and `pan` are unchecked
/// so callers stepping by a validated zoom/pan step keep the invariant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    re_min: f64,
    re_max: f64,
    im_min: f64,
    im_max: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            re_min: -2.0,
            re_max: 1.0,
            im_min: -1.0,
            im_max: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Result<Self, ConfigurationError> {
        let viewport = Self { re_min, re_max, im_min, im_max };
        viewport.validate()?;

        Ok(viewport)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let finite = [self.re_min, self.re_max, self.im_min, self.im_max]
            .iter()
            .all(|bound| bound.is_finite());

        if !finite || self.re_min >= self.re_max || self.im_min >= self.im_max {
            return Err(ConfigurationError::InvalidViewport {
                re_min: self.re_min,
                re_max: self.re_max,
                im_min: self.im_min,
                im_max: self.im_max,
            });
        }

        Ok(())
    }

    /// Scales every bound by `factor`. The anchor is the plane origin, not the
    /// centre of the view, so an off-centre view also drifts while zooming.
    pub fn zoom(&mut self, factor: f64) {
        self.re_min *= factor;
        self.re_max *= factor;
        self.im_min *= factor;
        self.im_max *= factor;
    }

    pub fn pan(&mut self, d_re: f64, d_im: f64) {
        self.re_min += d_re;
        self.re_max += d_re;
        self.im_min += d_im;
        self.im_max += d_im;
    }

    #[must_use]
    pub fn re_min(&self) -> f64 {
        self.re_min
    }

    #[must_use]
    pub fn re_max(&self) -> f64 {
        self.re_max
    }

    #[must_use]
    pub fn im_min(&self) -> f64 {
        self.im_min
    }

    #[must_use]
    pub fn im_max(&self) -> f64 {
        self.im_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.re_max - self.re_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.im_max - self.im_min
    }
}
