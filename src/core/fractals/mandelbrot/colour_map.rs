use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::PixelColour;

/// Full-saturation hue wheel over the iteration budget. Interior points are black.
#[derive(Debug, Copy, Clone)]
pub struct MandelbrotHsvColourMap {
    max_iterations: u32,
}

impl MandelbrotHsvColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    /// Whole degrees; integer division keeps hues reproducible across platforms.
    fn hue_for(&self, iterations: u32) -> f64 {
        let max_iterations = u64::from(self.max_iterations.max(1));

        (360 * u64::from(iterations) / max_iterations) as f64
    }
}

impl ColourMap<u32> for MandelbrotHsvColourMap {
    fn map(&self, iterations: u32) -> PixelColour {
        let value = if iterations < self.max_iterations { 1.0 } else { 0.0 };

        hsv_to_rgb(self.hue_for(iterations), 1.0, value)
    }
}

/// Six-sector HSV to RGB. `hue` is in degrees, `saturation` and `value` in
/// `[0, 1]`. Channels are scaled by 255 and truncated.
///
/// A hue outside `[0, 360]` (or NaN) has no sector and comes out black.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> PixelColour {
    let h = if hue == 360.0 { 0.0 } else { hue / 60.0 };
    let fract = h - h.floor();

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fract);
    let t = value * (1.0 - saturation * (1.0 - fract));

    let (r, g, b) = if (0.0..1.0).contains(&h) {
        (value, t, p)
    } else if (1.0..2.0).contains(&h) {
        (q, value, p)
    } else if (2.0..3.0).contains(&h) {
        (p, value, t)
    } else if (3.0..4.0).contains(&h) {
        (p, q, value)
    } else if (4.0..5.0).contains(&h) {
        (t, p, value)
    } else if (5.0..6.0).contains(&h) {
        (value, p, q)
    } else {
        (0.0, 0.0, 0.0)
    };

    PixelColour {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

fn to_channel(component: f64) -> u8 {
    // `as` saturates, so out-of-range inputs clamp to 0..=255
    (component * 255.0) as u8
}
