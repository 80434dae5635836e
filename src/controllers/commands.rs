use crate::core::data::raster::RasterDimensions;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// Unit offset in (re, im). Up is towards `im_min`, matching the raster's
    /// top row.
    #[must_use]
    pub const fn unit_offset(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}

/// Abstract input the frame controller understands. Hosts translate their
/// raw device events into these.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    ZoomIn,
    ZoomOut,
    Pan(PanDirection),
    Resize(RasterDimensions),
    Quit,
}

impl Command {
    /// Shared keyboard binding: `w`/`a`/`s`/`d` pan, `+`/`=` and `-` zoom,
    /// `q` quits.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Self::Pan(PanDirection::Up)),
            's' => Some(Self::Pan(PanDirection::Down)),
            'a' => Some(Self::Pan(PanDirection::Left)),
            'd' => Some(Self::Pan(PanDirection::Right)),
            '+' | '=' => Some(Self::ZoomIn),
            '-' => Some(Self::ZoomOut),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}
