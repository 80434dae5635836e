#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PixelColour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PixelColour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
}
