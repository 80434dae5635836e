use crate::core::data::colour::PixelColour;

pub trait ColourMap<T> {
    fn map(&self, value: T) -> PixelColour;
}
