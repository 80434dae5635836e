use crate::core::data::frame_buffer::FrameBuffer;

pub type PresentError = Box<dyn std::error::Error + Send + Sync>;

/// Display side of the controller: receives each freshly computed frame.
pub trait FramePresenterPort {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), PresentError>;
}
