use std::io::{self, Write};

use crate::core::data::frame_buffer::FrameBuffer;

/// Writes a binary (P6) PPM image of the frame.
pub fn write_ppm<W: Write>(frame: &FrameBuffer, mut writer: W) -> io::Result<()> {
    let dims = frame.dimensions();

    // P6 = binary RGB, then width, height and max colour value
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", dims.width(), dims.height())?;
    writeln!(writer, "255")?;
    writer.write_all(frame.bytes())?;
    writer.flush()
}
