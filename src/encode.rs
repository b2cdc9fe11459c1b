//! Writing a finished render out as a PNG.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::png::PNGEncoder;
use image::ColorType;

use buffer::PixelBuffer;
use errors::RenderError;

/// Encode the buffer as an 8-bit RGBA PNG onto any writer.
pub fn encode_png<W: Write>(buffer: &PixelBuffer, output: W) -> Result<(), RenderError> {
    let (width, height) = (buffer.width(), buffer.height());
    if width > u32::max_value() as usize || height > u32::max_value() as usize {
        return Err(RenderError::InvalidImageSpec { width, height });
    }
    let encoder = PNGEncoder::new(output);
    encoder.encode(
        &buffer.to_rgba_bytes(),
        width as u32,
        height as u32,
        ColorType::RGBA(8),
    )?;
    Ok(())
}

/// Create (or truncate) the file at `path` and write the buffer into
/// it as a PNG.
pub fn write_png<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> Result<(), RenderError> {
    let output = File::create(path.as_ref())?;
    let mut output = BufWriter::new(output);
    encode_png(buffer, &mut output)?;
    output.flush()?;
    Ok(())
}
