//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::error::{Error, Result};
use crate::framebuffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for pixel buffer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a pixel buffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is empty, or if file creation or PNG
    /// encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<()> {
        Self::check_dimensions(buffer)?;
        let file = File::create(path)?;
        Self::encode(buffer, BufWriter::new(file))
    }

    /// Encode a pixel buffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is empty or PNG encoding fails.
    pub fn to_bytes(buffer: &PixelBuffer) -> Result<Vec<u8>> {
        Self::check_dimensions(buffer)?;
        let mut bytes = Vec::new();
        Self::encode(buffer, &mut bytes)?;
        Ok(bytes)
    }

    fn check_dimensions(buffer: &PixelBuffer) -> Result<()> {
        if buffer.width() == 0 || buffer.height() == 0 {
            return Err(Error::InvalidDimensions { width: buffer.width(), height: buffer.height() });
        }
        Ok(())
    }

    fn encode<W: Write>(buffer: &PixelBuffer, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&buffer.to_rgba_bytes())?;
        writer.finish()?;

        Ok(())
    }
}
