//! Bounds-checked pixel buffer.
//!
//! Stores one packed ARGB value (see [`Color::to_argb`]) per cell in row-major
//! order. Every coordinate-based access is checked against the buffer size and
//! reports [`OutOfBounds`] instead of touching memory outside the grid.

use crate::color::Color;
use crate::error::OutOfBounds;

/// Fixed-size grid of packed colors for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Packed ARGB cells in row-major order, `width * height` long.
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a buffer of the given size, cleared to [`Color::TRANSPARENT`].
    ///
    /// Zero dimensions are accepted and yield an empty buffer on which every
    /// access is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use line_raster::framebuffer::PixelBuffer;
    ///
    /// let buffer = PixelBuffer::new(640, 480);
    /// assert_eq!(buffer.width(), 640);
    /// assert_eq!(buffer.height(), 480);
    /// assert_eq!(buffer.pixel_count(), 640 * 480);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self { width, height, pixels: vec![Color::TRANSPARENT.to_argb(); size] }
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Whether `(x, y)` addresses a cell of this buffer.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Row-major index of `(x, y)`, `y * width + x`.
    pub fn index(&self, x: i32, y: i32) -> Result<usize, OutOfBounds> {
        if self.contains(x, y) {
            Ok((y as usize) * (self.width as usize) + (x as usize))
        } else {
            Err(OutOfBounds { x, y, width: self.width, height: self.height })
        }
    }

    /// Set the cell at `(x, y)` to `color`.
    pub fn write(&mut self, x: i32, y: i32, color: Color) -> Result<(), OutOfBounds> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = color.to_argb();
        Ok(())
    }

    /// Get the color stored at `(x, y)`.
    pub fn read(&self, x: i32, y: i32) -> Result<Color, OutOfBounds> {
        let idx = self.index(x, y)?;
        Ok(Color::from_argb(self.pixels[idx]))
    }

    /// Set every cell to `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_argb());
    }

    /// Packed cells in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Get a row of packed cells.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u32]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Tightly packed RGBA8 bytes, as expected by image encoders.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&packed| Color::from_argb(packed).to_array()).collect()
    }
}
