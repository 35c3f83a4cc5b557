//! Terminal output encoder (ASCII/Unicode).
//!
//! Renders pixel buffers to terminal-compatible text for quick previews:
//! - ASCII: Uses characters like ` .:-=+*#%@` for grayscale
//! - Unicode: Uses half-block characters (▀) with 24-bit ANSI color

use crate::color::Color;
use crate::framebuffer::PixelBuffer;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    #[default]
    Ascii,
    /// Unicode half-block characters (2x vertical resolution)
    UnicodeHalfBlock,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone, Default)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
    invert: bool,
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in characters.
    /// If not set, uses the buffer width capped at 80.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Invert the output (light on dark vs dark on light).
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Render a pixel buffer to a string.
    #[must_use]
    pub fn render(&self, buffer: &PixelBuffer) -> String {
        if buffer.pixel_count() == 0 {
            return String::new();
        }
        match self.mode {
            TerminalMode::Ascii => self.render_ascii(buffer),
            TerminalMode::UnicodeHalfBlock => self.render_unicode_half_block(buffer),
        }
    }

    fn render_ascii(&self, buffer: &PixelBuffer) -> String {
        // Monospace cells are about twice as tall as they are wide.
        let (target_w, target_h) = self.compute_dimensions(buffer, 2.0);
        let mut output = String::with_capacity((target_w + 1) as usize * target_h as usize);

        let scale_x = buffer.width() as f32 / target_w as f32;
        let scale_y = buffer.height() as f32 / target_h as f32;

        for y in 0..target_h {
            for x in 0..target_w {
                let luma = Self::luma(self.sample(buffer, x, y, scale_x, scale_y));
                output.push(Self::ASCII_RAMP[Self::luma_to_index(luma)]);
            }
            output.push('\n');
        }

        output
    }

    /// Each character covers two vertical pixels: foreground is the top one,
    /// background the bottom one.
    fn render_unicode_half_block(&self, buffer: &PixelBuffer) -> String {
        let (target_w, target_h) = self.compute_dimensions(buffer, 1.0);
        let target_h = (target_h + 1) & !1;

        let mut output =
            String::with_capacity((target_w * 40 + 5) as usize * (target_h / 2) as usize);

        let scale_x = buffer.width() as f32 / target_w as f32;
        let scale_y = buffer.height() as f32 / target_h as f32;

        for y in (0..target_h).step_by(2) {
            for x in 0..target_w {
                let top = self.sample(buffer, x, y, scale_x, scale_y);
                let bottom = self.sample(buffer, x, y + 1, scale_x, scale_y);

                let _ = write!(
                    output,
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                    top.r, top.g, top.b, bottom.r, bottom.g, bottom.b
                );
            }
            output.push_str("\x1b[0m\n");
        }

        output
    }

    /// Target size in characters, preserving the buffer's aspect ratio.
    fn compute_dimensions(&self, buffer: &PixelBuffer, char_aspect: f32) -> (u32, u32) {
        let aspect = buffer.width() as f32 / buffer.height() as f32;
        let w = self.width.unwrap_or_else(|| buffer.width().min(80));
        let h = (w as f32 / aspect / char_aspect).round() as u32;
        (w, h.max(1))
    }

    /// Nearest-neighbour sample at a character cell.
    fn sample(&self, buffer: &PixelBuffer, x: u32, y: u32, scale_x: f32, scale_y: f32) -> Color {
        let fx = (x as f32 * scale_x).min((buffer.width() - 1) as f32);
        let fy = (y as f32 * scale_y).min((buffer.height() - 1) as f32);

        let pixel = buffer.read(fx as i32, fy as i32).unwrap_or(Color::BLACK);
        if self.invert {
            Color::new(255 - pixel.r, 255 - pixel.g, 255 - pixel.b, pixel.a)
        } else {
            pixel
        }
    }

    /// Rec. 709 luminance in 0.0-1.0.
    fn luma(pixel: Color) -> f32 {
        0.2126 * (f32::from(pixel.r) / 255.0)
            + 0.7152 * (f32::from(pixel.g) / 255.0)
            + 0.0722 * (f32::from(pixel.b) / 255.0)
    }

    fn luma_to_index(luma: f32) -> usize {
        let idx = (luma * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
        idx.min(Self::ASCII_RAMP.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::draw_line;

    #[test]
    fn test_ascii_render_white() {
        let mut buffer = PixelBuffer::new(10, 10);
        buffer.clear(Color::WHITE);

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).width(5).render(&buffer);

        assert!(output.contains('@'));
        assert!(!output.contains(' '));
    }

    #[test]
    fn test_invert_mode() {
        let mut buffer = PixelBuffer::new(10, 10);
        buffer.clear(Color::WHITE);

        let output = TerminalEncoder::new().width(5).invert(true).render(&buffer);

        assert!(output.chars().filter(|&ch| ch != '\n').all(|ch| ch == ' '));
    }

    #[test]
    fn test_ascii_line_preview() {
        let mut buffer = PixelBuffer::new(8, 2);
        buffer.clear(Color::BLACK);
        draw_line(&mut buffer, Color::WHITE, 0, 0, 7, 0);

        let output = TerminalEncoder::new().render(&buffer);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "@@@@@@@@");
    }

    #[test]
    fn test_ascii_full_resolution() {
        let mut buffer = PixelBuffer::new(8, 16);
        buffer.clear(Color::BLACK);
        draw_line(&mut buffer, Color::WHITE, 0, 0, 7, 14);

        // 8 columns, 16 rows / char aspect 2 = 8 lines; each line samples an even row.
        let output = TerminalEncoder::new().render(&buffer);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "@       ");
        assert_eq!(lines[7], "       @");
    }

    #[test]
    fn test_unicode_half_block_contains_ansi() {
        let mut buffer = PixelBuffer::new(10, 10);
        buffer.clear(Color::RED);

        let output =
            TerminalEncoder::new().mode(TerminalMode::UnicodeHalfBlock).width(5).render(&buffer);

        assert!(output.contains("\x1b[38;2;255;0;0m"));
        assert!(output.contains('▀'));
        assert!(output.contains("\x1b[0m"));
    }

    #[test]
    fn test_default_width_capped_at_80() {
        let buffer = PixelBuffer::new(1000, 100);
        let output = TerminalEncoder::new().render(&buffer);
        let first_line = output.lines().next().expect("output should have a line");

        assert_eq!(first_line.len(), 80);
    }

    #[test]
    fn test_empty_buffer_renders_nothing() {
        let buffer = PixelBuffer::new(0, 0);
        assert!(TerminalEncoder::new().render(&buffer).is_empty());
    }
}
