//! Drawable primitives.

use crate::color::Color;
use crate::framebuffer::PixelBuffer;
use crate::geometry::{Point, Polyline, Segment};
use crate::raster::line::plot_line;
use crate::raster::{draw_line, RasterReport};

/// Trait for primitives that can be rasterized into a [`PixelBuffer`].
pub trait Drawable {
    /// Draw this primitive, skipping cells outside the buffer.
    fn draw(&self, buffer: &mut PixelBuffer, color: Color) -> RasterReport;
}

impl Drawable for Point {
    fn draw(&self, buffer: &mut PixelBuffer, color: Color) -> RasterReport {
        let mut report = RasterReport::default();
        report.record(buffer.write(self.x, self.y, color));
        report
    }
}

impl Drawable for Segment {
    fn draw(&self, buffer: &mut PixelBuffer, color: Color) -> RasterReport {
        draw_line(buffer, color, self.start.x, self.start.y, self.end.x, self.end.y)
    }
}

impl Drawable for Polyline {
    /// Draw every edge; a vertex shared by two consecutive edges is written
    /// once. Edges that fold back over earlier ones are drawn again, so
    /// [`RasterReport::written`] can exceed the number of distinct cells.
    fn draw(&self, buffer: &mut PixelBuffer, color: Color) -> RasterReport {
        let mut report = RasterReport::default();
        let edges = self.vertices().len() - 1 + usize::from(self.is_closed());

        for (i, segment) in self.segments().enumerate() {
            let mut points = segment.points();
            // The start of every later edge was the end of the previous one,
            // and the closing edge ends on the first vertex.
            if i > 0 {
                points.skip_first(1);
            }
            if self.is_closed() && i + 1 == edges {
                points.skip_last(1);
            }

            plot_line(buffer, color, points, &mut report);
        }

        report
    }
}
