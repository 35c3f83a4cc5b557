//! Line rasterization.
//!
//! Segments are rasterized with the integer midpoint (Bresenham) algorithm
//! generalized to all eight octants: the axis with the larger delta drives the
//! loop and an incremental decision term decides when the other axis steps.
//!
//! Writes go through [`PixelBuffer::write`](crate::framebuffer::PixelBuffer::write).
//! Cells outside the buffer are skipped and recorded in the returned
//! [`RasterReport`]; the rest of the segment is still drawn. Long runs of
//! off-buffer cells are counted without being visited one by one.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a
//!   digital plotter."

mod line;
mod primitives;
mod report;

pub use line::{draw_line, LinePoints};
pub use primitives::Drawable;
pub use report::RasterReport;
