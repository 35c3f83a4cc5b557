//! # line-raster
//!
//! Integer line rasterization into a bounds-checked pixel buffer.
//!
//! Segments are turned into the set of grid cells that best approximates the
//! ideal line using only integer arithmetic (the midpoint/Bresenham family),
//! for every direction, and plotted into a [`PixelBuffer`](framebuffer::PixelBuffer)
//! that never writes outside its grid.
//!
//! ## Features
//!
//! - **All octants**: any pair of endpoints, including degenerate ones
//! - **Symmetric**: drawing `p -> q` and `q -> p` covers the same cells
//! - **Memory safe**: out-of-range cells are reported, never written
//! - **Outputs**: PNG files and terminal (ASCII/Unicode) previews
//! - **Clipping**: segments cut to the inside of a convex polygon
//! - **Scenes**: YAML files describing segments and polylines
//!
//! ## Quick Start
//!
//! ```rust
//! use line_raster::prelude::*;
//!
//! let mut buffer = PixelBuffer::new(64, 48);
//! buffer.clear(Color::WHITE);
//!
//! let report = draw_line(&mut buffer, Color::BLACK, 0, 0, 63, 47);
//! assert!(report.is_complete());
//! assert_eq!(buffer.read(63, 47), Ok(Color::BLACK));
//! ```
//!
//! ## Feature Flags
//!
//! - `cli`: builds the `line-raster` command-line tool
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   IBM Systems Journal 4(1).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Coordinates move between i32, u32, i64 and usize throughout
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and packing.
pub mod color;

/// Bounds-checked pixel buffer.
pub mod framebuffer;

/// Points, segments and polylines.
pub mod geometry;

/// Line rasterization.
pub mod raster;

// ============================================================================
// Input / Output
// ============================================================================

/// Output encoders (PNG, terminal).
pub mod output;

/// YAML scene descriptions.
pub mod scene;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for line-raster operations.
pub mod error;

pub use error::{Error, OutOfBounds, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use line_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::{Error, OutOfBounds, Result};
    pub use crate::framebuffer::PixelBuffer;
    pub use crate::geometry::{Point, Polyline, Segment};
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::raster::{draw_line, Drawable, RasterReport};
    pub use crate::scene::Scene;
}
