//! Error types for line-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// A pixel access outside the buffer's `[0, width) x [0, height)` grid.
///
/// Returned by every bounds-checked [`PixelBuffer`](crate::framebuffer::PixelBuffer)
/// access. Negative coordinates are always out of bounds.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("pixel ({x}, {y}) is outside the {width}x{height} buffer")]
pub struct OutOfBounds {
    /// X coordinate of the rejected access.
    pub x: i32,
    /// Y coordinate of the rejected access.
    pub y: i32,
    /// Width of the buffer that rejected it.
    pub width: u32,
    /// Height of the buffer that rejected it.
    pub height: u32,
}

/// Errors that can occur in line-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel access outside the buffer.
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Invalid dimensions for a buffer or scene.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Scene file could not be read.
    #[error("scene file not found: {0}")]
    SceneNotFound(String),

    /// Scene file could not be parsed.
    #[error("scene error at line {line}: {message}")]
    SceneParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// A polyline was built from too few points or segments.
    #[error("polyline needs at least {required} points, got {actual}")]
    NotEnoughPoints {
        /// Minimum accepted count.
        required: usize,
        /// Count that was supplied.
        actual: usize,
    },

    /// Consecutive segments do not share an endpoint.
    #[error("segment {index} does not start where segment {} ends", .index.saturating_sub(1))]
    SegmentsNotTouching {
        /// Index of the first segment whose start is detached.
        index: usize,
    },

    /// Clipping needs a closed, convex polygon with non-zero area.
    #[error("clip polygon must be closed and convex")]
    NotConvexPolygon,

    /// No part of the segment lies inside the clip polygon.
    #[error("segment lies entirely outside the polygon")]
    SegmentOutsidePolygon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = OutOfBounds { x: -1, y: 7, width: 10, height: 5 };
        assert_eq!(err.to_string(), "pixel (-1, 7) is outside the 10x5 buffer");
    }

    #[test]
    fn test_out_of_bounds_converts() {
        let err: Error = OutOfBounds { x: 10, y: 0, width: 10, height: 10 }.into();
        assert!(matches!(err, Error::OutOfBounds(_)));
        assert!(err.to_string().contains("(10, 0)"));
    }

    #[test]
    fn test_segments_not_touching_display() {
        let err = Error::SegmentsNotTouching { index: 2 };
        assert_eq!(err.to_string(), "segment 2 does not start where segment 1 ends");
    }

    #[test]
    fn test_scene_parse_display() {
        let err = Error::SceneParse { line: 4, message: "bad".to_string() };
        assert!(err.to_string().contains("line 4"));
    }

    #[test]
    fn test_clip_errors_display() {
        assert_eq!(Error::NotConvexPolygon.to_string(), "clip polygon must be closed and convex");
        assert!(Error::SegmentOutsidePolygon.to_string().contains("outside"));
    }
}
