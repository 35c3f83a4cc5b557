//! Scene files: a buffer size, a background and the primitives to draw.
//!
//! Scenes are YAML documents. Every field has a default, so an empty document
//! is a valid (blank 640x480 white) scene.
//!
//! ```yaml
//! width: 64
//! height: 48
//! background: "#FFFFFF"
//! segments:
//!   - from: [0, 0]
//!     to: [63, 47]
//!     color: "#FF0000"
//!   - from: [0, 24]
//!     to: [63, 24]
//!     clip: [[16, 8], [48, 8], [48, 40], [16, 40]]
//! polylines:
//!   - points: [[8, 8], [56, 8], [32, 40]]
//!     closed: true
//!     color: "#0000FF"
//! ```

use crate::color::Color;
use crate::error::{Error, Result};
use crate::framebuffer::PixelBuffer;
use crate::geometry::{Point, Polyline, Segment};
use crate::raster::{Drawable, RasterReport};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single line segment entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSpec {
    /// Start point, `[x, y]`.
    pub from: Point,
    /// End point, `[x, y]`.
    pub to: Point,
    /// Stroke color.
    #[serde(default = "default_stroke")]
    pub color: Color,
    /// Convex polygon the segment is cut to before drawing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<Vec<Point>>,
}

impl SegmentSpec {
    /// The geometric segment.
    #[must_use]
    pub const fn segment(&self) -> Segment {
        Segment::new(self.from, self.to)
    }

    /// The segment after clipping, `None` when nothing is left to draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the clip polygon is too short or not convex.
    pub fn clipped(&self) -> Result<Option<Segment>> {
        let Some(points) = &self.clip else {
            return Ok(Some(self.segment()));
        };

        let polygon = Polyline::new(points, true)?;
        match self.segment().clip_to_polygon(&polygon) {
            Ok(segment) => Ok(Some(segment)),
            Err(Error::SegmentOutsidePolygon) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// A connected chain of points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolylineSpec {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    /// Connect the last vertex back to the first.
    #[serde(default)]
    pub closed: bool,
    /// Stroke color.
    #[serde(default = "default_stroke")]
    pub color: Color,
}

impl PolylineSpec {
    /// Build the polyline, validating the vertex count.
    pub fn polyline(&self) -> Result<Polyline> {
        Polyline::new(&self.points, self.closed)
    }
}

/// Outcome of drawing one scene entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReport {
    /// Human-readable entry name, e.g. `segment 2`.
    pub label: String,
    /// What the entry wrote and skipped.
    pub report: RasterReport,
}

/// A scene description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Buffer width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Buffer height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Color the buffer is cleared to before drawing.
    #[serde(default = "default_background")]
    pub background: Color,

    /// Line segments, drawn first.
    #[serde(default)]
    pub segments: Vec<SegmentSpec>,

    /// Polylines, drawn after the segments.
    #[serde(default)]
    pub polylines: Vec<PolylineSpec>,
}

fn default_width() -> u32 {
    640
}
fn default_height() -> u32 {
    480
}
fn default_background() -> Color {
    Color::WHITE
}
fn default_stroke() -> Color {
    Color::BLACK
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            segments: Vec::new(),
            polylines: Vec::new(),
        }
    }
}

impl Scene {
    /// Largest accepted width or height.
    pub const MAX_DIMENSION: u32 = 16_384;

    /// Creates an empty scene with default size and background.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a scene from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::SceneNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses a scene from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::SceneParse { line, message: e.to_string() }
        })
    }

    /// Loads a scene with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Override the buffer size; `None` keeps the current value.
    #[must_use]
    pub fn with_dimensions(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.width = width.unwrap_or(self.width);
        self.height = height.unwrap_or(self.height);
        self
    }

    /// Append a segment entry.
    pub fn push_segment(&mut self, segment: Segment, color: Color) {
        self.segments.push(SegmentSpec { from: segment.start, to: segment.end, color, clip: None });
    }

    /// Checks the size (each side in `1..=MAX_DIMENSION`), every clip polygon
    /// and every polyline.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        let valid = 1..=Self::MAX_DIMENSION;
        if !valid.contains(&self.width) || !valid.contains(&self.height) {
            return Err(Error::InvalidDimensions { width: self.width, height: self.height });
        }
        for spec in &self.segments {
            spec.clipped()?;
        }
        for spec in &self.polylines {
            spec.polyline()?;
        }
        Ok(())
    }

    /// Rasterize the scene into a fresh buffer.
    ///
    /// Entries that reach outside the buffer are drawn partially; their
    /// skipped cells are counted in the per-entry reports.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene does not validate.
    pub fn render(&self) -> Result<(PixelBuffer, Vec<ItemReport>)> {
        self.validate()?;

        let mut buffer = PixelBuffer::new(self.width, self.height);
        buffer.clear(self.background);

        let mut reports = Vec::with_capacity(self.segments.len() + self.polylines.len());

        for (i, spec) in self.segments.iter().enumerate() {
            let report = match spec.clipped()? {
                Some(segment) => segment.draw(&mut buffer, spec.color),
                None => RasterReport::default(),
            };
            reports.push(ItemReport { label: format!("segment {i}"), report });
        }

        for (i, spec) in self.polylines.iter().enumerate() {
            reports.push(ItemReport {
                label: format!("polyline {i}"),
                report: spec.polyline()?.draw(&mut buffer, spec.color),
            });
        }

        Ok((buffer, reports))
    }
}
