//! Integer geometry for rasterization.
//!
//! Coordinates are buffer cells: x grows to the right, y grows downward.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::raster::LinePoints;

/// A buffer cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether `other` is one of the eight cells around `self` (or `self`).
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        (i64::from(self.x) - i64::from(other.x)).abs() <= 1
            && (i64::from(self.y) - i64::from(other.y)).abs() <= 1
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// A line segment between two cells, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Segment {
    /// Start point.
    #[serde(rename = "from")]
    pub start: Point,
    /// End point.
    #[serde(rename = "to")]
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// The same segment walked from `end` to `start`.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    /// Cells covered by this segment, from `start` to `end`.
    #[must_use]
    pub fn points(&self) -> LinePoints {
        LinePoints::new(self.start, self.end)
    }

    /// The part of this segment inside a convex polygon, outline included.
    ///
    /// Uses Cyrus-Beck clipping in exact integer arithmetic; the clipped
    /// endpoints are rounded to the nearest cell and keep the segment's
    /// direction.
    ///
    /// # Errors
    ///
    /// [`Error::NotConvexPolygon`] if `polygon` is open, concave or flat, and
    /// [`Error::SegmentOutsidePolygon`] if nothing is left after clipping.
    ///
    /// # Example
    ///
    /// ```
    /// use line_raster::geometry::{Polyline, Segment};
    ///
    /// let square = Polyline::new(
    ///     &[(100, 100).into(), (100, 200).into(), (200, 200).into(), (200, 100).into()],
    ///     true,
    /// )?;
    /// let clipped = Segment::from_coords(50, 150, 250, 150).clip_to_polygon(&square)?;
    ///
    /// assert_eq!(clipped, Segment::from_coords(100, 150, 200, 150));
    /// # Ok::<(), line_raster::Error>(())
    /// ```
    pub fn clip_to_polygon(&self, polygon: &Polyline) -> Result<Self> {
        let orientation = polygon.convex_orientation().ok_or(Error::NotConvexPolygon)?;
        let (dx, dy) = delta(self.start, self.end);

        // Parameters along the segment as fractions (numerator, positive denominator).
        let mut enter = (0_i128, 1_i128);
        let mut exit = (1_i128, 1_i128);

        for edge in polygon.segments().filter(|edge| !edge.is_point()) {
            let (ex, ey) = delta(edge.start, edge.end);
            // Inside this edge's half-plane iff offset + t * rate >= 0.
            let offset = orientation * cross(edge.start, edge.end, self.start);
            let rate = orientation * (ex * dy - ey * dx);

            match rate.cmp(&0) {
                Ordering::Equal if offset < 0 => return Err(Error::SegmentOutsidePolygon),
                Ordering::Equal => {}
                Ordering::Greater => {
                    let bound = (-offset, rate);
                    if compare_fractions(bound, enter) == Ordering::Greater {
                        enter = bound;
                    }
                }
                Ordering::Less => {
                    let bound = (offset, -rate);
                    if compare_fractions(bound, exit) == Ordering::Less {
                        exit = bound;
                    }
                }
            }
        }

        if compare_fractions(enter, exit) == Ordering::Greater {
            return Err(Error::SegmentOutsidePolygon);
        }

        Ok(Self::new(self.point_at(enter), self.point_at(exit)))
    }

    /// Nearest cell to `start + t * (end - start)` for `t = num / den`.
    fn point_at(&self, (num, den): (i128, i128)) -> Point {
        let lerp = |from: i32, to: i32| {
            let span = i128::from(to) - i128::from(from);
            let offset = (2 * num * span + den).div_euclid(2 * den);
            (i128::from(from) + offset) as i32
        };
        Point::new(lerp(self.start.x, self.end.x), lerp(self.start.y, self.end.y))
    }
}

fn delta(from: Point, to: Point) -> (i128, i128) {
    (i128::from(to.x) - i128::from(from.x), i128::from(to.y) - i128::from(from.y))
}

/// Cross product of `b - a` and `p - a`: positive when `p` is to the left of
/// `a -> b` in x-right, y-up terms.
fn cross(a: Point, b: Point, p: Point) -> i128 {
    let (abx, aby) = delta(a, b);
    let (apx, apy) = delta(a, p);
    abx * apy - aby * apx
}

/// Exact ordering of `a.0 / a.1` and `b.0 / b.1` for positive denominators.
///
/// Compares continued-fraction terms so no product can overflow.
fn compare_fractions(a: (i128, i128), b: (i128, i128)) -> Ordering {
    let (mut an, mut ad) = a;
    let (mut bn, mut bd) = b;
    loop {
        let (aq, ar) = (an.div_euclid(ad), an.rem_euclid(ad));
        let (bq, br) = (bn.div_euclid(bd), bn.rem_euclid(bd));
        if aq != bq {
            return aq.cmp(&bq);
        }
        match (ar == 0, br == 0) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        // ar/ad vs br/bd orders the same as bd/br vs ad/ar.
        (an, ad, bn, bd) = (bd, br, ad, ar);
    }
}

/// A chain of connected segments, optionally closed back to its first vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyline {
    vertices: Vec<Point>,
    closed: bool,
}

impl Polyline {
    /// Build a polyline through `vertices`.
    ///
    /// Open polylines need at least two vertices, closed ones at least three.
    pub fn new(vertices: &[Point], closed: bool) -> Result<Self> {
        let required = if closed { 3 } else { 2 };
        if vertices.len() < required {
            return Err(Error::NotEnoughPoints { required, actual: vertices.len() });
        }
        Ok(Self { vertices: vertices.to_vec(), closed })
    }

    /// Build an open polyline from segments laid end to end.
    ///
    /// At least two segments are required, and each must start where the
    /// previous one ends.
    pub fn from_segments(segments: &[Segment]) -> Result<Self> {
        if segments.len() < 2 {
            let actual = if segments.is_empty() { 0 } else { 2 };
            return Err(Error::NotEnoughPoints { required: 3, actual });
        }

        if let Some(index) = segments.windows(2).position(|pair| pair[0].end != pair[1].start) {
            return Err(Error::SegmentsNotTouching { index: index + 1 });
        }

        let mut vertices = Vec::with_capacity(segments.len() + 1);
        vertices.push(segments[0].start);
        vertices.extend(segments.iter().map(|segment| segment.end));

        Ok(Self { vertices, closed: false })
    }

    /// The vertices in drawing order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Whether the last vertex connects back to the first.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether `point` lies inside the closed outline or on it.
    ///
    /// Uses the even-odd rule, so self-intersecting outlines have holes.
    /// Open polylines contain only the points lying exactly on an edge.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let on_outline = self.segments().any(|edge| {
            cross(edge.start, edge.end, point) == 0
                && point.x >= edge.start.x.min(edge.end.x)
                && point.x <= edge.start.x.max(edge.end.x)
                && point.y >= edge.start.y.min(edge.end.y)
                && point.y <= edge.start.y.max(edge.end.y)
        });
        if on_outline || !self.closed {
            return on_outline;
        }

        let crossings = self
            .segments()
            .filter(|edge| (edge.start.y > point.y) != (edge.end.y > point.y))
            .filter(|edge| {
                // Edge crosses the horizontal through `point` to its right.
                let side = cross(edge.start, edge.end, point);
                if edge.end.y > edge.start.y {
                    side > 0
                } else {
                    side < 0
                }
            })
            .count();

        crossings % 2 == 1
    }

    /// Whether this is a closed outline bounding a convex region of non-zero area.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        self.convex_orientation().is_some()
    }

    /// `1` or `-1` for the winding of a closed convex outline, `None` otherwise.
    ///
    /// Convex here means every vertex lies on the inner side of every edge.
    fn convex_orientation(&self) -> Option<i128> {
        if !self.closed {
            return None;
        }

        let twice_area: i128 = self
            .segments()
            .map(|edge| cross(Point::ORIGIN, edge.start, edge.end))
            .sum();
        let orientation = twice_area.signum();
        if orientation == 0 {
            return None;
        }

        let convex = self.segments().all(|edge| {
            self.vertices.iter().all(|&v| orientation * cross(edge.start, edge.end, v) >= 0)
        });
        convex.then_some(orientation)
    }

    /// The edges in drawing order, including the closing edge.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let closing = self
            .closed
            .then(|| Segment::new(self.vertices[self.vertices.len() - 1], self.vertices[0]));

        self.vertices.windows(2).map(|pair| Segment::new(pair[0], pair[1])).chain(closing)
    }
}
