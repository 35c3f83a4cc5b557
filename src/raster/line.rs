//! Midpoint line stepping.

use std::iter::FusedIterator;

use crate::color::Color;
use crate::error::OutOfBounds;
use crate::framebuffer::PixelBuffer;
use crate::geometry::Point;
use crate::raster::RasterReport;

/// Draw a line from `(x0, y0)` to `(x1, y1)`, both endpoints inclusive.
///
/// Every cell of the digital line is written exactly once. Cells outside the
/// buffer are skipped and counted in the returned report; this never panics,
/// whatever the endpoints.
///
/// # Example
///
/// ```
/// use line_raster::color::Color;
/// use line_raster::framebuffer::PixelBuffer;
/// use line_raster::raster::draw_line;
///
/// let mut buffer = PixelBuffer::new(16, 16);
/// let report = draw_line(&mut buffer, Color::RED, 0, 0, 4, 4);
///
/// assert_eq!(report.written(), 5);
/// assert_eq!(buffer.read(2, 2), Ok(Color::RED));
/// ```
pub fn draw_line(
    buffer: &mut PixelBuffer,
    color: Color,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> RasterReport {
    let mut report = RasterReport::default();
    let points = LinePoints::new(Point::new(x0, y0), Point::new(x1, y1));
    plot_line(buffer, color, points, &mut report);
    report
}

/// Plot the remaining cells of `points`.
///
/// Only the steps whose driving coordinate falls inside the buffer are walked
/// one by one; the runs before and after them are counted as skipped in one go.
pub(crate) fn plot_line(
    buffer: &mut PixelBuffer,
    color: Color,
    mut points: LinePoints,
    report: &mut RasterReport,
) {
    let (enter, exit) = points.driving_window(buffer.width(), buffer.height());

    skip_off_buffer(buffer, &mut points, enter, report);
    for _ in enter..exit {
        if let Some(point) = points.next() {
            report.record(buffer.write(point.x, point.y, color));
        }
    }
    let rest = points.remaining;
    skip_off_buffer(buffer, &mut points, rest, report);
}

/// Consume `count` cells known to lie outside the buffer.
fn skip_off_buffer(
    buffer: &PixelBuffer,
    points: &mut LinePoints,
    count: u64,
    report: &mut RasterReport,
) {
    if count == 0 {
        return;
    }
    let outside = |p: Point| OutOfBounds {
        x: p.x,
        y: p.y,
        width: buffer.width(),
        height: buffer.height(),
    };

    let first = points.current;
    points.skip_first(count - 1);
    let last = points.current;
    points.skip_first(1);

    report.record_skipped_run(count, outside(first), outside(last));
}

/// Iterator over the cells of a digital line, from start to end inclusive.
///
/// The set of cells does not depend on which endpoint comes first. With the
/// driving axis stepping forward, the minor axis steps when the decision term
/// is strictly positive; stepping backward, it also steps on a zero term, so
/// both orientations resolve midpoint ties onto the same cell.
#[derive(Debug, Clone)]
pub struct LinePoints {
    current: Point,
    major_step: (i32, i32),
    minor_step: (i32, i32),
    /// Delta along the driving axis.
    major: i64,
    /// Delta along the other axis.
    minor: i64,
    decision: i64,
    /// Threshold the decision term must exceed for a minor step.
    bias: i64,
    remaining: u64,
}

impl LinePoints {
    /// Start walking from `start` to `end`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        let delta_x = i64::from(end.x) - i64::from(start.x);
        let delta_y = i64::from(end.y) - i64::from(start.y);
        let dx = delta_x.abs();
        let dy = delta_y.abs();
        let sx = if delta_x >= 0 { 1 } else { -1 };
        let sy = if delta_y >= 0 { 1 } else { -1 };

        let (major, minor, major_step, minor_step, forward) = if dx >= dy {
            (dx, dy, (sx, 0), (0, sy), sx > 0)
        } else {
            (dy, dx, (0, sy), (sx, 0), sy > 0)
        };

        Self {
            current: start,
            major_step,
            minor_step,
            major,
            minor,
            decision: 2 * minor - major,
            bias: if forward { 0 } else { -1 },
            remaining: major as u64 + 1,
        }
    }

    fn advance(&mut self) {
        self.current.x += self.major_step.0;
        self.current.y += self.major_step.1;

        if self.decision > self.bias {
            self.current.x += self.minor_step.0;
            self.current.y += self.minor_step.1;
            self.decision -= 2 * self.major;
        }

        self.decision += 2 * self.minor;
    }

    /// Jump `steps` cells ahead in constant time.
    ///
    /// After every step the decision term lies in
    /// `(bias - 2*major + 2*minor, bias + 2*minor]`, an interval of width
    /// `2*major`, which pins down how many minor steps were taken.
    fn advance_by(&mut self, steps: u64) {
        if steps == 0 || self.major == 0 {
            return;
        }

        let n = i128::from(steps);
        let major = i128::from(self.major);
        let minor = i128::from(self.minor);
        let decision = i128::from(self.decision) + 2 * n * minor;

        let minor_steps = div_ceil(decision - i128::from(self.bias) - 2 * minor, 2 * major);

        self.decision = (decision - 2 * minor_steps * major) as i64;
        self.current.x = (i128::from(self.current.x)
            + n * i128::from(self.major_step.0)
            + minor_steps * i128::from(self.minor_step.0)) as i32;
        self.current.y = (i128::from(self.current.y)
            + n * i128::from(self.major_step.1)
            + minor_steps * i128::from(self.minor_step.1)) as i32;
    }

    /// Drop the next `count` cells.
    pub(crate) fn skip_first(&mut self, count: u64) {
        if count >= self.remaining {
            self.remaining = 0;
            return;
        }
        self.remaining -= count;
        self.advance_by(count);
    }

    /// Drop the last `count` cells.
    pub(crate) fn skip_last(&mut self, count: u64) {
        self.remaining = self.remaining.saturating_sub(count);
    }

    /// Range of remaining step indices whose driving coordinate lies inside a
    /// `width` x `height` buffer. Every cell outside it is off the buffer.
    fn driving_window(&self, width: u32, height: u32) -> (u64, u64) {
        let (start, step, extent) = if self.major_step.0 == 0 {
            (i64::from(self.current.y), i64::from(self.major_step.1), i64::from(height))
        } else {
            (i64::from(self.current.x), i64::from(self.major_step.0), i64::from(width))
        };

        let (lo, hi) = if step > 0 {
            (-start, extent - start)
        } else {
            (start - extent + 1, start + 1)
        };

        let remaining = i64::try_from(self.remaining).unwrap_or(i64::MAX);
        let enter = lo.clamp(0, remaining);
        let exit = hi.clamp(enter, remaining);
        (enter as u64, exit as u64)
    }
}

/// Ceiling division for a positive divisor.
fn div_ceil(numerator: i128, divisor: i128) -> i128 {
    let quotient = numerator.div_euclid(divisor);
    if numerator.rem_euclid(divisor) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }

        let point = self.current;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }

        Some(point)
    }

    fn nth(&mut self, n: usize) -> Option<Point> {
        self.skip_first(n as u64);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for LinePoints {}

impl FusedIterator for LinePoints {}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn coord() -> impl Strategy<Value = i32> {
        -300i32..300
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Both endpoints are always part of the line.
        #[test]
        fn prop_endpoints_included(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let pts: Vec<Point> = LinePoints::new(Point::new(x0, y0), Point::new(x1, y1)).collect();

            prop_assert_eq!(pts.first(), Some(&Point::new(x0, y0)));
            prop_assert_eq!(pts.last(), Some(&Point::new(x1, y1)));
        }

        /// Consecutive cells are 8-connected and strictly advance the driving axis.
        #[test]
        fn prop_eight_connected(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let pts: Vec<Point> = LinePoints::new(Point::new(x0, y0), Point::new(x1, y1)).collect();

            for pair in pts.windows(2) {
                prop_assert!(pair[0].is_adjacent(pair[1]) && pair[0] != pair[1],
                    "gap between {:?} and {:?}", pair[0], pair[1]);
            }
        }

        /// No cell is produced twice and the count is max(dx, dy) + 1.
        #[test]
        fn prop_no_duplicates(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let pts: Vec<Point> = LinePoints::new(Point::new(x0, y0), Point::new(x1, y1)).collect();
            let unique: HashSet<Point> = pts.iter().copied().collect();
            let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;

            prop_assert_eq!(unique.len(), pts.len());
            prop_assert_eq!(pts.len(), expected);
        }

        /// Swapping the endpoints yields the same set of cells.
        #[test]
        fn prop_symmetric(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let forward: HashSet<Point> =
                LinePoints::new(Point::new(x0, y0), Point::new(x1, y1)).collect();
            let backward: HashSet<Point> =
                LinePoints::new(Point::new(x1, y1), Point::new(x0, y0)).collect();

            prop_assert_eq!(forward, backward);
        }

        /// Jumping ahead lands on the same cell and state as stepping.
        #[test]
        fn prop_jump_matches_steps(
            x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord(), skip in 0usize..700
        ) {
            let start = Point::new(x0, y0);
            let end = Point::new(x1, y1);
            let mut stepped = LinePoints::new(start, end);
            for _ in 0..skip {
                stepped.next();
            }
            let mut jumped = LinePoints::new(start, end);
            jumped.skip_first(skip as u64);

            prop_assert_eq!(jumped.len(), stepped.len());
            prop_assert_eq!(jumped.collect::<Vec<_>>(), stepped.collect::<Vec<_>>());
        }

        /// Every cell lies within half a cell of the ideal line along the minor axis.
        #[test]
        fn prop_minimal_deviation(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let (dx, dy) = (i64::from(x1 - x0), i64::from(y1 - y0));
            let major = dx.abs().max(dy.abs());
            prop_assume!(major > 0);

            for p in LinePoints::new(Point::new(x0, y0), Point::new(x1, y1)) {
                let (px, py) = (i64::from(p.x - x0), i64::from(p.y - y0));
                // Minor-axis distance to the ideal line, scaled by the driving delta.
                let cross = py * dx - px * dy;
                prop_assert!(2 * cross.abs() <= major, "cell {:?} strays from the line", p);
            }
        }

        /// Off-buffer endpoints never panic and in-bounds cells are still written.
        #[test]
        fn prop_bounds_safe(
            x0 in -50i32..80, y0 in -50i32..80, x1 in -50i32..80, y1 in -50i32..80
        ) {
            let mut buffer = PixelBuffer::new(32, 24);
            buffer.clear(Color::WHITE);

            let report = draw_line(&mut buffer, Color::BLACK, x0, y0, x1, y1);

            let mut inside = 0;
            for p in LinePoints::new(Point::new(x0, y0), Point::new(x1, y1)) {
                if buffer.contains(p.x, p.y) {
                    inside += 1;
                    prop_assert_eq!(buffer.read(p.x, p.y), Ok(Color::BLACK));
                }
            }
            prop_assert_eq!(report.written(), inside);
            let total = LinePoints::new(Point::new(x0, y0), Point::new(x1, y1)).len();
            prop_assert_eq!(report.skipped(), (total - inside) as u64);
            for e in report.first_out_of_bounds().into_iter().chain(report.last_out_of_bounds()) {
                prop_assert!(!buffer.contains(e.x, e.y));
            }
        }
    }
}
