//! Outcome of a rasterization call.

use crate::error::OutOfBounds;

/// What a draw call wrote and what it had to skip.
///
/// Skipped cells are counted, not stored: only the first and last one are
/// kept, so the report stays the same size however far a primitive reaches
/// outside the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RasterReport {
    written: usize,
    skipped: u64,
    first_skipped: Option<OutOfBounds>,
    last_skipped: Option<OutOfBounds>,
}

impl RasterReport {
    /// Number of write calls that landed in the buffer.
    ///
    /// A cell covered twice by the same primitive counts twice.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Number of cells that fell outside the buffer.
    #[must_use]
    pub const fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Whether every cell of the primitive landed in the buffer.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.skipped == 0
    }

    /// The first cell that was skipped, if any.
    #[must_use]
    pub const fn first_out_of_bounds(&self) -> Option<OutOfBounds> {
        self.first_skipped
    }

    /// The last cell that was skipped, if any.
    #[must_use]
    pub const fn last_out_of_bounds(&self) -> Option<OutOfBounds> {
        self.last_skipped
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: Self) {
        self.written += other.written;
        self.skipped += other.skipped;
        self.first_skipped = self.first_skipped.or(other.first_skipped);
        self.last_skipped = other.last_skipped.or(self.last_skipped);
    }

    /// Treat any skipped cell as an error.
    ///
    /// Returns the number of written cells when nothing was skipped.
    pub fn into_result(self) -> Result<usize, OutOfBounds> {
        match self.first_skipped {
            Some(err) => Err(err),
            None => Ok(self.written),
        }
    }

    pub(crate) fn record(&mut self, outcome: Result<(), OutOfBounds>) {
        match outcome {
            Ok(()) => self.written += 1,
            Err(err) => self.record_skipped_run(1, err, err),
        }
    }

    /// Record `count` consecutive skipped cells running from `first` to `last`.
    pub(crate) fn record_skipped_run(&mut self, count: u64, first: OutOfBounds, last: OutOfBounds) {
        if count == 0 {
            return;
        }
        self.skipped += count;
        self.first_skipped.get_or_insert(first);
        self.last_skipped = Some(last);
    }
}
