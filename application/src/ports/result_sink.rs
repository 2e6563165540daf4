//! Port for recording batch result rows.
//!
//! Rows are written as soon as each record finishes, so a long batch that
//! is interrupted still leaves the completed rows on disk. The `record`
//! method is synchronous and non-fallible; write failures are the adapter's
//! concern and must not abort the batch.

use crate::use_cases::run_batch::BatchRow;

pub trait ResultSink: Send + Sync {
    /// Record one finished row.
    fn record(&self, row: &BatchRow);
}

/// No-op implementation for tests and when no output file is requested.
pub struct NoResultSink;

impl ResultSink for NoResultSink {
    fn record(&self, _row: &BatchRow) {}
}
