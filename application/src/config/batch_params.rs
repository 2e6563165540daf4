//! Batch harness parameters

use std::time::Duration;

/// Concurrency and timeout bounds for a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchParams {
    /// Maximum number of records analyzed at once.
    pub workers: usize,
    /// Wall-clock limit for one record's analysis.
    pub record_timeout: Duration,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            workers: 1,
            record_timeout: Duration::from_secs(120),
        }
    }
}

impl BatchParams {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_record_timeout(mut self, timeout: Duration) -> Self {
        self.record_timeout = timeout;
        self
    }
}
