//! Batch harness configuration from TOML (`[batch]` section)

use sarcasm_application::BatchParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBatchConfig {
    /// Records analyzed concurrently
    pub workers: usize,
    /// Wall-clock limit per record, in seconds
    pub record_timeout_secs: u64,
}

impl Default for FileBatchConfig {
    fn default() -> Self {
        let params = BatchParams::default();
        Self {
            workers: params.workers,
            record_timeout_secs: params.record_timeout.as_secs(),
        }
    }
}

impl FileBatchConfig {
    pub fn to_params(&self) -> BatchParams {
        BatchParams::default()
            .with_workers(self.workers)
            .with_record_timeout(Duration::from_secs(self.record_timeout_secs))
    }
}
