//! JSONL batch input and output
//!
//! - [`read_records`]: one [`BatchRecord`](sarcasm_application::BatchRecord) per line
//! - [`JsonlRowWriter`]: appends each finished row as it completes
//! - [`write_metrics`]: the evaluation summary as pretty JSON

mod metrics;
mod reader;
mod writer;

pub use metrics::write_metrics;
pub use reader::{RecordError, read_records, parse_records};
pub use writer::JsonlRowWriter;
