//! JSONL file writer for batch result rows.
//!
//! Each [`BatchRow`] is serialized as a single JSON line with a `timestamp`
//! field, appended to the file via a buffered writer and flushed at once so
//! an interrupted batch keeps every finished row.

use sarcasm_application::ports::result_sink::ResultSink;
use sarcasm_application::BatchRow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlRowWriter {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlRowWriter {
    /// Create the file (and parent directories), truncating any existing one.
    pub fn create(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the output file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for JsonlRowWriter {
    fn record(&self, row: &BatchRow) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut value = match serde_json::to_value(row) {
            Ok(v) => v,
            Err(e) => {
                warn!(index = row.index, "Could not serialize row: {}", e);
                return;
            }
        };
        if let serde_json::Value::Object(map) = &mut value {
            map.insert("timestamp".to_string(), serde_json::Value::String(timestamp));
        }

        let Ok(line) = serde_json::to_string(&value) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
                warn!("Could not write row to {}: {}", self.path.display(), e);
            }
        }
    }
}

impl Drop for JsonlRowWriter {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
