//! JSONL record reader

use sarcasm_application::BatchRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Read every record from a JSONL file
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<BatchRecord>, RecordError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&content)
}

/// Parse JSONL content. Blank lines are skipped; line numbers are 1-based.
pub fn parse_records(content: &str) -> Result<Vec<BatchRecord>, RecordError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| RecordError::Parse { line: i + 1, source })
        })
        .collect()
}
