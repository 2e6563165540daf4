//! Evaluation summary writer

use sarcasm_application::BatchReport;
use serde_json::json;
use std::path::Path;

/// Write counts, timing and (when available) metrics as pretty JSON
pub fn write_metrics(path: impl AsRef<Path>, report: &BatchReport) -> std::io::Result<()> {
    let metrics = report.metrics.as_ref().map(|m| {
        json!({
            "evaluated": m.evaluated,
            "accuracy": m.accuracy,
            "precision": m.precision,
            "recall": m.recall,
            "f1": m.f1,
            "micro_f1": m.micro_f1,
            "macro_f1": m.macro_f1,
            "weighted_f1": m.weighted_f1,
            "roc_auc": m.roc_auc,
            "confusion_matrix": m.confusion.as_rows(),
        })
    });

    let document = json!({
        "started_at": report.started_at.to_rfc3339(),
        "elapsed_secs": report.elapsed.as_secs_f64(),
        "total": report.rows.len(),
        "succeeded": report.succeeded(),
        "failed": report.failed(),
        "metrics": metrics,
    });

    let text = serde_json::to_string_pretty(&document).map_err(std::io::Error::other)?;
    std::fs::write(path, text)
}
