//! Run Batch use case
//!
//! Analyzes many records with bounded concurrency. Each record gets a fresh
//! controller bound to a credential chosen round-robin by record index, and
//! runs under a wall-clock timeout. A timeout cancels the record's token so
//! in-flight generation stops, and the record becomes an error row. The batch
//! itself never aborts on a record failure.

use crate::config::BatchParams;
use crate::ports::controller_factory::ControllerFactory;
use crate::ports::progress::{BatchProgress, NoBatchProgress};
use crate::ports::result_sink::{NoResultSink, ResultSink};
use crate::use_cases::analyze_text::AnalyzeTextInput;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use sarcasm_domain::{AgentOutputs, AnalysisResult, ClassificationMetrics};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Label and decision used for rows that produced no analysis
pub const ERROR_LABEL: i32 = -1;
pub const ERROR_DECISION: &str = "ERROR";

/// Errors that prevent a batch from starting
#[derive(Error, Debug, PartialEq)]
pub enum BatchError {
    #[error("No API credentials configured")]
    NoCredentials,
}

/// Credentials rotated across records by index
#[derive(Debug, Clone)]
pub struct CredentialPool {
    keys: Vec<String>,
}

impl CredentialPool {
    /// Blank entries are dropped; at least one key must remain.
    pub fn new(keys: impl IntoIterator<Item = String>) -> Result<Self, BatchError> {
        let keys: Vec<String> = keys
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        if keys.is_empty() {
            return Err(BatchError::NoCredentials);
        }
        Ok(Self { keys })
    }

    /// Credential for record `index`: `keys[index % len]`
    pub fn for_record(&self, index: usize) -> &str {
        &self.keys[index % self.keys.len()]
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// One input record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
    /// Preceding conversation
    #[serde(default)]
    pub context: Option<String>,
    /// Gold label (1 = sarcastic, 0 = not)
    #[serde(default)]
    pub label: Option<i32>,
}

impl BatchRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            context: None,
            label: None,
        }
    }

    pub fn with_label(mut self, label: i32) -> Self {
        self.label = Some(label);
        self
    }
}

/// One output row: the record plus its analysis, or an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    pub index: usize,
    #[serde(flatten)]
    pub record: BatchRecord,
    /// 1 sarcastic, 0 not sarcastic, -1 error
    pub predicted_label: i32,
    pub final_decision: String,
    pub reasoning: String,
    pub summary_sentence: String,
    /// Rounds completed, or -1 on error
    pub rounds: i64,
    pub outputs: AgentOutputs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchRow {
    pub fn completed(index: usize, record: BatchRecord, result: AnalysisResult) -> Self {
        Self {
            index,
            record,
            predicted_label: result.decision.label(),
            final_decision: result.decision.to_string(),
            reasoning: result.reasoning,
            summary_sentence: result.summary,
            rounds: result.rounds_completed as i64,
            outputs: result.outputs,
            error: None,
        }
    }

    pub fn failed(index: usize, record: BatchRecord, error: impl Into<String>) -> Self {
        Self {
            index,
            record,
            predicted_label: ERROR_LABEL,
            final_decision: ERROR_DECISION.to_string(),
            reasoning: String::new(),
            summary_sentence: ERROR_DECISION.to_string(),
            rounds: -1,
            outputs: AgentOutputs::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.predicted_label == ERROR_LABEL
    }
}

/// Everything a batch produced
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Rows in input order
    pub rows: Vec<BatchRow>,
    /// Present when at least one non-error row carries a gold label
    pub metrics: Option<ClassificationMetrics>,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.rows.iter().filter(|r| r.is_error()).count()
    }

    pub fn succeeded(&self) -> usize {
        self.rows.len() - self.failed()
    }

    /// Metrics over rows with a gold label and a non-error prediction
    pub fn evaluate(rows: &[BatchRow]) -> Option<ClassificationMetrics> {
        let (y_true, y_pred): (Vec<i32>, Vec<i32>) = rows
            .iter()
            .filter(|r| !r.is_error())
            .filter_map(|r| r.record.label.map(|gold| (gold, r.predicted_label)))
            .unzip();
        if y_true.is_empty() {
            return None;
        }
        Some(ClassificationMetrics::compute(&y_true, &y_pred))
    }
}

/// Use case for analyzing a batch of records
pub struct RunBatchUseCase {
    factory: Arc<dyn ControllerFactory>,
    credentials: CredentialPool,
    params: BatchParams,
    sink: Arc<dyn ResultSink>,
}

impl RunBatchUseCase {
    pub fn new(factory: Arc<dyn ControllerFactory>, credentials: CredentialPool) -> Self {
        Self {
            factory,
            credentials,
            params: BatchParams::default(),
            sink: Arc::new(NoResultSink),
        }
    }

    pub fn with_params(mut self, params: BatchParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn ResultSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Execute with default (no-op) progress
    pub async fn execute(&self, records: Vec<BatchRecord>) -> BatchReport {
        self.execute_with_progress(records, &NoBatchProgress).await
    }

    /// Execute with progress callbacks
    pub async fn execute_with_progress(
        &self,
        records: Vec<BatchRecord>,
        progress: &dyn BatchProgress,
    ) -> BatchReport {
        let started_at = Utc::now();
        let clock = Instant::now();
        let total = records.len();
        let workers = self.params.workers.max(1);

        info!(
            "Analyzing {} records with {} workers and {} credentials",
            total,
            workers,
            self.credentials.len()
        );
        progress.on_batch_start(total);

        let mut rows = Vec::with_capacity(total);
        let mut pending = futures::stream::iter(records.into_iter().enumerate())
            .map(|(index, record)| self.process_record(index, record))
            .buffer_unordered(workers);

        while let Some(row) = pending.next().await {
            self.sink.record(&row);
            progress.on_record_complete(&row);
            rows.push(row);
        }

        rows.sort_by_key(|r| r.index);
        let report = BatchReport {
            metrics: BatchReport::evaluate(&rows),
            rows,
            started_at,
            elapsed: clock.elapsed(),
        };

        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Batch complete in {:.1}s",
            report.elapsed.as_secs_f64()
        );
        progress.on_batch_complete(&report);
        report
    }

    async fn process_record(&self, index: usize, record: BatchRecord) -> BatchRow {
        let credential = self.credentials.for_record(index);
        let cancel = CancellationToken::new();

        let controller = match self.factory.build(credential, cancel.clone()) {
            Ok(controller) => controller,
            Err(e) => {
                error!(index, "{}", e);
                return BatchRow::failed(index, record, e.to_string());
            }
        };

        let mut input = AnalyzeTextInput::new(record.text.clone());
        if let Some(context) = &record.context {
            input = input.with_context(context.clone());
        }

        let mut handle = tokio::spawn(async move { controller.analyze(input).await });

        match tokio::time::timeout(self.params.record_timeout, &mut handle).await {
            Ok(Ok(result)) => BatchRow::completed(index, record, result),
            Ok(Err(join_error)) => {
                error!(index, "Analysis task failed: {}", join_error);
                BatchRow::failed(index, record, join_error.to_string())
            }
            Err(_) => {
                cancel.cancel();
                handle.abort();
                warn!(
                    index,
                    "Record timed out after {}s",
                    self.params.record_timeout.as_secs()
                );
                BatchRow::failed(
                    index,
                    record,
                    format!(
                        "timed out after {}s",
                        self.params.record_timeout.as_secs_f64()
                    ),
                )
            }
        }
    }
}
