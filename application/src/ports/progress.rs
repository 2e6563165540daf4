//! Progress notification ports
//!
//! Defines the interfaces for reporting progress during single analyses and
//! batch runs. Implementations live in the presentation layer.

use crate::use_cases::run_batch::{BatchReport, BatchRow};
use sarcasm_domain::{AgentResult, AnalysisPhase, AnalysisResult, Perspective};

/// Callback for progress updates during one analysis
pub trait AnalysisProgress: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &AnalysisPhase);

    /// Called when the analysis finishes
    fn on_complete(&self, result: &AnalysisResult);

    // ==================== Council Callbacks ====================

    /// Called once the initial team is chosen.
    fn on_team_selected(&self, _team: &[Perspective]) {}

    /// Called when a perspective produces its first result.
    fn on_agent_activated(&self, _perspective: Perspective, _result: &AgentResult) {}

    /// Called when a debate round overwrites a perspective's result.
    fn on_agent_revised(&self, _perspective: Perspective, _result: &AgentResult) {}

    /// Called with the gate's answer for a round.
    fn on_gate_decision(&self, _round: usize, _needs_reinforcement: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AnalysisProgress for NoProgress {
    fn on_phase_start(&self, _phase: &AnalysisPhase) {}
    fn on_complete(&self, _result: &AnalysisResult) {}
}

/// Callback for progress updates during a batch run
pub trait BatchProgress: Send + Sync {
    fn on_batch_start(&self, total: usize);
    fn on_record_complete(&self, row: &BatchRow);
    fn on_batch_complete(&self, report: &BatchReport);
}

/// No-op batch progress notifier
pub struct NoBatchProgress;

impl BatchProgress for NoBatchProgress {
    fn on_batch_start(&self, _total: usize) {}
    fn on_record_complete(&self, _row: &BatchRow) {}
    fn on_batch_complete(&self, _report: &BatchReport) {}
}
