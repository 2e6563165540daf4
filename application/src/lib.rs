//! Application layer for sarcasm-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod agents;
pub mod config;
pub mod generation;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use agents::{AgentRoster, PerspectiveAgent};
pub use config::{AnalysisParams, BatchParams, RetryPolicy};
pub use generation::ResilientGenerator;
pub use ports::{
    controller_factory::{ControllerFactory, FactoryError},
    llm_gateway::{GatewayError, LlmSession},
    progress::{AnalysisProgress, BatchProgress, NoBatchProgress, NoProgress},
    result_sink::{NoResultSink, ResultSink},
    summarizer::{NoSummary, Summarizer},
    text_generator::{GENERATION_FAILED, TextGenerator, is_generation_failure},
    web_context::{NoWebContext, WebContextProvider},
};
pub use use_cases::analyze_text::{AnalyzeTextInput, AnalyzeTextUseCase};
pub use use_cases::council::{
    DebateEngine, DebateOutcome, Recruiter, ReinforcementGate, TeamSelector,
};
pub use use_cases::run_batch::{
    BatchError, BatchRecord, BatchReport, BatchRow, CredentialPool, RunBatchUseCase,
};
