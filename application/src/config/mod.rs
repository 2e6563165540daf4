//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`AnalysisParams`]: controller loop control (team size, rounds, threshold, gate default)
//! - [`RetryPolicy`]: bounded retry for every generation call
//! - [`BatchParams`]: batch concurrency and per-record timeout

pub mod analysis_params;
pub mod batch_params;
pub mod retry_policy;

pub use analysis_params::AnalysisParams;
pub use batch_params::BatchParams;
pub use retry_policy::RetryPolicy;
