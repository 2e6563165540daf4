//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod analyze_text;
pub mod council;
pub mod run_batch;
