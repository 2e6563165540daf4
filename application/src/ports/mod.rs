//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod controller_factory;
pub mod llm_gateway;
pub mod progress;
pub mod result_sink;
pub mod summarizer;
pub mod text_generator;
pub mod web_context;
