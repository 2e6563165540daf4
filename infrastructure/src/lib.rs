//! Infrastructure layer for sarcasm-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the OpenAI-compatible chat session, the
//! DuckDuckGo web context provider, the summarizer, JSONL record I/O and
//! configuration file loading.

pub mod config;
pub mod factory;
pub mod openai;
pub mod records;
pub mod summarizer;
pub mod web;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use factory::CouncilFactory;
pub use openai::OpenAiChatSession;
pub use records::{JsonlRowWriter, RecordError, read_records, write_metrics};
pub use summarizer::LlmSummarizer;
pub use web::DuckDuckGoContextProvider;
