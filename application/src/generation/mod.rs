//! Generation services built on the [`LlmSession`](crate::ports::llm_gateway::LlmSession) port

mod resilient;

pub use resilient::ResilientGenerator;
