//! Text generation port
//!
//! [`TextGenerator`] is what every perspective and meta-query talks to. It is
//! infallible by contract: transport problems surface as the
//! [`GENERATION_FAILED`] sentinel, which downstream parsers treat as
//! malformed output.

use async_trait::async_trait;

/// Sentinel returned when generation could not produce any text
pub const GENERATION_FAILED: &str = "ERROR";

/// Prompt in, text out. Never fails.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, prompt: &str) -> String;
}

/// Whether a completion is the transport failure sentinel
pub fn is_generation_failure(response: &str) -> bool {
    response.trim() == GENERATION_FAILED
}
