//! OpenAI-compatible chat completion adapter
//!
//! Implements [`LlmSession`](sarcasm_application::LlmSession) over
//! `POST {base_url}/v1/chat/completions`. Each call sends a single user
//! message; no history is kept between calls.

pub mod protocol;
pub mod session;

pub use session::OpenAiChatSession;
