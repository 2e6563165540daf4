//! Prompt domain
//!
//! Templates for every generation call the council makes: the six
//! perspective analyses, the controller's meta-queries, and web enrichment.

mod council;
mod perspective;
pub mod web;

pub use council::CouncilPrompt;
pub use perspective::{NO_EXTERNAL_CONTEXT, NO_UTTERANCE_CONTEXT, PerspectivePrompt};
pub use web::WebPrompt;
