//! Web context port
//!
//! Supplies an opaque background string for a text. Providers never fail;
//! they return one of the sentinel phrases in
//! [`sarcasm_domain::prompt::web`] instead.

use async_trait::async_trait;
use sarcasm_domain::prompt::web::NO_WEB_SEARCH;

#[async_trait]
pub trait WebContextProvider: Send + Sync {
    async fn search_and_summarize(&self, text: &str) -> String;
}

/// Provider used when web enrichment is disabled
pub struct NoWebContext;

#[async_trait]
impl WebContextProvider for NoWebContext {
    async fn search_and_summarize(&self, _text: &str) -> String {
        NO_WEB_SEARCH.to_string()
    }
}
