//! Web context configuration from TOML (`[web_search]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebSearchConfig {
    /// When false, every analysis runs with "No web search required."
    pub enabled: bool,
    /// Snippets passed to the summary query
    pub max_snippets: usize,
    /// HTML search endpoint; the query is appended as `q`
    pub search_url: String,
}

impl Default for FileWebSearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_snippets: 3,
            search_url: "https://html.duckduckgo.com/html/".to_string(),
        }
    }
}
