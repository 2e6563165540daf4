//! Web context enrichment
//!
//! | Provider | Backend |
//! |----------|---------|
//! | [`DuckDuckGoContextProvider`] | DuckDuckGo HTML results page, snippets via `scraper` |

pub mod duckduckgo;

pub use duckduckgo::{DuckDuckGoContextProvider, extract_snippets};
