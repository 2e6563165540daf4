//! Meta-queries used for web context enrichment

/// Context returned when the text needs no background knowledge
pub const NO_WEB_SEARCH: &str = "No web search required.";
/// Context returned when no usable search keywords were produced
pub const NO_BACKGROUND: &str = "No background knowledge retrieved.";
/// Context returned when the search produced no snippets
pub const NO_SEARCH_RESULTS: &str = "No relevant search results found.";
/// Context returned when the search request itself failed
pub const SEARCH_FAILED: &str = "External search failed.";

/// Marker a keyword response uses to decline searching
pub const NO_SEARCH_MARKER: &str = "no search";

/// Templates for web context meta-queries
pub struct WebPrompt;

impl WebPrompt {
    /// Ask whether the text depends on external knowledge (answer: Yes/No)
    pub fn needs_search(text: &str) -> String {
        format!(
            r#"### Role
You decide whether understanding a text requires external background knowledge.

### Instruction
Look for named people, organizations or events, technical jargon, or references to online trends such as hashtags that are not self-explanatory.
- If the text mentions such items, it needs a search.
- If it is generic, self-contained, or a personal feeling without outside references, it does not.

### Text
"{text}"

### Your Decision
Respond with ONLY the word "Yes" or "No"."#
        )
    }

    /// Ask for one or two search keywords, or the decline marker
    pub fn search_keywords(text: &str) -> String {
        format!(
            r#"### Task
Extract the one or two most essential web search keywords from "{text}". If there are none, respond with "{NO_SEARCH_MARKER}"."#
        )
    }

    /// Ask for a one-sentence summary of search snippets
    pub fn summarize_snippets(snippets: &[String]) -> String {
        let results = snippets
            .iter()
            .map(|s| format!("- {}", s))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            r#"### Task
Summarize the key information from these search results in one sentence:
{results}"#
        )
    }
}
