//! Structured-output recovery for perspective and meta-query responses.
//!
//! Generators are asked for single-line JSON objects but regularly wrap them
//! in markdown fences, truncate them, or use Python-style quoting. These
//! functions recover what they can and never fail: every function has a
//! documented default for unrecoverable text.
//!
//! # Functions
//!
//! | Function | Use Case | Default on failure |
//! |----------|----------|--------------------|
//! | [`parse_agent_output`] | Perspective analysis | strength `0.0`, failure marker in explanation |
//! | [`try_parse_decision`] / [`parse_decision`] | Gate yes/no | `None` / `false` |
//! | [`parse_summary`] | Summarizer synthesis | `"no summary"` |
//! | [`parse_revision`] | Debate re-evaluation (strict, no repair) | `None` |
//! | [`parse_agent_list`] | Initial team selection | empty list |
//! | [`parse_agent_name`] | Recruitment | `None` |

use crate::analysis::AgentResult;
use crate::perspective::{AgentCatalog, Perspective};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use thiserror::Error;

/// Key holding the perspective score
pub const STRENGTH_FIELD: &str = "PERSPECTIVE STRENGTH";
/// Key holding the perspective rationale
pub const EXPLANATION_FIELD: &str = "EXPLANATION";
/// Key holding a gate yes/no answer
pub const DECISION_FIELD: &str = "decision";
/// Key holding the summarizer output
pub const SUMMARY_FIELD: &str = "summary_sentence";
/// Summary used when the summarizer output is unrecoverable
pub const NO_SUMMARY: &str = "no summary";

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[a-zA-Z]*\n?").expect("static regex"));
static SINGLE_QUOTED_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([A-Za-z_][\w ]*)'(\s*:\s*)").expect("static regex"));
static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\}").expect("static regex"));

#[derive(Debug, Error)]
enum RecoveryError {
    #[error("No JSON braces found")]
    NoBraces,

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("expected a JSON object")]
    NotAnObject,

    #[error("could not convert {field} to float: {value}")]
    NotANumber { field: &'static str, value: String },
}

/// Recover a perspective result from raw generator text.
///
/// Total: unrecoverable input yields strength `0.0` and an explanation of the
/// form `FAILED TO PARSE: <error>. RAW OUTPUT: <raw>`.
///
/// # Examples
///
/// ```
/// use sarcasm_domain::quorum::parsing::parse_agent_output;
///
/// let result = parse_agent_output(r#"{"PERSPECTIVE STRENGTH": 0.8, "EXPLANATION": "Hyperbole."}"#);
/// assert_eq!(result.strength, Some(0.8));
/// assert_eq!(result.explanation, "Hyperbole.");
///
/// let failed = parse_agent_output("no json here");
/// assert_eq!(failed.strength, Some(0.0));
/// assert!(failed.is_parse_failure());
/// ```
pub fn parse_agent_output(raw: &str) -> AgentResult {
    let recovered = extract_object(raw, &[STRENGTH_FIELD, EXPLANATION_FIELD]).and_then(|map| {
        let strength = match map.get(STRENGTH_FIELD) {
            None => 0.0,
            Some(value) => coerce_float(value).ok_or_else(|| RecoveryError::NotANumber {
                field: STRENGTH_FIELD,
                value: value.to_string(),
            })?,
        };
        Ok(AgentResult::new(strength, read_text(&map, EXPLANATION_FIELD)))
    });

    match recovered {
        Ok(result) => result,
        Err(e) => AgentResult::parse_failure(e, raw),
    }
}

/// Recover a yes/no gate answer.
///
/// Returns `None` when the text cannot be recovered or the decision is not a
/// string, so callers can apply their own default. A recovered object without
/// a decision key reads as "no".
pub fn try_parse_decision(raw: &str) -> Option<bool> {
    let map = extract_object(raw, &[DECISION_FIELD]).ok()?;
    match map.get(DECISION_FIELD) {
        None => Some(false),
        Some(Value::String(s)) => Some(s.to_lowercase().contains("yes")),
        Some(_) => None,
    }
}

/// Recover a yes/no answer, defaulting to `false` on any failure
pub fn parse_decision(raw: &str) -> bool {
    try_parse_decision(raw).unwrap_or(false)
}

/// Recover the summarizer's `summary_sentence`, or [`NO_SUMMARY`]
pub fn parse_summary(raw: &str) -> String {
    match extract_object(raw, &[SUMMARY_FIELD]) {
        Ok(map) => match map.get(SUMMARY_FIELD) {
            Some(Value::String(s)) => s.clone(),
            None | Some(Value::Null) => NO_SUMMARY.to_string(),
            Some(other) => other.to_string(),
        },
        Err(_) => NO_SUMMARY.to_string(),
    }
}

/// Strictly decode a debate revision.
///
/// Accepts only a response that starts with `{` and is a complete JSON object.
/// No fence stripping or repair. A missing or non-numeric strength yields an
/// unscored result.
pub fn parse_revision(raw: &str) -> Option<AgentResult> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('{') {
        return None;
    }
    let Value::Object(map) = serde_json::from_str::<Value>(trimmed).ok()? else {
        return None;
    };
    Some(AgentResult {
        strength: map.get(STRENGTH_FIELD).and_then(coerce_float),
        explanation: read_text(&map, EXPLANATION_FIELD),
    })
}

/// Parse a comma-separated list of perspective names.
///
/// Keeps cataloged names only, de-duplicated, in response order.
pub fn parse_agent_list(raw: &str, catalog: &AgentCatalog) -> Vec<Perspective> {
    let mut selected = Vec::new();
    for name in raw.split(',') {
        if let Some(perspective) = catalog.resolve(name.trim())
            && !selected.contains(&perspective)
        {
            selected.push(perspective);
        }
    }
    selected
}

/// Parse a bare perspective name chosen from `candidates`.
///
/// Exact, case-sensitive match after trimming. The literal `None` and any
/// name outside `candidates` yield `None`.
pub fn parse_agent_name(raw: &str, candidates: &[Perspective]) -> Option<Perspective> {
    let name = raw.trim();
    if name == "None" {
        return None;
    }
    candidates.iter().copied().find(|p| p.as_str() == name)
}

/// Shared recovery pipeline: fence strip, brace location, repair,
/// normalization, decode.
fn extract_object(raw: &str, markers: &[&str]) -> Result<Map<String, Value>, RecoveryError> {
    let text = strip_code_fence(raw.trim());

    match (text.find('{'), text.rfind('}')) {
        (None, None) => Err(RecoveryError::NoBraces),
        (None, Some(end)) => decode(&format!("{{{}", &text[..=end])),
        (Some(start), None) => {
            let fragment = &text[start..];
            decode(&repair_unterminated(fragment, markers)).or_else(|e| {
                match close_at_last_field(fragment, markers) {
                    Some(closed) => decode(&closed).map_err(|_| e),
                    None => Err(e),
                }
            })
        }
        (Some(start), Some(end)) => decode(text.get(start..=end).unwrap_or_default()),
    }
}

/// Decode a candidate object, normalizing quoting only if it is not valid as-is.
fn decode(candidate: &str) -> Result<Map<String, Value>, RecoveryError> {
    let value = match serde_json::from_str::<Value>(candidate) {
        Ok(value) => value,
        Err(_) => {
            let normalized = SINGLE_QUOTED_KEY.replace_all(candidate, "\"$1\"$2");
            let normalized = TRAILING_COMMA.replace_all(&normalized, "}");
            serde_json::from_str::<Value>(&normalized)?
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(RecoveryError::NotAnObject),
    }
}

fn strip_code_fence(text: &str) -> &str {
    let mut text = text;
    if text.starts_with("```")
        && let Some(fence) = OPENING_FENCE.find(text)
    {
        text = &text[fence.end()..];
    }
    if text.ends_with("```")
        && let Some(idx) = text.rfind("```")
    {
        text = &text[..idx];
    }
    text
}

/// Close a truncated object when one of the expected keys made it through.
fn repair_unterminated(fragment: &str, markers: &[&str]) -> String {
    let mut repaired = fragment.trim_end().to_string();
    if markers.iter().any(|m| repaired.contains(m)) {
        if inside_string_literal(&repaired) {
            repaired.push('"');
        }
        repaired.push('}');
    }
    repaired
}

/// Drop a half-written trailing field and close the object after the last
/// complete one, e.g. `{"A": 0.6, "EXPL` becomes `{"A": 0.6}`.
fn close_at_last_field(fragment: &str, markers: &[&str]) -> Option<String> {
    if !markers.iter().any(|m| fragment.contains(m)) {
        return None;
    }

    let mut depth = 0usize;
    let mut inside = false;
    let mut escaped = false;
    let mut last_comma = None;
    for (idx, c) in fragment.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if inside => escaped = true,
            '"' => inside = !inside,
            _ if inside => {}
            '{' | '[' => depth += 1,
            '}' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 1 => last_comma = Some(idx),
            _ => {}
        }
    }

    last_comma.map(|idx| format!("{}}}", &fragment[..idx]))
}

fn inside_string_literal(text: &str) -> bool {
    let mut inside = false;
    let mut escaped = false;
    for c in text.chars() {
        match c {
            _ if escaped => escaped = false,
            '\\' if inside => escaped = true,
            '"' => inside = !inside,
            _ => {}
        }
    }
    inside
}

fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn read_text(map: &Map<String, Value>, field: &str) -> String {
    match map.get(field) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== parse_agent_output ====================

    #[test]
    fn test_well_formed_object() {
        for (strength, explanation) in [(0.0, ""), (0.35, "mild irony"), (1.0, "clear \"mockery\"")] {
            let raw = serde_json::json!({
                STRENGTH_FIELD: strength,
                EXPLANATION_FIELD: explanation,
            })
            .to_string();
            let result = parse_agent_output(&raw);
            assert_eq!(result.strength, Some(strength));
            assert_eq!(result.explanation, explanation);
        }
    }

    #[test]
    fn test_code_fence_and_prose_are_stripped() {
        let raw = "```json\n{\"PERSPECTIVE STRENGTH\": 0.9, \"EXPLANATION\": \"Obvious hyperbole.\"}\n```";
        let result = parse_agent_output(raw);
        assert_eq!(result.strength, Some(0.9));
        assert_eq!(result.explanation, "Obvious hyperbole.");

        let raw = "Here is my answer: {\"PERSPECTIVE STRENGTH\": 0.1, \"EXPLANATION\": \"Literal.\"} Thanks!";
        assert_eq!(parse_agent_output(raw).strength, Some(0.1));
    }

    #[test]
    fn test_unterminated_explanation_is_repaired() {
        let raw = r#"{"PERSPECTIVE STRENGTH": 0.75, "EXPLANATION": "The praise is clearly inverted"#;
        let result = parse_agent_output(raw);
        assert_eq!(result.strength, Some(0.75));
        assert_eq!(result.explanation, "The praise is clearly inverted");
    }

    #[test]
    fn test_truncated_after_strength_is_repaired() {
        let raw = r#"{"PERSPECTIVE STRENGTH": 0.6,"#;
        let result = parse_agent_output(raw);
        assert_eq!(result.strength, Some(0.6));
        assert_eq!(result.explanation, "");
    }

    #[test]
    fn test_truncated_inside_next_key_keeps_strength() {
        for raw in [
            r#"{"PERSPECTIVE STRENGTH": 0.6, "EXPLANATION":"#,
            r#"{"PERSPECTIVE STRENGTH": 0.6, "EXPLANATION"#,
            r#"{"PERSPECTIVE STRENGTH": 0.6, "EXPL"#,
        ] {
            let result = parse_agent_output(raw);
            assert_eq!(result.strength, Some(0.6), "input: {}", raw);
            assert_eq!(result.explanation, "");
            assert!(!result.is_parse_failure());
        }
    }

    #[test]
    fn test_explanation_text_is_not_normalized() {
        let result = parse_agent_output(
            r#"{"PERSPECTIVE STRENGTH": 0.6, "EXPLANATION": "He said 'wow': nice"}"#,
        );
        assert_eq!(result.strength, Some(0.6));
        assert_eq!(result.explanation, "He said 'wow': nice");

        let result = parse_agent_output(
            r#"{"PERSPECTIVE STRENGTH": 0.6, "EXPLANATION": "ends with brace, }"}"#,
        );
        assert_eq!(result.strength, Some(0.6));
        assert_eq!(result.explanation, "ends with brace, }");
    }

    #[test]
    fn test_missing_opening_brace_is_synthesized() {
        let raw = r#""PERSPECTIVE STRENGTH": 0.4, "EXPLANATION": "Ambiguous."}"#;
        let result = parse_agent_output(raw);
        assert_eq!(result.strength, Some(0.4));
        assert_eq!(result.explanation, "Ambiguous.");
    }

    #[test]
    fn test_single_quoted_keys_and_trailing_comma() {
        let canonical = parse_agent_output(r#"{"PERSPECTIVE STRENGTH": 0.8, "EXPLANATION": "Irony."}"#);

        let single_quoted = parse_agent_output(r#"{'PERSPECTIVE STRENGTH': 0.8, 'EXPLANATION': "Irony."}"#);
        assert_eq!(single_quoted, canonical);

        let trailing_comma = parse_agent_output(r#"{"PERSPECTIVE STRENGTH": 0.8, "EXPLANATION": "Irony.",}"#);
        assert_eq!(trailing_comma, canonical);
    }

    #[test]
    fn test_no_braces_reports_failure_with_raw_text() {
        let raw = "I think this is sarcastic, around 0.9.";
        let result = parse_agent_output(raw);
        assert_eq!(result.strength, Some(0.0));
        assert!(result.explanation.starts_with("FAILED TO PARSE: No JSON braces found"));
        assert!(result.explanation.ends_with(&format!("RAW OUTPUT: {}", raw)));
    }

    #[test]
    fn test_transport_sentinel_degrades() {
        let result = parse_agent_output("ERROR");
        assert_eq!(result.strength, Some(0.0));
        assert!(result.is_parse_failure());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let result = parse_agent_output(r#"{"EXPLANATION": "No score given."}"#);
        assert_eq!(result.strength, Some(0.0));
        assert_eq!(result.explanation, "No score given.");
        assert!(!result.is_parse_failure());

        let result = parse_agent_output(r#"{"PERSPECTIVE STRENGTH": 0.3}"#);
        assert_eq!(result.explanation, "");
    }

    #[test]
    fn test_string_strength_is_cast() {
        let result = parse_agent_output(r#"{"PERSPECTIVE STRENGTH": "0.65", "EXPLANATION": "x"}"#);
        assert_eq!(result.strength, Some(0.65));
    }

    #[test]
    fn test_non_numeric_strength_fails() {
        let result = parse_agent_output(r#"{"PERSPECTIVE STRENGTH": "high", "EXPLANATION": "x"}"#);
        assert_eq!(result.strength, Some(0.0));
        assert!(result.is_parse_failure());
    }

    #[test]
    fn test_out_of_range_strength_is_kept() {
        let result = parse_agent_output(r#"{"PERSPECTIVE STRENGTH": 7, "EXPLANATION": "x"}"#);
        assert_eq!(result.strength, Some(7.0));
    }

    #[test]
    fn test_non_object_fails() {
        let result = parse_agent_output("[1, 2] }");
        assert!(result.is_parse_failure());
    }

    // ==================== parse_decision ====================

    #[test]
    fn test_decision_yes_and_no() {
        assert!(parse_decision(r#"{"decision": "Yes"}"#));
        assert!(parse_decision("```json\n{\"decision\": \"YES, a new view is needed\"}\n```"));
        assert!(!parse_decision(r#"{"decision": "No"}"#));
    }

    #[test]
    fn test_decision_failures_default_to_false() {
        assert!(!parse_decision("Yes"));
        assert!(!parse_decision("ERROR"));
        assert_eq!(try_parse_decision("Yes"), None);
        assert_eq!(try_parse_decision(r#"{"decision": true}"#), None);
    }

    #[test]
    fn test_decision_missing_key_reads_as_no() {
        assert_eq!(try_parse_decision(r#"{"answer": "yes"}"#), Some(false));
    }

    #[test]
    fn test_decision_truncated_is_repaired() {
        assert_eq!(try_parse_decision(r#"{"decision": "yes"#), Some(true));
    }

    // ==================== parse_summary ====================

    #[test]
    fn test_summary() {
        assert_eq!(
            parse_summary(r#"{"summary_sentence": "Overall Assessment: mixed."}"#),
            "Overall Assessment: mixed."
        );
        assert_eq!(parse_summary("ERROR"), NO_SUMMARY);
        assert_eq!(parse_summary(r#"{"other": 1}"#), NO_SUMMARY);
    }

    // ==================== parse_revision ====================

    #[test]
    fn test_revision_strict() {
        let revised = parse_revision(r#"  {"PERSPECTIVE STRENGTH": 0.7, "EXPLANATION": "Revised."}"#);
        assert_eq!(revised, Some(AgentResult::new(0.7, "Revised.")));

        assert_eq!(parse_revision(""), None);
        assert_eq!(parse_revision("```json\n{}\n```"), None);
        assert_eq!(parse_revision(r#"{"PERSPECTIVE STRENGTH": 0.7,"#), None);
    }

    #[test]
    fn test_revision_without_strength_is_unscored() {
        let revised = parse_revision(r#"{"EXPLANATION": "Changed my mind."}"#).unwrap();
        assert_eq!(revised.strength, None);
        assert_eq!(revised.explanation, "Changed my mind.");
    }

    // ==================== name parsing ====================

    #[test]
    fn test_agent_list_filters_and_dedupes() {
        let catalog = AgentCatalog::default();
        let parsed = parse_agent_list(
            " RhetoricalDeviceAgent, IronyAgent,RhetoricalDeviceAgent , PersonaConflictAgent",
            &catalog,
        );
        assert_eq!(
            parsed,
            vec![Perspective::RhetoricalDevice, Perspective::PersonaConflict]
        );
        assert!(parse_agent_list("ERROR", &catalog).is_empty());
    }

    #[test]
    fn test_agent_name_exact_match() {
        let candidates = [Perspective::PragmaticContrast, Perspective::PersonaConflict];
        assert_eq!(
            parse_agent_name(" PersonaConflictAgent\n", &candidates),
            Some(Perspective::PersonaConflict)
        );
        assert_eq!(parse_agent_name("None", &candidates), None);
        assert_eq!(parse_agent_name("personaconflictagent", &candidates), None);
        assert_eq!(parse_agent_name("RhetoricalDeviceAgent", &candidates), None);
    }
}
