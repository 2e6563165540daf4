//! Per-agent results and the ordered outputs mapping

use crate::perspective::Perspective;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker prefixed to the explanation of a result produced by the parse fallback
pub const PARSE_FAILURE_MARKER: &str = "FAILED TO PARSE";

/// One perspective's score and rationale
///
/// `strength` is nominally in `[0, 1]`. Values outside that range coming
/// from a misbehaving generator are kept as-is. `None` means the agent
/// produced no usable score (e.g. a debate revision without a strength field)
/// and the entry is excluded from voting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResult {
    pub strength: Option<f64>,
    pub explanation: String,
}

impl AgentResult {
    pub fn new(strength: f64, explanation: impl Into<String>) -> Self {
        Self {
            strength: Some(strength),
            explanation: explanation.into(),
        }
    }

    pub fn unscored(explanation: impl Into<String>) -> Self {
        Self {
            strength: None,
            explanation: explanation.into(),
        }
    }

    /// Degraded result returned when generator output cannot be recovered.
    ///
    /// Carries strength `0.0`, so it is only distinguishable from a genuine
    /// zero score through the explanation marker.
    pub fn parse_failure(error: impl std::fmt::Display, raw_output: &str) -> Self {
        Self::new(
            0.0,
            format!(
                "{}: {}. RAW OUTPUT: {}",
                PARSE_FAILURE_MARKER, error, raw_output
            ),
        )
    }

    pub fn is_parse_failure(&self) -> bool {
        self.explanation.starts_with(PARSE_FAILURE_MARKER)
    }

    pub fn is_scored(&self) -> bool {
        self.strength.is_some()
    }

    /// Strength rendered for prompts and reports
    pub fn strength_label(&self) -> String {
        match self.strength {
            Some(s) => format!("{:.2}", s),
            None => "n/a".to_string(),
        }
    }
}

/// Latest result per activated perspective, in activation order
///
/// Re-inserting an existing perspective overwrites its entry in place; the
/// position (activation order) never changes. Serializes as a JSON object
/// keyed by perspective identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentOutputs {
    entries: Vec<(Perspective, AgentResult)>,
}

impl AgentOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous result, if any.
    pub fn insert(&mut self, perspective: Perspective, result: AgentResult) -> Option<AgentResult> {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(p, _)| *p == perspective) {
            return Some(std::mem::replace(existing, result));
        }
        self.entries.push((perspective, result));
        None
    }

    pub fn get(&self, perspective: Perspective) -> Option<&AgentResult> {
        self.entries
            .iter()
            .find(|(p, _)| *p == perspective)
            .map(|(_, r)| r)
    }

    pub fn contains(&self, perspective: Perspective) -> bool {
        self.get(perspective).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Perspective, &AgentResult)> {
        self.entries.iter().map(|(p, r)| (*p, r))
    }

    pub fn perspectives(&self) -> impl Iterator<Item = Perspective> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }

    /// Explanation snapshot in activation order
    pub fn explanations(&self) -> Vec<(Perspective, String)> {
        self.entries
            .iter()
            .map(|(p, r)| (*p, r.explanation.clone()))
            .collect()
    }

    /// Entries with a non-null strength, order preserved
    pub fn scored(&self) -> AgentOutputs {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(_, r)| r.is_scored())
                .cloned()
                .collect(),
        }
    }
}

impl FromIterator<(Perspective, AgentResult)> for AgentOutputs {
    fn from_iter<I: IntoIterator<Item = (Perspective, AgentResult)>>(iter: I) -> Self {
        let mut outputs = AgentOutputs::new();
        for (perspective, result) in iter {
            outputs.insert(perspective, result);
        }
        outputs
    }
}

impl Serialize for AgentOutputs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (perspective, result) in &self.entries {
            map.serialize_entry(perspective, result)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AgentOutputs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OutputsVisitor;

        impl<'de> Visitor<'de> for OutputsVisitor {
            type Value = AgentOutputs;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of perspective identifiers to agent results")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut outputs = AgentOutputs::new();
                while let Some((perspective, result)) =
                    access.next_entry::<Perspective, AgentResult>()?
                {
                    outputs.insert(perspective, result);
                }
                Ok(outputs)
            }
        }

        deserializer.deserialize_map(OutputsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut outputs = AgentOutputs::new();
        outputs.insert(Perspective::RhetoricalDevice, AgentResult::new(0.2, "a"));
        outputs.insert(Perspective::PersonaConflict, AgentResult::new(0.9, "b"));

        let previous = outputs.insert(Perspective::RhetoricalDevice, AgentResult::new(0.7, "c"));

        assert_eq!(previous, Some(AgentResult::new(0.2, "a")));
        assert_eq!(outputs.len(), 2);
        assert_eq!(
            outputs.perspectives().collect::<Vec<_>>(),
            vec![Perspective::RhetoricalDevice, Perspective::PersonaConflict]
        );
        assert_eq!(
            outputs.get(Perspective::RhetoricalDevice).unwrap().explanation,
            "c"
        );
    }

    #[test]
    fn test_scored_drops_null_strengths() {
        let outputs: AgentOutputs = [
            (Perspective::SemanticIncongruity, AgentResult::new(0.8, "x")),
            (Perspective::PragmaticContrast, AgentResult::unscored("y")),
        ]
        .into_iter()
        .collect();

        let scored = outputs.scored();
        assert_eq!(scored.len(), 1);
        assert!(scored.contains(Perspective::SemanticIncongruity));
    }

    #[test]
    fn test_parse_failure_marker() {
        let result = AgentResult::parse_failure("No JSON braces found", "garbage");
        assert_eq!(result.strength, Some(0.0));
        assert!(result.is_parse_failure());
        assert!(result.explanation.contains("RAW OUTPUT: garbage"));
        assert!(!AgentResult::new(0.0, "genuinely literal").is_parse_failure());
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let outputs: AgentOutputs = [
            (Perspective::PersonaConflict, AgentResult::new(0.5, "p")),
            (Perspective::CommonSenseViolation, AgentResult::unscored("c")),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&outputs).unwrap();
        assert_eq!(
            json,
            r#"{"PersonaConflictAgent":{"strength":0.5,"explanation":"p"},"CommonSenseViolationAgent":{"strength":null,"explanation":"c"}}"#
        );

        let back: AgentOutputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outputs);
    }
}
