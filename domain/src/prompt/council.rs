//! Meta-query templates used by the controller
//!
//! Selector, debate, gate, recruiter and summarizer prompts. Each one states
//! the exact response shape the matching parser in [`crate::quorum::parsing`]
//! expects.

use super::perspective::PerspectivePrompt;
use crate::analysis::{AgentOutputs, AgentResult};
use crate::perspective::{AgentCatalog, Perspective};

/// Templates for controller meta-queries
pub struct CouncilPrompt;

impl CouncilPrompt {
    /// Ask for exactly `n_initial` comma-separated perspective names
    pub fn team_selection(text: &str, catalog: &AgentCatalog, n_initial: usize) -> String {
        let example = catalog
            .perspectives()
            .take(n_initial.max(1))
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(",");

        format!(
            r#"### Role
You dispatch text analyses. Read the input text and choose the perspectives most likely to reveal whether it is sarcastic.

### Available Perspectives
{options}

### Task
Which {n} perspectives are the most relevant to run first on this text?

### Input Text
"{text}"

### Output Format
Respond ONLY with a comma-separated list of exactly {n} names from the list above, with no other text.
Example: {example}"#,
            options = catalog.describe(),
            n = n_initial,
            text = text,
            example = example,
        )
    }

    /// One line per activated perspective: `- Name reading: 0.80. Reason: ...`
    pub fn evidence_report(outputs: &AgentOutputs) -> String {
        outputs
            .iter()
            .map(|(p, r)| format!("- {} reading: {}. Reason: {}", p, r.strength_label(), r.explanation))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Ask the focus perspective to re-evaluate after reading its peers
    pub fn debate(
        focus: Perspective,
        current: &AgentResult,
        evidence_report: &str,
        text: &str,
        web_context: &str,
        utterance_context: Option<&str>,
    ) -> String {
        format!(
            r#"### Role
You are the {focus}, one member of a panel analyzing a text for sarcasm.

### Utterance Context
"{utterance}"

### Original Text
"{text}"

### External Context
{web_context}

### Your Initial Analysis
- Strength: {strength}
- Explanation: {explanation}

### The Panel's Analyses
{evidence}

### Task
1. Say where the panel's evidence supports or contradicts your view.
2. Refine your reasoning in light of it.
3. Give an updated score and a more nuanced explanation.

### Output Format
Respond ONLY with a single-line JSON object:
{{"PERSPECTIVE STRENGTH": <float>, "EXPLANATION": "<refined explanation that reflects the debate>"}}"#,
            focus = focus,
            utterance = PerspectivePrompt::utterance_context(utterance_context),
            text = text,
            web_context = web_context,
            strength = current.strength_label(),
            explanation = current.explanation,
            evidence = evidence_report,
        )
    }

    /// Ask whether the current team needs another perspective
    pub fn reinforcement_gate(
        text: &str,
        explanations: &[(Perspective, String)],
        utterance_context: Option<&str>,
    ) -> String {
        format!(
            r#"You are a pragmatic meta-controller. A team of analysts has just debated whether a text is sarcastic.

### Utterance Context and Text
Utterance Context: "{utterance}"
Text: "{text}"

### Post-Debate Conclusions
{conclusions}

### Task
Is the analysis still clearly incomplete, contradictory, or stuck?
- If YES, the team needs a new perspective.
- If NO, the analysis is coherent enough for a final decision.

### Output Format
Respond ONLY with a single valid JSON object whose "decision" value is "Yes" or "No":
{{"decision": "<Yes/No>"}}"#,
            utterance = PerspectivePrompt::utterance_context(utterance_context),
            text = text,
            conclusions = Self::explanation_lines(explanations),
        )
    }

    /// Ask for the single candidate that best resolves the current conflict
    pub fn recruitment(
        active: &[Perspective],
        candidates: &[Perspective],
        text: &str,
        explanations: &[(Perspective, String)],
        utterance_context: Option<&str>,
    ) -> String {
        format!(
            r#"You are a meta-reasoning assistant for a sarcasm detection panel.
- Active perspectives: {active}
- Their post-debate explanations:
{conclusions}

The analysis has reached a conflict or a dead end. These perspectives are not active yet:
- Candidates: {candidates}

Which single candidate would best resolve the conflict or fill the biggest gap?
Utterance context: "{utterance}"
Sentence: "{text}"

### Output Format
Output only the name of the best candidate, exactly as written above, or None if no candidate would help."#,
            active = Self::names(active),
            conclusions = Self::explanation_lines(explanations),
            candidates = Self::names(candidates),
            utterance = PerspectivePrompt::utterance_context(utterance_context),
            text = text,
        )
    }

    /// Ask for a neutral structured synthesis of the final scored outputs
    pub fn summary(outputs: &AgentOutputs, text: &str) -> String {
        let findings = outputs
            .iter()
            .map(|(p, r)| format!("- {}: [Strength: {}] {}", p, r.strength_label(), r.explanation))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"### Role
You are a lead analyst condensing the findings of an expert panel into an evidence-based summary.

### Context
Original Text: "{text}"

Panel findings:
{findings}

### Instruction
1. Present the evidence; do not add your own sarcastic / not sarcastic verdict.
2. Use the three headings below, in order.
3. Keep the whole summary under 120 words.

### Summary Structure
- Overall Assessment: the general consensus or the main disagreement.
- Primary Evidence: the strongest one or two findings.
- Secondary/Conflicting Signals: weaker or opposing findings, or "No significant conflicting signals were found."

### Output Format
Respond ONLY with a single valid JSON object with exactly this key, and no line breaks inside the value:
{{"summary_sentence": "<your structured summary>"}}"#,
            text = text,
            findings = findings,
        )
    }

    fn explanation_lines(explanations: &[(Perspective, String)]) -> String {
        explanations
            .iter()
            .map(|(p, e)| format!("- {}: {}", p, e))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn names(perspectives: &[Perspective]) -> String {
        perspectives
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
