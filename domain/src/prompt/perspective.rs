//! Prompt templates for the six perspective analyses

use crate::perspective::Perspective;

/// Placeholder for a missing or skipped web context
pub const NO_EXTERNAL_CONTEXT: &str = "Not available.";
/// Placeholder for a missing conversation context
pub const NO_UTTERANCE_CONTEXT: &str = "No direct utterance context provided.";

/// Output contract shared by every perspective prompt
const OUTPUT_CONTRACT: &str = r#"Respond ONLY with a single-line JSON object:
{"PERSPECTIVE STRENGTH": <float from 0.0 to 1.0>, "EXPLANATION": "<your reasoning>"}"#;

/// Templates for perspective analysis prompts
pub struct PerspectivePrompt;

impl PerspectivePrompt {
    /// Build the analysis prompt for one perspective.
    ///
    /// Web context that reports "no web search" is treated as absent.
    pub fn analysis(
        perspective: Perspective,
        text: &str,
        web_context: Option<&str>,
        utterance_context: Option<&str>,
    ) -> String {
        let mut targets = vec![
            format!(
                "- Utterance Context (the conversation so far): {}",
                Self::utterance_context(utterance_context)
            ),
            format!("- Original Text: \"{}\"", text),
        ];
        if perspective.uses_web_context() {
            targets.push(format!(
                "- External Context: {}",
                Self::external_context(web_context)
            ));
        }

        format!(
            r#"### Role
{role}

### Instruction
{checklist}

### Analysis Target
{targets}

### Output Format
Score {scope} only, where 0.0 means {low} and 1.0 means {high}.
{contract}
The EXPLANATION must {explain}"#,
            role = Self::role(perspective),
            checklist = Self::checklist(perspective),
            targets = targets.join("\n"),
            scope = Self::scope(perspective),
            low = Self::scale(perspective).0,
            high = Self::scale(perspective).1,
            contract = OUTPUT_CONTRACT,
            explain = Self::explanation_rule(perspective),
        )
    }

    /// Render the web context line content
    pub fn external_context(web_context: Option<&str>) -> &str {
        match web_context {
            Some(ctx) if !ctx.is_empty() && !ctx.to_lowercase().contains("no web search") => ctx,
            _ => NO_EXTERNAL_CONTEXT,
        }
    }

    /// Render the utterance context line content
    pub fn utterance_context(utterance_context: Option<&str>) -> &str {
        match utterance_context {
            Some(ctx) if !ctx.is_empty() => ctx,
            _ => NO_UTTERANCE_CONTEXT,
        }
    }

    fn role(perspective: Perspective) -> &'static str {
        match perspective {
            Perspective::SemanticIncongruity => {
                "You are a semantic analyst who detects sarcasm from the gap between what a statement literally says and what it means, using sentiment and everyday world knowledge."
            }
            Perspective::PragmaticContrast => {
                "You are a pragmatic analyst who detects sarcasm from a clear clash between the situation and the style of language used. A style contrast alone is not enough unless it forces a non-literal reading."
            }
            Perspective::RhetoricalDevice => {
                "You are a rhetorical analyst who judges sarcasm strictly through rhetorical cues. Plain negativity without a rhetorical contradiction is not sarcasm."
            }
            Perspective::EmotionPolarityInverter => {
                "You are an emotion polarity meter. You measure how strongly the surface sentiment of the words contradicts the real sentiment of the situation."
            }
            Perspective::CommonSenseViolation => {
                "You are a commonsense analyst. Only extreme and obvious violations of common sense count as evidence of sarcasm."
            }
            Perspective::PersonaConflict => {
                "You are a persona analyst. Sarcasm is indicated only when the persona the speaker projects and what they actually say are in sharp conflict."
            }
        }
    }

    fn checklist(perspective: Perspective) -> &'static str {
        match perspective {
            Perspective::SemanticIncongruity => {
                r#"Work through these steps internally:
1. Context: what tone does the background lead you to expect?
2. Meaning: what is the literal meaning, and is an implied meaning different? Direct criticism is not sarcasm by itself.
3. Emotion: does the expressed emotion clash with the words or with the situation?
4. Common sense: taken at face value, does the statement fit or contradict ordinary expectations?
5. Verdict: is there a clear inversion of meaning or sharp emotional mismatch that makes the literal reading unlikely?"#
            }
            Perspective::PragmaticContrast => {
                r#"Work through these steps internally:
1. Situation: how serious is the event being described?
2. Style: is the language formal, casual, grandiose, flat?
3. Mismatch: is the clash jarring enough that a literal reading is implausible, or could it be genuine emphasis or idiosyncratic speech?
4. Verdict: score high only if no literal explanation is reasonable."#
            }
            Perspective::RhetoricalDevice => {
                r#"Check the statement for:
- Irony: the literal meaning is the opposite of the intended one.
- Hyperbole: exaggeration that produces mockery or absurdity rather than plain emphasis.
- Metaphor or simile with a mocking contrast.
- Understatement that implies the opposite strongly.
- Juxtaposition of opposing ideas for ironic effect.
- Sarcastic questions or absurd hypotheticals aimed at the real situation.
Then decide whether the devices together force a mocking, non-literal reading. If not clearly, lean low."#
            }
            Perspective::EmotionPolarityInverter => {
                r#"Rules:
1. Only strong, obvious inversions count, such as positive words about a clearly bad situation.
2. Text that is simply emotional without inversion scores 0.0.
3. Use the external context to understand what actually happened.
4. Score above 0.5 only when both the text and the context justify the inversion. When in doubt, score lower."#
            }
            Perspective::CommonSenseViolation => {
                r#"Work through these steps internally:
1. Obviousness: taken literally, is the statement impossible or absurd to any reasonable adult?
2. Knowledge: ignore anything that needs expert knowledge to judge.
3. Intent: is the violation deliberate mockery, or just a joke, exaggeration or mistake?
4. Verdict: unless the violation is extreme and unmistakable, score low."#
            }
            Perspective::PersonaConflict => {
                r#"Work through these steps internally:
1. Persona: what stance or self-image does the speaker project?
2. Consistency: does any part of the statement strongly contradict that persona, or are inconsistencies subtle or playful?
3. Context: use external context only to clarify well-known personas.
4. Verdict: score high only for a clear conflict with no reasonable alternative reading."#
            }
        }
    }

    fn scope(perspective: Perspective) -> &'static str {
        match perspective {
            Perspective::SemanticIncongruity => "semantic incongruity",
            Perspective::PragmaticContrast => "pragmatic contrast",
            Perspective::RhetoricalDevice => "sarcasm-related rhetorical devices",
            Perspective::EmotionPolarityInverter => "emotion polarity inversion",
            Perspective::CommonSenseViolation => "commonsense violation",
            Perspective::PersonaConflict => "persona conflict",
        }
    }

    fn scale(perspective: Perspective) -> (&'static str, &'static str) {
        match perspective {
            Perspective::SemanticIncongruity => ("no incongruity", "strong incongruity"),
            Perspective::PragmaticContrast => ("no mismatch", "a clear, strong mismatch"),
            Perspective::RhetoricalDevice => ("no relevant device", "a clear, strong device"),
            Perspective::EmotionPolarityInverter => ("no inversion", "strong inversion"),
            Perspective::CommonSenseViolation => ("no violation", "a strong, clear violation"),
            Perspective::PersonaConflict => ("no conflict", "a clear, strong conflict"),
        }
    }

    fn explanation_rule(perspective: Perspective) -> &'static str {
        match perspective {
            Perspective::SemanticIncongruity => {
                "state which intent (sarcastic or literal) is more likely, and if sarcastic, name the target of the mockery."
            }
            Perspective::PragmaticContrast => {
                "describe the mismatch and why mockery is the only plausible reason for it."
            }
            Perspective::RhetoricalDevice => {
                "name the device and why its use is mocking rather than simple emphasis or humor."
            }
            Perspective::EmotionPolarityInverter => {
                "be one sentence citing the sentiment words and the contradicting situation."
            }
            Perspective::CommonSenseViolation => {
                "state the violated principle and why it is meant to mock rather than just joke."
            }
            Perspective::PersonaConflict => "briefly state the persona and the conflicting statement.",
        }
    }
}
