//! Console output formatter for analysis results

use colored::Colorize;
use sarcasm_application::BatchReport;
use sarcasm_domain::{AgentResult, AnalysisResult, OutputFormat, Verdict};

/// Formats analysis results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a result in the requested format
    pub fn render(result: &AnalysisResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(result),
            OutputFormat::Decision => Self::format_decision(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format the complete result
    pub fn format(result: &AnalysisResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Sarcasm Council Results"));
        output.push('\n');

        output.push_str(&format!("{} {}\n\n", "Text:".cyan().bold(), result.text));

        output.push_str(&format!(
            "{} {} ({} rounds)\n",
            "Activated:".cyan().bold(),
            result
                .activated_agents
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            result.rounds_completed
        ));

        output.push_str(&Self::section_header("Perspectives"));
        if result.outputs.is_empty() {
            output.push_str(&format!("\n{}\n", "No scored perspective.".dimmed()));
        }
        for (perspective, agent_result) in result.outputs.iter() {
            output.push_str(&format!(
                "\n{} {}\n{}\n",
                format!("── {} ──", perspective).yellow().bold(),
                Self::strength(agent_result),
                Self::indent(&agent_result.explanation, "  ")
            ));
        }

        output.push_str(&Self::section_header("Vote"));
        output.push_str(&format!(
            "\n{} {}\n{}\n",
            "Decision:".bold(),
            Self::verdict(result.decision),
            result.reasoning
        ));

        output.push_str(&Self::section_header("Summary"));
        output.push_str(&format!("\n{}\n", result.summary));

        output.push_str(&Self::footer());
        output
    }

    /// Format the decision only (concise output)
    pub fn format_decision(result: &AnalysisResult) -> String {
        format!(
            "{}\n{}\n",
            Self::verdict(result.decision),
            result.reasoning.dimmed()
        )
    }

    /// Format as JSON
    pub fn format_json(result: &AnalysisResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Closing summary of a batch run
    pub fn format_batch_report(report: &BatchReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Batch Results"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}  {} {}  {} {}  ({:.1}s)\n",
            "Records:".cyan().bold(),
            report.rows.len(),
            "Succeeded:".green().bold(),
            report.succeeded(),
            "Failed:".red().bold(),
            report.failed(),
            report.elapsed.as_secs_f64()
        ));

        match &report.metrics {
            Some(m) => {
                output.push_str(&Self::section_header("Evaluation"));
                output.push_str(&format!("\n  Evaluated   {}\n", m.evaluated));
                for (name, value) in [
                    ("Accuracy", m.accuracy),
                    ("Precision", m.precision),
                    ("Recall", m.recall),
                    ("F1", m.f1),
                    ("Micro-F1", m.micro_f1),
                    ("Macro-F1", m.macro_f1),
                    ("Weighted-F1", m.weighted_f1),
                    ("ROC-AUC", m.roc_auc),
                ] {
                    output.push_str(&format!("  {:<11} {:.4}\n", name, value));
                }
                let [[tn, fp], [fn_, tp]] = m.confusion.as_rows();
                output.push_str(&format!(
                    "\n  {}\n  {:>14} {:>8}\n  {:<6} {:>7} {:>8}\n  {:<6} {:>7} {:>8}\n",
                    "Confusion matrix (rows: gold, cols: predicted)".dimmed(),
                    "0",
                    "1",
                    "0",
                    tn,
                    fp,
                    "1",
                    fn_,
                    tp
                ));
            }
            None => output.push_str(&format!("\n{}\n", "No gold labels to evaluate.".dimmed())),
        }

        output.push_str(&Self::footer());
        output
    }

    fn verdict(verdict: Verdict) -> String {
        match verdict {
            Verdict::Sarcastic => verdict.to_string().magenta().bold().to_string(),
            Verdict::NotSarcastic => verdict.to_string().green().bold().to_string(),
        }
    }

    fn strength(result: &AgentResult) -> String {
        let label = format!("[{}]", result.strength_label());
        if result.is_parse_failure() {
            label.red().to_string()
        } else {
            label.dimmed().to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarcasm_domain::{AgentOutputs, Perspective};

    fn sample() -> AnalysisResult {
        let outputs: AgentOutputs = [
            (Perspective::RhetoricalDevice, AgentResult::new(0.9, "Hyperbole.")),
            (Perspective::PersonaConflict, AgentResult::new(0.2, "Consistent persona.")),
        ]
        .into_iter()
        .collect();
        AnalysisResult {
            text: "Oh great, rain.".to_string(),
            decision: Verdict::NotSarcastic,
            reasoning: "Rule-based decision: SARCASTIC votes (1) vs. NOT SARCASTIC votes (1)."
                .to_string(),
            summary: "Overall Assessment: divided.".to_string(),
            activated_agents: outputs.perspectives().collect(),
            outputs,
            rounds_completed: 1,
        }
    }

    #[test]
    fn test_full_lists_every_perspective() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::render(&sample(), OutputFormat::Full);
        assert!(text.contains("── RhetoricalDeviceAgent ── [0.90]"));
        assert!(text.contains("  Consistent persona."));
        assert!(text.contains("Decision: NOT SARCASTIC"));
        assert!(text.contains("Overall Assessment: divided."));
    }

    #[test]
    fn test_decision_only() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::render(&sample(), OutputFormat::Decision);
        assert!(text.starts_with("NOT SARCASTIC\n"));
        assert!(!text.contains("Hyperbole"));
    }

    #[test]
    fn test_json_is_parseable() {
        let text = ConsoleFormatter::render(&sample(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["decision"], "NOT_SARCASTIC");
        assert_eq!(value["outputs"]["RhetoricalDeviceAgent"]["strength"], 0.9);
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
