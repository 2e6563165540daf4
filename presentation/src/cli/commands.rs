//! CLI command definitions

use clap::{Parser, ValueEnum};
use sarcasm_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    /// Every activated perspective, the vote and the summary
    Full,
    /// Only the decision and its reasoning
    Decision,
    /// JSON output
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Full => OutputFormat::Full,
            CliOutputFormat::Decision => OutputFormat::Decision,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for sarcasm-council
#[derive(Parser, Debug)]
#[command(name = "sarcasm-council")]
#[command(author, version, about = "Sarcasm detection by a council of debating perspectives")]
#[command(long_about = r#"
Sarcasm Council decides whether a text is sarcastic by running a small team
of reasoning perspectives over it.

The process:
1. Context:   optional web search for background knowledge
2. Selection: the most relevant perspectives score the text
3. Rounds:    the least certain perspective revises after reading its peers,
              and a gate decides whether to recruit another perspective
4. Vote:      strict majority of scores above the threshold

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./sarcasm.toml      Project-level config
3. ~/.config/sarcasm-council/config.toml   Global config

Example:
  sarcasm-council "Oh great, another Monday."
  sarcasm-council --context "A: How was the exam?" "Best day of my life."
  sarcasm-council --batch data.jsonl --out results.jsonl --workers 4
"#)]
pub struct Cli {
    /// The text to analyze (not required in batch mode)
    pub text: Option<String>,

    /// Preceding conversation for the text
    #[arg(long, value_name = "TEXT")]
    pub context: Option<String>,

    /// Analyze every record of a JSONL file instead of a single text
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub batch: Option<PathBuf>,

    /// Where batch result rows are written (JSONL)
    #[arg(long, value_name = "PATH", requires = "batch")]
    pub out: Option<PathBuf>,

    /// Records analyzed concurrently in batch mode
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Size of the initial team
    #[arg(long, value_name = "N")]
    pub n_initial: Option<usize>,

    /// Maximum debate rounds
    #[arg(long, value_name = "N")]
    pub max_rounds: Option<usize>,

    /// Strength a vote must exceed to count as sarcastic
    #[arg(long, value_name = "F")]
    pub threshold: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<CliOutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Tracing filter directive for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_text() {
        let cli = Cli::try_parse_from(["sarcasm-council", "-vv", "--threshold", "0.6", "Nice."])
            .unwrap();
        assert_eq!(cli.text.as_deref(), Some("Nice."));
        assert_eq!(cli.threshold, Some(0.6));
        assert_eq!(cli.log_level(), "debug");
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_batch_flags() {
        let cli = Cli::try_parse_from([
            "sarcasm-council",
            "--batch",
            "in.jsonl",
            "--out",
            "out.jsonl",
            "--workers",
            "4",
            "-o",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.batch, Some(PathBuf::from("in.jsonl")));
        assert_eq!(cli.workers, Some(4));
        assert_eq!(cli.output.map(OutputFormat::from), Some(OutputFormat::Json));
    }

    #[test]
    fn test_out_requires_batch() {
        assert!(Cli::try_parse_from(["sarcasm-council", "--out", "o.jsonl", "text"]).is_err());
    }

    #[test]
    fn test_text_conflicts_with_batch() {
        assert!(Cli::try_parse_from(["sarcasm-council", "--batch", "in.jsonl", "text"]).is_err());
    }
}
